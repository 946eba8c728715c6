/// How an object that repeats a key is materialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateKeys {
    /// The last occurrence of a key replaces earlier ones.
    #[default]
    LastWins,
    /// The first occurrence of a key is kept; later ones are ignored.
    FirstWins,
}

/// Configuration options for parsing.
///
/// # Examples
///
/// ```rust
/// use jsonstack::{ParserOptions, Value, parse_with};
///
/// let options = ParserOptions {
///     allow_scalar_root: true,
///     ..Default::default()
/// };
/// assert_eq!(parse_with("42", options), Ok(Value::Number(42.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether a document may consist of a single string, number, boolean or
    /// null instead of an object or array.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_scalar_root: bool,

    /// Maximum number of simultaneously open objects and arrays. Deeper input
    /// is rejected with
    /// [`SyntaxErrorKind::DepthLimitExceeded`](crate::SyntaxErrorKind::DepthLimitExceeded).
    ///
    /// # Default
    ///
    /// `512`
    pub max_depth: usize,

    /// Policy for repeated object keys.
    ///
    /// # Default
    ///
    /// [`DuplicateKeys::LastWins`]
    pub duplicate_keys: DuplicateKeys,
}

impl ParserOptions {
    /// Default for [`ParserOptions::max_depth`].
    pub const DEFAULT_MAX_DEPTH: usize = 512;
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            allow_scalar_root: false,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            duplicate_keys: DuplicateKeys::LastWins,
        }
    }
}
