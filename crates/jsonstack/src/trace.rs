//! Opt-in diagnostics. Build with `RUSTFLAGS="--cfg trace_parser"` to print
//! scanner and recognizer transitions to stderr.

#[cfg(trace_parser)]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::std::eprintln!("[jsonstack] {}", ::core::format_args!($($arg)*))
    };
}

#[cfg(not(trace_parser))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}
