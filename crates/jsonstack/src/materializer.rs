//! Materializer: rebuilds a [`Value`] from recognizer events.
//!
//! Nodes live in an arena and are addressed by index. The stack holds the
//! indices of the open containers above the root; every `start_*` appends a
//! container to the current top and pushes it, every `end_*` pops it. Nothing
//! is converted until [`Materializer::result`].
//!
//! Because a node is always appended after its parent, children have larger
//! indices than their parents. `result` walks the arena from the back, so each
//! container finds its children already converted, with no recursion.

use alloc::{vec, vec::Vec};
use core::mem;

use crate::{
    error::MaterializeError,
    event::{EventSink, Scalar},
    options::DuplicateKeys,
    value::{Map, Value},
};

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContainerKind {
    Object,
    Array,
}

#[derive(Debug, PartialEq)]
enum NodeKind {
    Root,
    Container(ContainerKind),
    Scalar(Scalar),
}

#[derive(Debug)]
struct Node {
    kind: NodeKind,
    /// For objects: keys and values, alternating.
    children: Vec<NodeId>,
}

/// An [`EventSink`] that builds the document tree.
///
/// Use a fresh materializer for every parse.
///
/// ```
/// use jsonstack::{DuplicateKeys, EventSink, Materializer, Scalar, Value};
///
/// let mut m = Materializer::new(DuplicateKeys::LastWins);
/// m.start_array();
/// m.scalar(Scalar::Number(1.0));
/// assert_eq!(m.depth(), 1);
/// m.end_array();
/// assert_eq!(m.result(), Ok(Value::Array(vec![Value::Number(1.0)])));
/// ```
#[derive(Debug)]
pub struct Materializer {
    nodes: Vec<Node>,
    stack: Vec<NodeId>,
    duplicate_keys: DuplicateKeys,
    /// First inconsistency seen in the event stream. Later events are ignored.
    fault: Option<MaterializeError>,
}

impl Default for Materializer {
    fn default() -> Self {
        Self::new(DuplicateKeys::default())
    }
}

impl Materializer {
    /// Creates a materializer whose stack holds only the root.
    #[must_use]
    pub fn new(duplicate_keys: DuplicateKeys) -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Root,
                children: Vec::new(),
            }],
            stack: vec![ROOT],
            duplicate_keys,
            fault: None,
        }
    }

    /// Number of containers currently open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    fn append(&mut self, kind: NodeKind) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            kind,
            children: Vec::new(),
        });
        let top = self.stack.last().copied().unwrap_or(ROOT);
        self.nodes[top].children.push(id);
        id
    }

    fn start(&mut self, kind: ContainerKind) {
        if self.fault.is_some() {
            return;
        }
        let id = self.append(NodeKind::Container(kind));
        self.stack.push(id);
    }

    fn end(&mut self, kind: ContainerKind) {
        if self.fault.is_some() {
            return;
        }
        if self.stack.len() == 1 {
            self.fault = Some(MaterializeError::UnmatchedEnd);
            return;
        }
        if let Some(top) = self.stack.pop() {
            if self.nodes[top].kind != NodeKind::Container(kind) {
                self.fault = Some(MaterializeError::MismatchedEnd);
            }
        }
    }

    /// Converts the finished tree into a [`Value`].
    ///
    /// # Errors
    ///
    /// Fails unless the events described exactly one complete value: every
    /// container closed by an end of its own kind, a single top-level value,
    /// and objects made of string keys each followed by a value.
    pub fn result(mut self) -> Result<Value, MaterializeError> {
        if let Some(fault) = self.fault.take() {
            return Err(fault);
        }
        if self.stack.len() != 1 {
            return Err(MaterializeError::Unbalanced {
                depth: self.depth(),
            });
        }
        let top = match self.nodes[ROOT].children.as_slice() {
            [] => return Err(MaterializeError::MissingRoot),
            &[id] => id,
            ids => return Err(MaterializeError::MultipleRoots { count: ids.len() }),
        };

        let mut built = vec![Value::Null; self.nodes.len()];
        for (id, node) in mem::take(&mut self.nodes).into_iter().enumerate().rev() {
            built[id] = match node.kind {
                NodeKind::Root => continue,
                NodeKind::Scalar(scalar) => scalar.into(),
                NodeKind::Container(ContainerKind::Array) => Value::Array(
                    node.children
                        .iter()
                        .map(|&child| mem::take(&mut built[child]))
                        .collect(),
                ),
                NodeKind::Container(ContainerKind::Object) => {
                    Value::Object(self.build_object(&node.children, &mut built)?)
                }
            };
        }
        Ok(mem::take(&mut built[top]))
    }

    fn build_object(&self, children: &[NodeId], built: &mut [Value]) -> Result<Map, MaterializeError> {
        let mut map = Map::new();
        for pair in children.chunks(2) {
            let &[key, value] = pair else {
                return Err(MaterializeError::DanglingKey);
            };
            let Value::String(key) = mem::take(&mut built[key]) else {
                return Err(MaterializeError::NonStringKey);
            };
            let value = mem::take(&mut built[value]);
            match self.duplicate_keys {
                DuplicateKeys::LastWins => {
                    map.insert(key, value);
                }
                DuplicateKeys::FirstWins => {
                    map.entry(key).or_insert(value);
                }
            }
        }
        Ok(map)
    }
}

impl EventSink for Materializer {
    fn start_object(&mut self) {
        self.start(ContainerKind::Object);
    }

    fn end_object(&mut self) {
        self.end(ContainerKind::Object);
    }

    fn start_array(&mut self) {
        self.start(ContainerKind::Array);
    }

    fn end_array(&mut self) {
        self.end(ContainerKind::Array);
    }

    fn scalar(&mut self, value: Scalar) {
        if self.fault.is_none() {
            self.append(NodeKind::Scalar(value));
        }
    }
}
