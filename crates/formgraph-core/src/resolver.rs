//! Reading and mutating a value graph by dotted path.
//!
//! [`PathResolver`] walks a [`Value`] one segment at a time:
//!
//! - optional and dynamic wrappers are looked through before every step;
//! - a record selects the field with exactly that name;
//! - a mapping selects the key, creating it on write paths;
//! - a sequence parses the segment as an index. On write paths the index
//!   may equal the current length, which appends one growth slot; anything
//!   further out would leave a gap and is rejected;
//! - any scalar (or an empty optional) ends the walk with an error.
//!
//! Reads never mutate. [`lookup`] and [`sequence_len`] work on a shared
//! borrow so render passes can use them without exclusive access.
//!
//! # Example
//!
//! ```
//! use formgraph_core::{Path, PathResolver, Record, Sequence, Value};
//!
//! let mut data = Value::from(Record::new().with_field("Tags", Sequence::of("")));
//! let mut resolver = PathResolver::new(&mut data);
//!
//! resolver.set(&Path::parse("Tags.0"), Value::from("rust")).unwrap();
//! resolver.set(&Path::parse("Tags.1"), Value::from("forms")).unwrap();
//! assert!(resolver.set(&Path::parse("Tags.5"), Value::from("gap")).is_err());
//!
//! resolver.remove(&Path::parse("Tags.0")).unwrap();
//! assert_eq!(resolver.get(&Path::parse("Tags.0")).unwrap(), &Value::from("forms"));
//! ```

use log::trace;

use crate::error::AddressError;
use crate::path::Path;
use crate::value::Value;

/// Result type for path resolution.
pub type AddressResult<T> = std::result::Result<T, AddressError>;

/// Read access to the value at `path`.
///
/// The terminal value is returned with dynamic holders and filled optionals
/// looked through; an empty optional is returned as is.
pub fn lookup<'v>(root: &'v Value, path: &Path) -> AddressResult<&'v Value> {
    let mut current = root;
    for segment in path.segments() {
        current = child_ref(current, segment, path)?;
    }
    Ok(current.unwrapped())
}

/// Number of elements of the sequence at `path`.
pub fn sequence_len(root: &Value, path: &Path) -> AddressResult<usize> {
    match lookup(root, path)? {
        Value::Sequence(sequence) => Ok(sequence.len()),
        other => Err(AddressError::NotASequence {
            path: path.to_string(),
            kind: other.kind(),
        }),
    }
}

/// Exclusive access to a value graph for the duration of one pass.
#[derive(Debug)]
pub struct PathResolver<'a> {
    root: &'a mut Value,
}

impl<'a> PathResolver<'a> {
    /// Borrow `root` for resolution.
    pub fn new(root: &'a mut Value) -> Self {
        Self { root }
    }

    /// The whole graph.
    pub fn root(&self) -> &Value {
        self.root
    }

    /// Current value at `path`.
    pub fn get(&self, path: &Path) -> AddressResult<&Value> {
        lookup(self.root, path)
    }

    /// Number of elements of the sequence at `path`.
    pub fn len(&self, path: &Path) -> AddressResult<usize> {
        sequence_len(self.root, path)
    }

    /// Write `value` at `path`.
    ///
    /// Mapping entries are inserted or replaced. An optional slot is filled
    /// with the value, a dynamic slot takes any kind, a null slot takes any
    /// kind. Any other slot only accepts a value of its own kind.
    pub fn set(&mut self, path: &Path, value: Value) -> AddressResult<()> {
        trace!("set {path} = {:?}", value.kind());
        let (parents, last) = path.split_last();
        let parent = descend_mut(self.root, parents, path)?.unwrapped_mut();
        if let Value::Mapping(mapping) = parent {
            mapping.insert(last, value);
            return Ok(());
        }
        let slot = child_mut(parent, last, path)?;
        assign(slot, value, path)
    }

    /// Resolve `path` for writing without assigning anything.
    ///
    /// Missing mapping keys are created and a sequence may grow by its
    /// single allowed slot on the way, exactly as [`PathResolver::set`]
    /// would.
    pub fn ensure(&mut self, path: &Path) -> AddressResult<&mut Value> {
        trace!("ensure {path}");
        descend_mut(self.root, path.segments(), path)
    }

    /// Remove the mapping entry or sequence element at `path`.
    ///
    /// Later sequence elements shift down by one. Returns the removed value.
    pub fn remove(&mut self, path: &Path) -> AddressResult<Value> {
        trace!("remove {path}");
        let (parents, last) = path.split_last();
        match descend_mut(self.root, parents, path)?.unwrapped_mut() {
            Value::Mapping(mapping) => mapping.remove(last).ok_or_else(|| AddressError::MissingKey {
                path: path.to_string(),
                key: last.to_string(),
            }),
            Value::Sequence(sequence) => {
                let index = parse_index(last, path)?;
                let len = sequence.len();
                sequence.remove(index).ok_or_else(|| AddressError::IndexOutOfRange {
                    path: path.to_string(),
                    index,
                    len,
                })
            }
            Value::Record(_) => Err(AddressError::FixedField {
                path: path.to_string(),
                field: last.to_string(),
            }),
            Value::Optional(None) => Err(AddressError::EmptyOptional {
                path: path.to_string(),
                segment: last.to_string(),
            }),
            other => Err(AddressError::NotAContainer {
                path: path.to_string(),
                segment: last.to_string(),
                kind: other.kind(),
            }),
        }
    }

    /// Drop the elements of the sequence at `path` from index `len` on.
    ///
    /// Returns how many elements were dropped.
    pub fn truncate(&mut self, path: &Path, len: usize) -> AddressResult<usize> {
        match descend_mut(self.root, path.segments(), path)?.unwrapped_mut() {
            Value::Sequence(sequence) => {
                let dropped = sequence.len().saturating_sub(len);
                sequence.truncate(len);
                if dropped > 0 {
                    trace!("truncate {path} to {len}, dropped {dropped}");
                }
                Ok(dropped)
            }
            other => Err(AddressError::NotASequence {
                path: path.to_string(),
                kind: other.kind(),
            }),
        }
    }
}

// ============================================================================
// Traversal
// ============================================================================

fn parse_index(segment: &str, path: &Path) -> AddressResult<usize> {
    segment.parse().map_err(|_| AddressError::NotAnIndex {
        path: path.to_string(),
        segment: segment.to_string(),
    })
}

fn not_a_container(value: &Value, segment: &str, path: &Path) -> AddressError {
    match value {
        Value::Optional(None) => AddressError::EmptyOptional {
            path: path.to_string(),
            segment: segment.to_string(),
        },
        other => AddressError::NotAContainer {
            path: path.to_string(),
            segment: segment.to_string(),
            kind: other.kind(),
        },
    }
}

fn child_ref<'v>(container: &'v Value, segment: &str, path: &Path) -> AddressResult<&'v Value> {
    match container.unwrapped() {
        Value::Record(record) => record.get(segment).ok_or_else(|| AddressError::UnknownField {
            path: path.to_string(),
            field: segment.to_string(),
        }),
        Value::Mapping(mapping) => mapping.get(segment).ok_or_else(|| AddressError::MissingKey {
            path: path.to_string(),
            key: segment.to_string(),
        }),
        Value::Sequence(sequence) => {
            let index = parse_index(segment, path)?;
            sequence.get(index).ok_or_else(|| AddressError::IndexOutOfRange {
                path: path.to_string(),
                index,
                len: sequence.len(),
            })
        }
        other => Err(not_a_container(other, segment, path)),
    }
}

fn child_mut<'v>(
    container: &'v mut Value,
    segment: &str,
    path: &Path,
) -> AddressResult<&'v mut Value> {
    match container.unwrapped_mut() {
        Value::Record(record) => record.get_mut(segment).ok_or_else(|| AddressError::UnknownField {
            path: path.to_string(),
            field: segment.to_string(),
        }),
        Value::Mapping(mapping) => Ok(mapping.entry(segment)),
        Value::Sequence(sequence) => {
            let index = parse_index(segment, path)?;
            let len = sequence.len();
            if index == len {
                trace!("grow {path} at index {index}");
                return Ok(sequence.grow());
            }
            sequence.get_mut(index).ok_or_else(|| AddressError::IndexGap {
                path: path.to_string(),
                index,
                len,
            })
        }
        other => Err(not_a_container(other, segment, path)),
    }
}

fn descend_mut<'v>(
    root: &'v mut Value,
    segments: &[String],
    path: &Path,
) -> AddressResult<&'v mut Value> {
    let mut current = root;
    for segment in segments {
        current = child_mut(current, segment, path)?;
    }
    Ok(current)
}

fn assign(slot: &mut Value, value: Value, path: &Path) -> AddressResult<()> {
    match slot {
        Value::Optional(inner) => {
            *inner = Some(Box::new(value));
            Ok(())
        }
        Value::Dynamic(inner) => {
            **inner = value;
            Ok(())
        }
        Value::Null => {
            *slot = value;
            Ok(())
        }
        current if current.kind() == value.kind() => {
            *current = value;
            Ok(())
        }
        current => Err(AddressError::TypeMismatch {
            path: path.to_string(),
            expected: current.kind(),
            found: value.kind(),
        }),
    }
}
