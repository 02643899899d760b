//! The value graph that form widgets bind onto.
//!
//! A [`Value`] is a uniform node: scalars at the leaves, and four kinds of
//! containers above them. Records have a fixed set of named fields, mappings
//! accept any string key, sequences are contiguous and grow from an element
//! prototype, and optional/dynamic wrappers are looked through transparently
//! by the [`PathResolver`](crate::PathResolver).
//!
//! # Example
//!
//! ```
//! use formgraph_core::{Record, Sequence, Value};
//!
//! let user = Value::from(
//!     Record::new()
//!         .with_field("Name", "")
//!         .with_field("Age", 0)
//!         .with_field("Tags", Sequence::of("")),
//! );
//! assert_eq!(user.as_record().map(|r| r.len()), Some(3));
//! ```

mod containers;
mod json;

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

pub use containers::{Mapping, Record, Sequence};

/// One node in the data graph.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value; accepts an assignment of any kind.
    #[default]
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Machine integer scalar.
    Int(i64),
    /// String scalar.
    Str(String),
    /// Instant in time, stored in UTC.
    Time(DateTime<Utc>),
    /// Fixed named fields.
    Record(Record),
    /// String-keyed entries that may be created on write.
    Mapping(Mapping),
    /// Index-keyed, contiguous elements.
    Sequence(Sequence),
    /// Nullable reference to a single value.
    Optional(Option<Box<Value>>),
    /// Type-erased holder; any kind may be assigned into it.
    Dynamic(Box<Value>),
}

/// The kind of a [`Value`], used for type checks and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// [`Value::Null`]
    Null,
    /// [`Value::Bool`]
    Bool,
    /// [`Value::Int`]
    Int,
    /// [`Value::Str`]
    Str,
    /// [`Value::Time`]
    Time,
    /// [`Value::Record`]
    Record,
    /// [`Value::Mapping`]
    Mapping,
    /// [`Value::Sequence`]
    Sequence,
    /// [`Value::Optional`]
    Optional,
    /// [`Value::Dynamic`]
    Dynamic,
}

impl Kind {
    /// Returns the lowercase name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Int => "integer",
            Kind::Str => "string",
            Kind::Time => "time",
            Kind::Record => "record",
            Kind::Mapping => "mapping",
            Kind::Sequence => "sequence",
            Kind::Optional => "optional",
            Kind::Dynamic => "dynamic",
        }
    }

    /// Returns `true` for leaf kinds.
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            Kind::Null | Kind::Bool | Kind::Int | Kind::Str | Kind::Time
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// The zero instant, `0001-01-01T00:00:00Z`.
    ///
    /// Time widgets write this when no submitted format parses.
    pub fn zero_time() -> DateTime<Utc> {
        let date = NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN);
        Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
    }

    /// Wraps a value in a filled optional.
    pub fn some(value: impl Into<Value>) -> Self {
        Value::Optional(Some(Box::new(value.into())))
    }

    /// An empty optional.
    pub fn none() -> Self {
        Value::Optional(None)
    }

    /// Wraps a value in a type-erased holder.
    pub fn dynamic(value: impl Into<Value>) -> Self {
        Value::Dynamic(Box::new(value.into()))
    }

    /// Returns the kind of this node without looking through wrappers.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Str(_) => Kind::Str,
            Value::Time(_) => Kind::Time,
            Value::Record(_) => Kind::Record,
            Value::Mapping(_) => Kind::Mapping,
            Value::Sequence(_) => Kind::Sequence,
            Value::Optional(_) => Kind::Optional,
            Value::Dynamic(_) => Kind::Dynamic,
        }
    }

    /// Looks through filled optionals and dynamic holders.
    ///
    /// An empty optional is returned as is.
    pub fn unwrapped(&self) -> &Value {
        match self {
            Value::Dynamic(inner) => inner.unwrapped(),
            Value::Optional(Some(inner)) => inner.unwrapped(),
            other => other,
        }
    }

    /// Mutable counterpart of [`Value::unwrapped`].
    pub fn unwrapped_mut(&mut self) -> &mut Value {
        match self {
            Value::Dynamic(inner) => inner.unwrapped_mut(),
            Value::Optional(Some(inner)) => inner.unwrapped_mut(),
            other => other,
        }
    }

    /// Returns a value of the same shape holding nothing.
    ///
    /// Scalars become their zero, containers become empty while keeping
    /// their prototypes, records keep every field zeroed.
    pub fn zeroed(&self) -> Value {
        match self {
            Value::Null => Value::Null,
            Value::Bool(_) => Value::Bool(false),
            Value::Int(_) => Value::Int(0),
            Value::Str(_) => Value::Str(String::new()),
            Value::Time(_) => Value::Time(Value::zero_time()),
            Value::Record(record) => Value::Record(record.zeroed()),
            Value::Mapping(mapping) => Value::Mapping(mapping.zeroed()),
            Value::Sequence(sequence) => Value::Sequence(sequence.zeroed()),
            Value::Optional(_) => Value::Optional(None),
            Value::Dynamic(_) => Value::Dynamic(Box::new(Value::Null)),
        }
    }

    /// Returns `true` for [`Value::Null`] and empty optionals, after
    /// looking through dynamic holders.
    pub fn is_null(&self) -> bool {
        matches!(self.unwrapped(), Value::Null | Value::Optional(None))
    }

    /// Returns the string, looking through wrappers.
    pub fn as_str(&self) -> Option<&str> {
        match self.unwrapped() {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean, looking through wrappers.
    pub fn as_bool(&self) -> Option<bool> {
        match self.unwrapped() {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, looking through wrappers.
    pub fn as_int(&self) -> Option<i64> {
        match self.unwrapped() {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the instant, looking through wrappers.
    pub fn as_time(&self) -> Option<DateTime<Utc>> {
        match self.unwrapped() {
            Value::Time(t) => Some(*t),
            _ => None,
        }
    }

    /// Returns the record, looking through wrappers.
    pub fn as_record(&self) -> Option<&Record> {
        match self.unwrapped() {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the mapping, looking through wrappers.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self.unwrapped() {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the sequence, looking through wrappers.
    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self.unwrapped() {
            Value::Sequence(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::Time(t)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::Record(r)
    }
}

impl From<Mapping> for Value {
    fn from(m: Mapping) -> Self {
        Value::Mapping(m)
    }
}

impl From<Sequence> for Value {
    fn from(s: Sequence) -> Self {
        Value::Sequence(s)
    }
}
