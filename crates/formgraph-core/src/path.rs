//! Dotted paths addressing one location in a value graph.
//!
//! A widget id such as `Addresses.2.Street` is split on `.` into segments.
//! Segments are matched against record field names, mapping keys or
//! sequence indices depending on the container they meet.

use std::fmt;

/// An ordered sequence of path segments.
///
/// # Example
///
/// ```
/// use formgraph_core::Path;
///
/// let path = Path::parse("Addresses.2.Street");
/// assert_eq!(path.segments().len(), 3);
/// assert_eq!(path.to_string(), "Addresses.2.Street");
/// assert_eq!(Path::parse("Tags").child(4).to_string(), "Tags.4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Split a dotted id into a path. Never fails; an empty id yields a
    /// single empty segment, which no container will match.
    pub fn parse(id: &str) -> Self {
        Self {
            segments: id.split('.').map(str::to_string).collect(),
        }
    }

    /// The segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments (always at least one).
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Splits off the last segment.
    pub fn split_last(&self) -> (&[String], &str) {
        match self.segments.split_last() {
            Some((last, parents)) => (parents, last.as_str()),
            None => (&[], ""),
        }
    }

    /// The last segment.
    pub fn last(&self) -> &str {
        self.split_last().1
    }

    /// The path one level up, or `None` for a single-segment path.
    pub fn parent(&self) -> Option<Path> {
        let (parents, _) = self.split_last();
        (!parents.is_empty()).then(|| Path {
            segments: parents.to_vec(),
        })
    }

    /// Append one segment.
    pub fn child(&self, segment: impl fmt::Display) -> Path {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Path { segments }
    }

    /// If `id` names a direct indexed child of this path (`<self>.<n>`),
    /// return `n`.
    ///
    /// Only canonical decimal indices match: digits of any width, without
    /// sign and without leading zeros. `L.07` is not the child `L.7`.
    pub fn child_index(&self, id: &str) -> Option<usize> {
        let rest = id.strip_prefix(self.to_string().as_str())?;
        let digits = rest.strip_prefix('.')?;
        let canonical = !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && (digits == "0" || !digits.starts_with('0'));
        if canonical { digits.parse().ok() } else { None }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl From<&str> for Path {
    fn from(id: &str) -> Self {
        Path::parse(id)
    }
}

impl From<&String> for Path {
    fn from(id: &String) -> Self {
        Path::parse(id)
    }
}

impl From<String> for Path {
    fn from(id: String) -> Self {
        Path::parse(&id)
    }
}
