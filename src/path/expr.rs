//! Path expressions
//!
//! A path is an ordered, non-empty sequence of segments; each segment is
//! either a literal element name or the `*` wildcard. Segments never
//! contain the `/` separator: expressions are split here, pre-split
//! segment lists are validated here.

use std::fmt;

use memchr::memchr_iter;

use crate::error::PathError;

/// Segment value matching any element child at its level
pub const WILDCARD: &str = "*";

/// One unit of a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matches any element child
    Wildcard,
    /// Matches element children with exactly this name
    Name(String),
}

impl Segment {
    /// Validate one pre-split segment
    fn new(s: &str, position: usize) -> Result<Self, PathError> {
        if s.is_empty() {
            return Err(PathError::EmptySegment(position));
        }
        if s.contains('/') {
            return Err(PathError::Separator(s.to_string()));
        }
        if s == WILDCARD {
            Ok(Segment::Wildcard)
        } else {
            Ok(Segment::Name(s.to_string()))
        }
    }

    /// Whether this segment admits an element with the given name.
    /// Exact and case-sensitive; only the wildcard is special.
    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Segment::Wildcard => true,
            Segment::Name(n) => n == name,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Wildcard => f.write_str(WILDCARD),
            Segment::Name(n) => f.write_str(n),
        }
    }
}

/// An ordered, non-empty sequence of segments
///
/// Immutable once constructed; both constructors reject the empty path,
/// so a `Path` value is always traversable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Parse a `/`-separated expression such as `"CATALOG/CD"` or
    /// `"note/*"`
    pub fn parse(expr: &str) -> Result<Self, PathError> {
        if expr.is_empty() {
            return Err(PathError::Empty);
        }
        let bytes = expr.as_bytes();
        let mut segments = Vec::new();
        let mut start = 0;
        for sep in memchr_iter(b'/', bytes) {
            segments.push(Segment::new(&expr[start..sep], segments.len())?);
            start = sep + 1;
        }
        segments.push(Segment::new(&expr[start..], segments.len())?);
        Ok(Path { segments })
    }

    /// Build a path from segments the caller already split
    pub fn from_segments<I, S>(segments: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments = segments
            .into_iter()
            .enumerate()
            .map(|(i, s)| Segment::new(s.as_ref(), i))
            .collect::<Result<Vec<_>, _>>()?;
        if segments.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(Path { segments })
    }

    /// The segments in order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments, which equals the depth of every match below
    /// the query root
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
