//! The Single/Multiple node used at every level of a resolved reference.

use std::ops::RangeInclusive;

use super::error::{AccessShapeError, ComparisonError, Level, Shape};

/// One position within a multiple node: either a value or a discontinuity
/// where the source text had a comma or semicolon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element<T> {
    Value(T),
    Gap,
}

impl<T> Element<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Element::Value(value) => Some(value),
            Element::Gap => None,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, Element::Gap)
    }
}

/// A level of a reference: exactly one value, or an ordered, possibly gapped
/// sequence. Which of the two is decided by what was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeNode<T> {
    Single(T),
    Multiple(Vec<Element<T>>),
}

impl<T> RangeNode<T> {
    pub fn shape(&self) -> Shape {
        match self {
            RangeNode::Single(_) => Shape::Single,
            RangeNode::Multiple(_) => Shape::Multiple,
        }
    }

    pub fn is_single(&self) -> bool {
        matches!(self, RangeNode::Single(_))
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, RangeNode::Multiple(_))
    }

    /// Every value in order regardless of shape, gaps skipped.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        let (single, elements) = match self {
            RangeNode::Single(value) => (Some(value), &[][..]),
            RangeNode::Multiple(elements) => (None, elements.as_slice()),
        };
        single
            .into_iter()
            .chain(
                elements
                    .iter()
                    .filter_map(Element::value),
            )
    }

    pub fn len(&self) -> usize {
        self.values()
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_gaps(&self) -> bool {
        match self {
            RangeNode::Single(_) => false,
            RangeNode::Multiple(elements) => elements
                .iter()
                .any(Element::is_gap),
        }
    }

    pub(crate) fn single(&self, level: Level) -> Result<&T, AccessShapeError> {
        match self {
            RangeNode::Single(value) => Ok(value),
            RangeNode::Multiple(_) => Err(AccessShapeError {
                level,
                requested: Shape::Single,
                actual: Shape::Multiple,
            }),
        }
    }

    pub(crate) fn multiple(&self, level: Level) -> Result<Series<'_, T>, AccessShapeError> {
        match self {
            RangeNode::Multiple(elements) => Ok(Series { elements }),
            RangeNode::Single(_) => Err(AccessShapeError {
                level,
                requested: Shape::Multiple,
                actual: Shape::Single,
            }),
        }
    }
}

/// Borrowed view over the elements of a multiple node.
#[derive(Debug)]
pub struct Series<'a, T> {
    elements: &'a [Element<T>],
}

impl<'a, T> Series<'a, T> {
    /// The values in order, gaps skipped.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> {
        self.elements
            .iter()
            .filter_map(Element::value)
    }

    /// The raw elements, gaps included.
    pub fn elements(&self) -> &'a [Element<T>] {
        self.elements
    }

    /// The value at position `index`, counting values only.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.iter()
            .nth(index)
    }

    pub fn first(&self) -> Option<&'a T> {
        self.get(0)
    }

    pub fn last(&self) -> Option<&'a T> {
        self.elements
            .iter()
            .rev()
            .find_map(Element::value)
    }

    pub fn len(&self) -> usize {
        self.iter()
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_gaps(&self) -> bool {
        self.elements
            .iter()
            .any(Element::is_gap)
    }
}

/// Values that are identified by their chapter or verse number.
pub trait Numbered {
    fn number(&self) -> u16;
}

/// One term of a list comparison: a single number or an inclusive run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    One(u16),
    Range(u16, u16),
}

impl From<u16> for Span {
    fn from(value: u16) -> Self {
        Span::One(value)
    }
}

impl From<RangeInclusive<u16>> for Span {
    fn from(range: RangeInclusive<u16>) -> Self {
        Span::Range(*range.start(), *range.end())
    }
}

impl<T: Numbered> RangeNode<T> {
    pub fn numbers(&self) -> impl Iterator<Item = u16> + '_ {
        self.values()
            .map(Numbered::number)
    }

    /// Whether this node is exactly the given value. Comparing a scalar with
    /// a multiple node is an error rather than a mismatch.
    pub fn equals_value(&self, value: u16) -> Result<bool, ComparisonError> {
        match self {
            RangeNode::Single(single) => Ok(single.number() == value),
            RangeNode::Multiple(_) => Err(ComparisonError::NotSingle),
        }
    }

    /// Whether this node covers exactly `lo..=hi`. A node with gaps can never
    /// be described as one contiguous range.
    pub fn equals_range(&self, range: RangeInclusive<u16>) -> Result<bool, ComparisonError> {
        if self.has_gaps() {
            return Err(ComparisonError::NotContiguous);
        }
        Ok(self
            .numbers()
            .eq(range))
    }

    /// Whether the values of this node, gaps removed, match the list with
    /// each range expanded into its members.
    pub fn equals_list(&self, spans: &[Span]) -> bool {
        let expected = spans
            .iter()
            .flat_map(|span| match *span {
                Span::One(value) => value..=value,
                Span::Range(lo, hi) => lo..=hi,
            });
        self.numbers()
            .eq(expected)
    }
}
