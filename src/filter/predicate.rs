//! Composable boolean tests over values.

use std::borrow::Cow;
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

type Test<T> = Box<dyn Fn(&T) -> bool>;

/// A boolean test tree: caller-supplied leaves joined by AND, OR and NOT.
///
/// Evaluation is structural recursion. `And` and `Or` evaluate their left
/// side first and short-circuit. Trees are immutable once built.
pub enum Predicate<T> {
    /// A caller-supplied test, with a label used for display.
    Leaf {
        label: Cow<'static, str>,
        test: Test<T>,
    },
    /// Both sides accept.
    And(Box<Predicate<T>>, Box<Predicate<T>>),
    /// Either side accepts.
    Or(Box<Predicate<T>>, Box<Predicate<T>>),
    /// The inner predicate rejects.
    Not(Box<Predicate<T>>),
}

impl<T> Predicate<T> {
    /// A leaf predicate.
    pub fn leaf(
        label: impl Into<Cow<'static, str>>,
        test: impl Fn(&T) -> bool + 'static,
    ) -> Self {
        Self::Leaf {
            label: label.into(),
            test: Box::new(test),
        }
    }

    /// Whether `value` passes this predicate.
    pub fn accept(&self, value: &T) -> bool {
        match self {
            Self::Leaf { test, .. } => test(value),
            Self::And(left, right) => left.accept(value) && right.accept(value),
            Self::Or(left, right) => left.accept(value) || right.accept(value),
            Self::Not(inner) => !inner.accept(value),
        }
    }

    /// Both `self` and `other` must accept.
    pub fn and(self, other: Self) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    /// Either `self` or `other` must accept.
    pub fn or(self, other: Self) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    /// Accept exactly what `self` rejects.
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Number of leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::And(left, right) | Self::Or(left, right) => {
                left.leaf_count() + right.leaf_count()
            }
            Self::Not(inner) => inner.leaf_count(),
        }
    }
}

impl<T: 'static> Predicate<T> {
    /// Accepts every value.
    pub fn always() -> Self {
        Self::leaf("always", |_: &T| true)
    }
}

impl<T: AsRef<str> + 'static> Predicate<T> {
    /// Accepts text that does not contain `c`.
    pub fn lacks_char(c: char) -> Self {
        Self::leaf(format!("lacks {:?}", c), move |v: &T| !v.as_ref().contains(c))
    }

    /// Accepts text that contains `c`.
    pub fn contains_char(c: char) -> Self {
        Self::leaf(format!("has {:?}", c), move |v: &T| v.as_ref().contains(c))
    }

    /// Accepts text that does not contain `needle`.
    pub fn lacks_substring(needle: impl Into<String>) -> Self {
        let needle = needle.into();
        Self::leaf(format!("lacks {:?}", needle), move |v: &T| {
            !v.as_ref().contains(needle.as_str())
        })
    }
}

/// `and(a, b)`: both must accept.
pub fn and<T>(first: Predicate<T>, second: Predicate<T>) -> Predicate<T> {
    first.and(second)
}

/// `or(a, b)`: either must accept.
pub fn or<T>(first: Predicate<T>, second: Predicate<T>) -> Predicate<T> {
    first.or(second)
}

/// `not(p)`: accepts what `p` rejects.
pub fn not<T>(predicate: Predicate<T>) -> Predicate<T> {
    predicate.negate()
}

impl<T> BitAnd for Predicate<T> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl<T> BitOr for Predicate<T> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl<T> Not for Predicate<T> {
    type Output = Self;

    fn not(self) -> Self {
        self.negate()
    }
}

impl<T> fmt::Display for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf { label, .. } => write!(f, "{}", label),
            Self::And(left, right) => write!(f, "({} AND {})", left, right),
            Self::Or(left, right) => write!(f, "({} OR {})", left, right),
            Self::Not(inner) => write!(f, "NOT {}", inner),
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicate({})", self)
    }
}
