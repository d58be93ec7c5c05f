//! Return-flow lattice.
//!
//! Abstracts whether a piece of code returns, and with which type, into
//! three states ordered by certainty: `Never < Maybe(T) < Always(T)`.
//! Statements produce a flow value, and blocks, branches and loops combine
//! their children's values with the operators below.

use dwislpy_core::Type;
use std::fmt;

/// Return behavior of a statement or block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnFlow {
    /// No path returns.
    Never,
    /// Some paths return a `T`, others fall through.
    Maybe(Type),
    /// Every path returns a `T`.
    Always(Type),
}

/// Two paths that return different types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowConflict {
    pub first: Type,
    pub second: Type,
}

impl ReturnFlow {
    /// Sequencing: the flow of `self` followed by `next`.
    ///
    /// Once a prefix always returns, whatever follows is unreachable and
    /// does not affect the result.
    ///
    /// # Errors
    /// Returns a [`FlowConflict`] when a possible return of one type is
    /// followed by a return of another.
    pub fn then(self, next: ReturnFlow) -> Result<ReturnFlow, FlowConflict> {
        use ReturnFlow::{Always, Maybe, Never};

        match (self, next) {
            (Never, next) => Ok(next),
            (Always(ty), _) => Ok(Always(ty)),
            (Maybe(ty), Never) => Ok(Maybe(ty)),
            (Maybe(first), Maybe(second)) => same_type(first, second).map(Maybe),
            (Maybe(first), Always(second)) => same_type(first, second).map(Always),
        }
    }

    /// Branching: the flow of an `if` whose two arms have flows `self` and
    /// `other`. An `if` without `else` uses `Never` for the missing arm.
    ///
    /// # Errors
    /// Returns a [`FlowConflict`] when the arms return different types.
    pub fn branch(self, other: ReturnFlow) -> Result<ReturnFlow, FlowConflict> {
        use ReturnFlow::{Always, Maybe, Never};

        match (self, other) {
            (Never, Never) => Ok(Never),
            (Always(first), Always(second)) => same_type(first, second).map(Always),
            (Never, Always(ty) | Maybe(ty)) | (Always(ty) | Maybe(ty), Never) => Ok(Maybe(ty)),
            (Maybe(first) | Always(first), Maybe(second))
            | (Maybe(first), Always(second)) => same_type(first, second).map(Maybe),
        }
    }

    /// Looping: a loop body may run zero times, so certainty drops one level.
    #[must_use]
    pub fn repeat(self) -> ReturnFlow {
        match self {
            ReturnFlow::Never => ReturnFlow::Never,
            ReturnFlow::Maybe(ty) | ReturnFlow::Always(ty) => ReturnFlow::Maybe(ty),
        }
    }

    /// The returned type, if any path returns.
    #[must_use]
    pub fn return_type(self) -> Option<Type> {
        match self {
            ReturnFlow::Never => None,
            ReturnFlow::Maybe(ty) | ReturnFlow::Always(ty) => Some(ty),
        }
    }
}

fn same_type(first: Type, second: Type) -> Result<Type, FlowConflict> {
    if first.equals(second) {
        Ok(first)
    } else {
        Err(FlowConflict { first, second })
    }
}

impl fmt::Display for ReturnFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnFlow::Never => write!(f, "never returns"),
            ReturnFlow::Maybe(ty) => write!(f, "may return '{ty}'"),
            ReturnFlow::Always(ty) => write!(f, "always returns '{ty}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ReturnFlow::{Always, Maybe, Never};
    use super::*;

    #[test]
    fn test_sequencing() {
        assert_eq!(Never.then(Never), Ok(Never));
        assert_eq!(Never.then(Always(Type::Int)), Ok(Always(Type::Int)));
        assert_eq!(Never.then(Maybe(Type::Int)), Ok(Maybe(Type::Int)));
        assert_eq!(Maybe(Type::Int).then(Never), Ok(Maybe(Type::Int)));
        assert_eq!(Maybe(Type::Int).then(Maybe(Type::Int)), Ok(Maybe(Type::Int)));
        assert_eq!(Maybe(Type::Int).then(Always(Type::Int)), Ok(Always(Type::Int)));
    }

    #[test]
    fn test_sequencing_ignores_unreachable_suffix() {
        assert_eq!(Always(Type::Int).then(Never), Ok(Always(Type::Int)));
        assert_eq!(Always(Type::Int).then(Always(Type::Str)), Ok(Always(Type::Int)));
        assert_eq!(Always(Type::Int).then(Maybe(Type::Str)), Ok(Always(Type::Int)));
    }

    #[test]
    fn test_sequencing_conflict() {
        assert_eq!(
            Maybe(Type::Int).then(Always(Type::Str)),
            Err(FlowConflict {
                first: Type::Int,
                second: Type::Str,
            })
        );
    }

    #[test]
    fn test_branching() {
        assert_eq!(Never.branch(Never), Ok(Never));
        assert_eq!(Always(Type::Int).branch(Always(Type::Int)), Ok(Always(Type::Int)));
        assert_eq!(Always(Type::Int).branch(Never), Ok(Maybe(Type::Int)));
        assert_eq!(Never.branch(Always(Type::Int)), Ok(Maybe(Type::Int)));
        assert_eq!(Maybe(Type::Str).branch(Never), Ok(Maybe(Type::Str)));
        assert_eq!(Always(Type::Str).branch(Maybe(Type::Str)), Ok(Maybe(Type::Str)));
        assert_eq!(Maybe(Type::Str).branch(Always(Type::Str)), Ok(Maybe(Type::Str)));
    }

    #[test]
    fn test_branching_is_symmetric() {
        let flows = [
            Never,
            Maybe(Type::Int),
            Always(Type::Int),
            Maybe(Type::Str),
            Always(Type::Str),
        ];
        for a in flows {
            for b in flows {
                assert_eq!(a.branch(b).is_ok(), b.branch(a).is_ok(), "{a} / {b}");
                if let (Ok(ab), Ok(ba)) = (a.branch(b), b.branch(a)) {
                    assert_eq!(ab, ba, "{a} / {b}");
                }
            }
        }
    }

    #[test]
    fn test_branching_conflict() {
        assert!(Always(Type::Int).branch(Always(Type::Str)).is_err());
        assert!(Maybe(Type::Int).branch(Always(Type::None)).is_err());
    }

    #[test]
    fn test_looping_downgrades_certainty() {
        assert_eq!(Never.repeat(), Never);
        assert_eq!(Maybe(Type::Bool).repeat(), Maybe(Type::Bool));
        assert_eq!(Always(Type::Bool).repeat(), Maybe(Type::Bool));
    }

    #[test]
    fn test_return_type() {
        assert_eq!(Never.return_type(), None);
        assert_eq!(Maybe(Type::Str).return_type(), Some(Type::Str));
        assert_eq!(Always(Type::None).return_type(), Some(Type::None));
    }
}
