//! The value types of DWISLPY.
//!
//! The lattice is flat: four kinds, no subtyping, no coercions. Two types
//! are compatible exactly when they are the same kind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A DWISLPY value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// Integer type
    Int,
    /// String type
    Str,
    /// Boolean type
    Bool,
    /// The type of `None`; also the return type of procedures
    None,
}

impl Type {
    /// All value types, in declaration order.
    pub const ALL: [Type; 4] = [Type::Int, Type::Str, Type::Bool, Type::None];

    #[must_use]
    pub const fn is_int(self) -> bool {
        matches!(self, Type::Int)
    }

    #[must_use]
    pub const fn is_str(self) -> bool {
        matches!(self, Type::Str)
    }

    #[must_use]
    pub const fn is_bool(self) -> bool {
        matches!(self, Type::Bool)
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Type::None)
    }

    /// Kind equality. Spelled out so call sites read like the lattice rule.
    #[must_use]
    pub fn equals(self, other: Type) -> bool {
        self == other
    }

    /// Source-level name of the type, as written in annotations.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Type::Int => "int",
            Type::Str => "str",
            Type::Bool => "bool",
            Type::None => "None",
        }
    }

    /// Parses a source-level type name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.name() == name)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_match_exactly_one_kind() {
        for ty in Type::ALL {
            let hits = [ty.is_int(), ty.is_str(), ty.is_bool(), ty.is_none()]
                .into_iter()
                .filter(|&hit| hit)
                .count();
            assert_eq!(hits, 1, "{ty} satisfies {hits} predicates");
        }
    }

    #[test]
    fn test_equality_is_kind_equality() {
        for a in Type::ALL {
            for b in Type::ALL {
                assert_eq!(a.equals(b), b.equals(a));
                assert_eq!(a.equals(b), a.name() == b.name());
            }
        }
    }

    #[test]
    fn test_names_round_trip() {
        for ty in Type::ALL {
            assert_eq!(Type::from_name(ty.name()), Some(ty));
        }
        assert_eq!(Type::from_name("float"), None);
    }
}
