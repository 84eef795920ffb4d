//! Errors returned by the checked accessors of [`Optional`](crate::option::Optional) and
//! [`Outcome`](crate::result::Outcome).

use derive_more::{Display, Error, From, IsVariant};

/// The accessed [`Optional`](crate::option::Optional) holds no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("accessed the value of an empty Optional")]
pub struct EmptyOptional;

/// Which side of an [`Outcome`](crate::result::Outcome) was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IsVariant)]
pub enum Variant {
    #[display("value")]
    Ok,
    #[display("error")]
    Error,
}

/// The accessed [`Outcome`](crate::result::Outcome) holds the other variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("accessed the {expected} of an Outcome holding its {}", expected.other())]
pub struct UnexpectedVariant {
    pub expected: Variant,
}

impl Variant {
    /// Returns the opposite variant.
    pub const fn other(self) -> Variant {
        match self {
            Variant::Ok => Variant::Error,
            Variant::Error => Variant::Ok,
        }
    }
}

/// Any failure of a checked accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum AccessError {
    EmptyOptional(EmptyOptional),
    UnexpectedVariant(UnexpectedVariant),
}
