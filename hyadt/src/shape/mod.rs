//! Shapes: sum values that `inspect` knows how to take apart.
//!
//! Role
//! - [`Shape`] turns a value into the coproduct of its alternatives, consuming it or, for the
//!   `&T` and `&mut T` implementations, borrowing it.
//! - Three families are provided: unions ([`union::Union`], [`either::Either`], derived enums),
//!   optionals ([`Option`]) and results ([`Result`]).
use strum::{Display, EnumIs};

use crate::coproduct::Alternatives;

pub mod either;
pub mod optional;
pub mod result;
pub mod union;

/// Family a shape belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ShapeKind {
    /// N distinct, statically known alternatives.
    Union,
    /// Present payload or absent.
    Optional,
    /// Success payload or error payload.
    Result,
}

/// A sum value holding exactly one active alternative.
pub trait Shape {
    /// Family of this shape, used in reports and traces.
    const KIND: ShapeKind;

    /// Coproduct of every alternative, in declaration order.
    type Alternatives: Alternatives;

    /// Hand over the active alternative.
    fn into_alternatives(self) -> Self::Alternatives;
}
