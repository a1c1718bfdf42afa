//! `either::Either<L, R>` as a two-alternative union.
//!
//! Unlike results, the alternatives are not wrapped: `Either<T, T>` cannot be inspected, use a
//! [`Result`] or a derived enum when both sides carry the same type.
pub use either::Either;

use crate::coproduct::{Coproduct, Void};
use crate::shape::{Shape, ShapeKind};

impl<L, R> Shape for Either<L, R> {
    const KIND: ShapeKind = ShapeKind::Union;
    type Alternatives = Coproduct<L, Coproduct<R, Void>>;

    #[inline]
    fn into_alternatives(self) -> Self::Alternatives {
        match self {
            Either::Left(left) => Coproduct::Inl(left),
            Either::Right(right) => Coproduct::Inr(Coproduct::Inl(right)),
        }
    }
}

impl<'a, L, R> Shape for &'a Either<L, R> {
    const KIND: ShapeKind = ShapeKind::Union;
    type Alternatives = Coproduct<&'a L, Coproduct<&'a R, Void>>;

    #[inline]
    fn into_alternatives(self) -> Self::Alternatives {
        self.as_ref().into_alternatives()
    }
}

impl<'a, L, R> Shape for &'a mut Either<L, R> {
    const KIND: ShapeKind = ShapeKind::Union;
    type Alternatives = Coproduct<&'a mut L, Coproduct<&'a mut R, Void>>;

    #[inline]
    fn into_alternatives(self) -> Self::Alternatives {
        self.as_mut().into_alternatives()
    }
}
