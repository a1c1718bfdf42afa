//! Optional shape: `Option<T>` has the alternatives `T` and [`Absent`].
use std::any::type_name;

use crate::coproduct::{Coproduct, Void};
use crate::error::{InvalidStateAccess, fatal};
use crate::shape::{Shape, ShapeKind};

/// Alternative of an optional holding nothing. Handled by [`absent`](crate::handler::absent).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Absent;

impl<T> Shape for Option<T> {
    const KIND: ShapeKind = ShapeKind::Optional;
    type Alternatives = Coproduct<T, Coproduct<Absent, Void>>;

    #[inline]
    fn into_alternatives(self) -> Self::Alternatives {
        match self {
            Some(value) => Coproduct::Inl(value),
            None => Coproduct::Inr(Coproduct::Inl(Absent)),
        }
    }
}

impl<'a, T> Shape for &'a Option<T> {
    const KIND: ShapeKind = ShapeKind::Optional;
    type Alternatives = Coproduct<&'a T, Coproduct<Absent, Void>>;

    #[inline]
    fn into_alternatives(self) -> Self::Alternatives {
        self.as_ref().into_alternatives()
    }
}

impl<'a, T> Shape for &'a mut Option<T> {
    const KIND: ShapeKind = ShapeKind::Optional;
    type Alternatives = Coproduct<&'a mut T, Coproduct<Absent, Void>>;

    #[inline]
    fn into_alternatives(self) -> Self::Alternatives {
        self.as_mut().into_alternatives()
    }
}

/// Read-only state contract of an optional.
pub trait Presence<T> {
    /// Whether a payload is present.
    fn is_present(&self) -> bool;

    /// The payload, or the reason it cannot be read.
    fn try_present(&self) -> Result<&T, InvalidStateAccess>;

    /// The payload. Reading an absent optional is fatal.
    #[track_caller]
    fn present(&self) -> &T {
        match self.try_present() {
            Ok(value) => value,
            Err(violation) => fatal(violation),
        }
    }
}

impl<T> Presence<T> for Option<T> {
    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }

    fn try_present(&self) -> Result<&T, InvalidStateAccess> {
        self.as_ref().ok_or(InvalidStateAccess::Absent {
            value: type_name::<T>(),
        })
    }
}
