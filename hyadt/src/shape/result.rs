//! Result shape: `Result<T, E>` has the alternatives [`Success<T>`] and [`Failure<E>`].
//!
//! Role
//! - The wrappers keep the two branches apart even when `T` and `E` are the same type.
//! - When they differ, handlers may accept the plain payload types directly; the wrappers are
//!   peeled off during dispatch.
//! - When they coincide, plain handlers are ambiguous and the build fails; use
//!   [`ok`](crate::handler::ok) and [`err`](crate::handler::err) instead.
//!
//! ```compile_fail,E0283
//! use hyadt::prelude::*;
//!
//! let value: Result<i32, i32> = Ok(55);
//! // Both handlers could claim either branch.
//! let _ = inspect(value, handlers![on(|v: i32| v), on(|e: i32| -e)]);
//! ```
use std::any::type_name;

use crate::coproduct::{Coproduct, Void};
use crate::error::{InvalidStateAccess, fatal};
use crate::shape::{Shape, ShapeKind};

/// Success branch of a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Success<T>(pub T);

/// Error branch of a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Failure<E>(pub E);

impl<T> Success<T> {
    /// Unwrap the success payload.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<E> Failure<E> {
    /// Unwrap the error payload.
    #[inline]
    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<T, E> Shape for Result<T, E> {
    const KIND: ShapeKind = ShapeKind::Result;
    type Alternatives = Coproduct<Success<T>, Coproduct<Failure<E>, Void>>;

    #[inline]
    fn into_alternatives(self) -> Self::Alternatives {
        match self {
            Ok(value) => Coproduct::Inl(Success(value)),
            Err(error) => Coproduct::Inr(Coproduct::Inl(Failure(error))),
        }
    }
}

impl<'a, T, E> Shape for &'a Result<T, E> {
    const KIND: ShapeKind = ShapeKind::Result;
    type Alternatives = Coproduct<Success<&'a T>, Coproduct<Failure<&'a E>, Void>>;

    #[inline]
    fn into_alternatives(self) -> Self::Alternatives {
        self.as_ref().into_alternatives()
    }
}

impl<'a, T, E> Shape for &'a mut Result<T, E> {
    const KIND: ShapeKind = ShapeKind::Result;
    type Alternatives = Coproduct<Success<&'a mut T>, Coproduct<Failure<&'a mut E>, Void>>;

    #[inline]
    fn into_alternatives(self) -> Self::Alternatives {
        self.as_mut().into_alternatives()
    }
}

/// Read-only state contract of a result.
pub trait Outcome<T, E> {
    /// Whether the success branch is active.
    fn is_success(&self) -> bool;

    fn try_success(&self) -> Result<&T, InvalidStateAccess>;

    fn try_failure(&self) -> Result<&E, InvalidStateAccess>;

    /// The success payload. Reading it from an error is fatal.
    #[track_caller]
    fn success(&self) -> &T {
        match self.try_success() {
            Ok(value) => value,
            Err(violation) => fatal(violation),
        }
    }

    /// The error payload. Reading it from a success is fatal.
    #[track_caller]
    fn failure(&self) -> &E {
        match self.try_failure() {
            Ok(error) => error,
            Err(violation) => fatal(violation),
        }
    }
}

impl<T, E> Outcome<T, E> for Result<T, E> {
    #[inline]
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    fn try_success(&self) -> Result<&T, InvalidStateAccess> {
        self.as_ref().map_err(|_| InvalidStateAccess::NotSuccess {
            error: type_name::<E>(),
        })
    }

    fn try_failure(&self) -> Result<&E, InvalidStateAccess> {
        match self {
            Ok(_) => Err(InvalidStateAccess::NotFailure {
                value: type_name::<T>(),
            }),
            Err(error) => Ok(error),
        }
    }
}
