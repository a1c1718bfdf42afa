//! Closed N-ary union over a statically known, ordered list of distinct alternatives.
//!
//! Role
//! - [`Union<C>`] wraps a coproduct `C`; the [`Union!`](crate::Union) macro spells the type.
//! - Values are created from one concrete alternative and never observed empty.
//! - Accessors locate an alternative by type; `unwrap` treats an inactive alternative as a
//!   programming error.
//!
//! Example
//! ```
//! use hyadt::Union;
//!
//! let value: Union![i32, f64, String] = Union::new(String::from("seven"));
//! assert_eq!(value.position(), 2);
//! assert_eq!(value.get::<String, _>().map(String::as_str), Some("seven"));
//! assert!(value.get::<i32, _>().is_none());
//! ```
use std::any::type_name;

use crate::coproduct::{Alternatives, Inject, Select, Take, ToMut, ToRef};
use crate::error::{InvalidStateAccess, fatal};
use crate::shape::{Shape, ShapeKind};

/// Spell the type of a union from its alternatives.
///
/// A union needs at least one alternative; `Union![]` does not expand.
///
/// Alternatives must be distinct types. The macro only spells the type and cannot check it, so
/// `Union![i32, i32]` is accepted here and fails later, at the first `new`, `get` or `inspect`
/// that has to locate `i32` (the compiler finds two positions for it). Enums deriving
/// [`Shape`](crate::shape::Shape) reject repeated payload types up front.
///
/// ```compile_fail,E0283
/// use hyadt::Union;
///
/// let value: Union![i32, i32] = Union::new(1);
/// ```
#[macro_export]
macro_rules! Union {
    ($($alt:ty),+ $(,)?) => {
        $crate::shape::union::Union<$crate::Coprod!($($alt),+)>
    };
}

/// Union value holding one of the alternatives listed in the coproduct `C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Union<C>(C);

impl<C: Alternatives> Union<C> {
    /// Number of alternatives.
    pub const LEN: usize = C::LEN;

    /// Build a union from one of its alternatives.
    #[inline]
    pub fn new<T, I>(value: T) -> Self
    where
        C: Inject<T, I>,
    {
        Union(C::inject(value))
    }

    /// Wrap an already built coproduct.
    #[inline]
    pub fn from_inner(inner: C) -> Self {
        Union(inner)
    }

    /// Release the underlying coproduct.
    #[inline]
    pub fn into_inner(self) -> C {
        self.0
    }

    /// Position of the active alternative in the declaration order.
    #[inline]
    pub fn position(&self) -> usize {
        self.0.position()
    }

    /// Type name of the active alternative.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.0.active_name()
    }

    /// Whether `T` is the active alternative.
    #[inline]
    pub fn is<T, I>(&self) -> bool
    where
        C: Select<T, I>,
    {
        self.0.get().is_some()
    }

    /// Borrow the payload if `T` is the active alternative.
    #[inline]
    pub fn get<T, I>(&self) -> Option<&T>
    where
        C: Select<T, I>,
    {
        self.0.get()
    }

    /// Mutably borrow the payload if `T` is the active alternative.
    #[inline]
    pub fn get_mut<T, I>(&mut self) -> Option<&mut T>
    where
        C: Select<T, I>,
    {
        self.0.get_mut()
    }

    /// Borrow the payload of `T`, or report which alternative is active instead.
    pub fn try_get<T, I>(&self) -> Result<&T, InvalidStateAccess>
    where
        C: Select<T, I>,
    {
        self.0.get().ok_or_else(|| InvalidStateAccess::InactiveAlternative {
            requested: type_name::<T>(),
            active: self.type_name(),
        })
    }

    /// Move the payload of `T` out, or get back the union of the remaining alternatives.
    #[inline]
    pub fn take<T, I>(self) -> Result<T, Union<C::Remainder>>
    where
        C: Take<T, I>,
    {
        self.0.take().map_err(Union)
    }

    /// Move the payload of `T` out. Reading an inactive alternative is fatal.
    #[track_caller]
    pub fn unwrap<T, I>(self) -> T
    where
        C: Take<T, I>,
    {
        let active = self.type_name();
        match self.0.take() {
            Ok(value) => value,
            Err(_) => fatal(InvalidStateAccess::InactiveAlternative {
                requested: type_name::<T>(),
                active,
            }),
        }
    }
}

impl<C: Alternatives> Shape for Union<C> {
    const KIND: ShapeKind = ShapeKind::Union;
    type Alternatives = C;

    #[inline]
    fn into_alternatives(self) -> C {
        self.0
    }
}

impl<'a, C> Shape for &'a Union<C>
where
    C: ToRef<'a>,
    C::Ref: Alternatives,
{
    const KIND: ShapeKind = ShapeKind::Union;
    type Alternatives = C::Ref;

    #[inline]
    fn into_alternatives(self) -> C::Ref {
        self.0.to_ref()
    }
}

impl<'a, C> Shape for &'a mut Union<C>
where
    C: ToMut<'a>,
    C::Mut: Alternatives,
{
    const KIND: ShapeKind = ShapeKind::Union;
    type Alternatives = C::Mut;

    #[inline]
    fn into_alternatives(self) -> C::Mut {
        self.0.to_mut()
    }
}
