//! Type-level coproducts: the alternative list of every shape.
//!
//! Role
//! - `Coproduct<A, Coproduct<B, Void>>` holds exactly one of `A` or `B`; [`Void`] terminates the
//!   list and has no values, so an empty coproduct can never be constructed.
//! - [`Inject`], [`Select`] and [`Take`] locate an alternative by type. The index path `I` is
//!   always inferred; it is unique because the alternatives of a shape are distinct types.
//! - [`ToRef`]/[`ToMut`] turn a borrowed coproduct into a coproduct of borrows, which is how the
//!   by-reference inspection modes are built.
//!
//! Performance
//! - Every operation is a chain of `match` expressions resolved at compile time; no allocation,
//!   no dynamic dispatch.
use std::any::type_name;

use smallvec::SmallVec;

use crate::hlist::{Here, Peeled, There};
use crate::shape::result::{Failure, Success};

/// Short list of alternative type names, as reported by [`Alternatives::names`].
pub type Names = SmallVec<&'static str, 8>;

/// One alternative out of a list: either the head `H` or one of the tail's alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coproduct<H, T> {
    /// The head alternative is active.
    Inl(H),
    /// One of the tail alternatives is active.
    Inr(T),
}

/// Terminator of a coproduct; uninhabited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Void {}

/// Build the coproduct type of a list of alternatives.
///
/// ```
/// use hyadt::Coprod;
/// use hyadt::coproduct::{Coproduct, Void};
///
/// let value: Coprod![i32, bool] = Coproduct::Inr(Coproduct::Inl(true));
/// let same: Coproduct<i32, Coproduct<bool, Void>> = value;
/// assert_eq!(same, Coproduct::Inr(Coproduct::Inl(true)));
/// ```
#[macro_export]
macro_rules! Coprod {
    () => { $crate::coproduct::Void };
    ($head:ty $(, $rest:ty)* $(,)?) => {
        $crate::coproduct::Coproduct<$head, $crate::Coprod!($($rest),*)>
    };
}

/// Ordered, statically known alternative list.
pub trait Alternatives {
    /// Number of alternatives.
    const LEN: usize;

    /// Append the type name of every alternative, in declaration order.
    fn names(out: &mut Names);

    /// Position of the active alternative.
    fn position(&self) -> usize;

    /// Type name of the active alternative.
    fn active_name(&self) -> &'static str;
}

impl Alternatives for Void {
    const LEN: usize = 0;

    fn names(_out: &mut Names) {}

    fn position(&self) -> usize {
        match *self {}
    }

    fn active_name(&self) -> &'static str {
        match *self {}
    }
}

impl<H, T: Alternatives> Alternatives for Coproduct<H, T> {
    const LEN: usize = 1 + T::LEN;

    fn names(out: &mut Names) {
        out.push(type_name::<H>());
        T::names(out);
    }

    #[inline]
    fn position(&self) -> usize {
        match self {
            Coproduct::Inl(_) => 0,
            Coproduct::Inr(rest) => 1 + rest.position(),
        }
    }

    #[inline]
    fn active_name(&self) -> &'static str {
        match self {
            Coproduct::Inl(_) => type_name::<H>(),
            Coproduct::Inr(rest) => rest.active_name(),
        }
    }
}

/// Build a coproduct from one of its alternatives.
#[diagnostic::on_unimplemented(
    message = "`{T}` is not one of the alternatives `{Self}`",
    label = "cannot build this value from `{T}`"
)]
pub trait Inject<T, I> {
    fn inject(value: T) -> Self;
}

impl<T, R> Inject<T, Here> for Coproduct<T, R> {
    #[inline]
    fn inject(value: T) -> Self {
        Coproduct::Inl(value)
    }
}

impl<H, R, T, I> Inject<T, There<I>> for Coproduct<H, R>
where
    R: Inject<T, I>,
{
    #[inline]
    fn inject(value: T) -> Self {
        Coproduct::Inr(R::inject(value))
    }
}

/// Borrow one alternative if it is the active one.
pub trait Select<T, I> {
    fn get(&self) -> Option<&T>;

    fn get_mut(&mut self) -> Option<&mut T>;
}

impl<T, R> Select<T, Here> for Coproduct<T, R> {
    #[inline]
    fn get(&self) -> Option<&T> {
        match self {
            Coproduct::Inl(value) => Some(value),
            Coproduct::Inr(_) => None,
        }
    }

    #[inline]
    fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Coproduct::Inl(value) => Some(value),
            Coproduct::Inr(_) => None,
        }
    }
}

impl<H, R, T, I> Select<T, There<I>> for Coproduct<H, R>
where
    R: Select<T, I>,
{
    #[inline]
    fn get(&self) -> Option<&T> {
        match self {
            Coproduct::Inl(_) => None,
            Coproduct::Inr(rest) => rest.get(),
        }
    }

    #[inline]
    fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Coproduct::Inl(_) => None,
            Coproduct::Inr(rest) => rest.get_mut(),
        }
    }
}

/// Remove one alternative from a coproduct.
///
/// On success the payload is returned; otherwise the value is handed back as the
/// [`Remainder`](Take::Remainder) coproduct, which no longer lists `T`. A handler set claims its
/// alternatives by chaining `take` calls, so a second handler for the same type (or a handler for
/// a type that was never an alternative) has nothing left to take and fails here.
///
/// Besides exact matches, the payload of a [`Success`] or [`Failure`] alternative can be taken
/// by its inner type (index path [`Peeled`]).
#[diagnostic::on_unimplemented(
    message = "`{T}` is not an alternative of the inspected value",
    label = "no alternative `{T}` is left to claim in `{Self}`",
    note = "each alternative accepts exactly one handler; a second handler for the same alternative is reported here as well",
    note = "values inspected by reference hand out `&T` payloads, so their handlers must accept references"
)]
pub trait Take<T, I> {
    /// Alternatives left once `T` is removed.
    type Remainder;

    fn take(self) -> Result<T, Self::Remainder>;
}

impl<T, R> Take<T, Here> for Coproduct<T, R> {
    type Remainder = R;

    #[inline]
    fn take(self) -> Result<T, R> {
        match self {
            Coproduct::Inl(value) => Ok(value),
            Coproduct::Inr(rest) => Err(rest),
        }
    }
}

impl<T, R> Take<T, Peeled> for Coproduct<Success<T>, R> {
    type Remainder = R;

    #[inline]
    fn take(self) -> Result<T, R> {
        match self {
            Coproduct::Inl(Success(value)) => Ok(value),
            Coproduct::Inr(rest) => Err(rest),
        }
    }
}

impl<E, R> Take<E, Peeled> for Coproduct<Failure<E>, R> {
    type Remainder = R;

    #[inline]
    fn take(self) -> Result<E, R> {
        match self {
            Coproduct::Inl(Failure(error)) => Ok(error),
            Coproduct::Inr(rest) => Err(rest),
        }
    }
}

impl<H, R, T, I> Take<T, There<I>> for Coproduct<H, R>
where
    R: Take<T, I>,
{
    type Remainder = Coproduct<H, R::Remainder>;

    #[inline]
    fn take(self) -> Result<T, Self::Remainder> {
        match self {
            Coproduct::Inl(head) => Err(Coproduct::Inl(head)),
            Coproduct::Inr(rest) => rest.take().map_err(Coproduct::Inr),
        }
    }
}

/// Coproduct of shared borrows of every alternative.
pub trait ToRef<'a> {
    type Ref;

    fn to_ref(&'a self) -> Self::Ref;
}

impl<'a> ToRef<'a> for Void {
    type Ref = Void;

    fn to_ref(&'a self) -> Void {
        match *self {}
    }
}

impl<'a, H: 'a, T: ToRef<'a>> ToRef<'a> for Coproduct<H, T> {
    type Ref = Coproduct<&'a H, T::Ref>;

    #[inline]
    fn to_ref(&'a self) -> Self::Ref {
        match self {
            Coproduct::Inl(head) => Coproduct::Inl(head),
            Coproduct::Inr(rest) => Coproduct::Inr(rest.to_ref()),
        }
    }
}

/// Coproduct of mutable borrows of every alternative.
pub trait ToMut<'a> {
    type Mut;

    fn to_mut(&'a mut self) -> Self::Mut;
}

impl<'a> ToMut<'a> for Void {
    type Mut = Void;

    fn to_mut(&'a mut self) -> Void {
        match *self {}
    }
}

impl<'a, H: 'a, T: ToMut<'a>> ToMut<'a> for Coproduct<H, T> {
    type Mut = Coproduct<&'a mut H, T::Mut>;

    #[inline]
    fn to_mut(&'a mut self) -> Self::Mut {
        match self {
            Coproduct::Inl(head) => Coproduct::Inl(head),
            Coproduct::Inr(rest) => Coproduct::Inr(rest.to_mut()),
        }
    }
}
