//! Handlers and handler sets.
//!
//! Role
//! - A specific handler [`On<K, C>`] is a callable `C` keyed by the one alternative type `K` it
//!   accepts. Build them with [`on`], [`absent`], [`ok`] and [`err`].
//! - A catch-all [`Otherwise<G>`] accepts every alternative no specific handler claims. Build it
//!   with [`otherwise`] (a closure that only learns which type it received) or
//!   [`otherwise_with`] (any type implementing [`Fallback`] for the leftover alternatives).
//! - A handler set is a type-level list of specific handlers, terminated either by
//!   [`HNil`](crate::hlist::HNil) or by a catch-all. The [`handlers!`](crate::handlers) macro
//!   spells it; [`Accepts`] queries and invokes it for a single type.
//!
//! Example
//! ```
//! use hyadt::prelude::*;
//!
//! let set = handlers![on(|x: i32| x * 2), on(|s: &str| s.len() as i32)];
//! assert_eq!(set.call("four"), 4);
//! ```
use std::any::type_name;
use std::marker::PhantomData;

use crate::hlist::{HCons, Here, There};
use crate::shape::optional::Absent;
use crate::shape::result::{Failure, Success};

/// How a handler callable is invoked with the payload of the alternative it accepts.
pub trait Invoke<A> {
    type Output;

    fn invoke(self, value: A) -> Self::Output;
}

/// Callable taking the payload as is.
#[derive(Debug, Clone, Copy)]
pub struct Direct<F>(F);

/// Callable taking no input, for payload-less alternatives.
#[derive(Debug, Clone, Copy)]
pub struct Nullary<F>(F);

/// Callable taking the payload inside a [`Success`] or [`Failure`] wrapper.
#[derive(Debug, Clone, Copy)]
pub struct Unwrap<F>(F);

impl<A, O, F> Invoke<A> for Direct<F>
where
    F: FnOnce(A) -> O,
{
    type Output = O;

    #[inline]
    fn invoke(self, value: A) -> O {
        (self.0)(value)
    }
}

impl<O, F> Invoke<Absent> for Nullary<F>
where
    F: FnOnce() -> O,
{
    type Output = O;

    #[inline]
    fn invoke(self, _: Absent) -> O {
        (self.0)()
    }
}

impl<T, O, F> Invoke<Success<T>> for Unwrap<F>
where
    F: FnOnce(T) -> O,
{
    type Output = O;

    #[inline]
    fn invoke(self, Success(value): Success<T>) -> O {
        (self.0)(value)
    }
}

impl<E, O, F> Invoke<Failure<E>> for Unwrap<F>
where
    F: FnOnce(E) -> O,
{
    type Output = O;

    #[inline]
    fn invoke(self, Failure(error): Failure<E>) -> O {
        (self.0)(error)
    }
}

/// Handler accepting exactly the alternative `K`.
pub struct On<K, C> {
    callable: C,
    _accepts: PhantomData<fn(K)>,
}

impl<K, C> On<K, C> {
    #[inline]
    fn new(callable: C) -> Self {
        On {
            callable,
            _accepts: PhantomData,
        }
    }

    /// Invoke the handler with the payload it accepts.
    #[inline]
    pub fn call(self, value: K) -> <C as Invoke<K>>::Output
    where
        C: Invoke<K>,
    {
        self.callable.invoke(value)
    }
}

impl<K, C: Clone> Clone for On<K, C> {
    fn clone(&self) -> Self {
        On::new(self.callable.clone())
    }
}

impl<K, C> std::fmt::Debug for On<K, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "On<{}>", type_name::<K>())
    }
}

/// Handler for the alternative `A`, receiving its payload.
///
/// The accepted type is the closure's parameter type, so annotate it: `on(|x: i32| ...)`.
#[inline]
pub fn on<A, O, F>(handler: F) -> On<A, Direct<F>>
where
    F: FnOnce(A) -> O,
{
    On::new(Direct(handler))
}

/// Handler for the [`Absent`] alternative of an optional.
#[inline]
pub fn absent<O, F>(handler: F) -> On<Absent, Nullary<F>>
where
    F: FnOnce() -> O,
{
    On::new(Nullary(handler))
}

/// Handler for the success branch of a result, receiving the unwrapped payload.
///
/// Unlike `on(|value: T| ...)`, it stays unambiguous when the success and error types coincide.
#[inline]
pub fn ok<T, O, F>(handler: F) -> On<Success<T>, Unwrap<F>>
where
    F: FnOnce(T) -> O,
{
    On::new(Unwrap(handler))
}

/// Handler for the error branch of a result, receiving the unwrapped payload.
#[inline]
pub fn err<E, O, F>(handler: F) -> On<Failure<E>, Unwrap<F>>
where
    F: FnOnce(E) -> O,
{
    On::new(Unwrap(handler))
}

/// Catch-all for every alternative of type `A` that no specific handler claims.
///
/// Closures cannot be generic, so a polymorphic catch-all is a type implementing this trait for
/// every alternative it may receive (see [`otherwise_with`]).
#[diagnostic::on_unimplemented(
    message = "the catch-all `{Self}` cannot accept the unclaimed alternative `{A}`",
    label = "`{A}` falls through to this catch-all",
    note = "add a specific handler for `{A}` or implement `Fallback<{A}>` for the catch-all"
)]
pub trait Fallback<A> {
    type Output;

    fn fallback(self, value: A) -> Self::Output;
}

/// Description of the alternative a closure catch-all received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unclaimed {
    type_name: &'static str,
}

impl Unclaimed {
    #[inline]
    pub fn of<A>() -> Self {
        Unclaimed {
            type_name: type_name::<A>(),
        }
    }

    /// Type name of the alternative that fell through.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// Closure catch-all: the payload is dropped and replaced by its [`Unclaimed`] description.
#[derive(Debug, Clone, Copy)]
pub struct Erased<F>(F);

impl<A, O, F> Fallback<A> for Erased<F>
where
    F: FnOnce(Unclaimed) -> O,
{
    type Output = O;

    #[inline]
    fn fallback(self, _: A) -> O {
        (self.0)(Unclaimed::of::<A>())
    }
}

/// Catch-all terminating a handler set.
#[derive(Debug, Clone, Copy)]
pub struct Otherwise<G> {
    pub(crate) catch_all: G,
}

/// Catch-all closure for every unclaimed alternative.
#[inline]
pub fn otherwise<O, F>(handler: F) -> Otherwise<Erased<F>>
where
    F: FnOnce(Unclaimed) -> O,
{
    Otherwise {
        catch_all: Erased(handler),
    }
}

/// Catch-all receiving the unclaimed payloads themselves.
#[inline]
pub fn otherwise_with<G>(catch_all: G) -> Otherwise<G> {
    Otherwise { catch_all }
}

/// Handler set query: a specific handler accepts `A`, at index path `I`.
///
/// The catch-all never takes part in this query.
#[diagnostic::on_unimplemented(
    message = "no handler in this set accepts `{A}`",
    label = "`{Self}` has no handler for `{A}`"
)]
pub trait Accepts<A, I> {
    type Output;

    /// Invoke the handler accepting `A`.
    fn call(self, value: A) -> Self::Output;
}

impl<A, C, T> Accepts<A, Here> for HCons<On<A, C>, T>
where
    C: Invoke<A>,
{
    type Output = <C as Invoke<A>>::Output;

    #[inline]
    fn call(self, value: A) -> Self::Output {
        self.head.call(value)
    }
}

impl<A, H, T, I> Accepts<A, There<I>> for HCons<H, T>
where
    T: Accepts<A, I>,
{
    type Output = <T as Accepts<A, I>>::Output;

    #[inline]
    fn call(self, value: A) -> Self::Output {
        self.tail.call(value)
    }
}

/// Build a handler set.
///
/// Specific handlers are separated by commas; a catch-all comes last, after a semicolon.
///
/// ```
/// use hyadt::prelude::*;
///
/// let only_fallback = handlers![; otherwise(|_| 0)];
/// let specific = handlers![on(|x: i32| x), absent(|| 0)];
/// let mixed = handlers![on(|x: i32| x); otherwise(|_| 0)];
/// # let _ = (only_fallback, specific, mixed);
/// ```
#[macro_export]
macro_rules! handlers {
    () => { $crate::hlist::HNil };
    (; $fallback:expr $(,)?) => { $fallback };
    ($head:expr $(,)?) => {
        $crate::hlist::HCons { head: $head, tail: $crate::hlist::HNil }
    };
    ($head:expr ; $fallback:expr $(,)?) => {
        $crate::hlist::HCons { head: $head, tail: $fallback }
    };
    ($head:expr, $($rest:tt)+) => {
        $crate::hlist::HCons { head: $head, tail: $crate::handlers!($($rest)+) }
    };
}
