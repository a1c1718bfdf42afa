//! Result type of an inspection.
//!
//! Role
//! - [`Deduced<R>`]: no result type was requested, every handler must return the same `R`.
//! - [`Requested<R>`]: the caller asked for `R`, every handler output must convert into it with
//!   [`Into`]. Handlers returning `()` are only compatible with `R = ()`.
//! - [`Conform<A, Out>`] checks and performs the conversion for the handler of alternative `A`
//!   returning `Out`; it is proven once per alternative when `inspect` is instantiated.
//!
//! ```compile_fail,E0277
//! use hyadt::prelude::*;
//!
//! let value: Union![char, &str] = Union::new('x');
//! // error: handler for `&str` returns `&str`, but another handler returns `char`
//! let _ = inspect(value, handlers![on(|c: char| c), on(|s: &'static str| s)]);
//! ```
//!
//! ```compile_fail,E0277
//! use hyadt::prelude::*;
//!
//! let value: Option<i32> = None;
//! // `()` does not convert into `String`
//! let _: String = inspect_as::<String, _, _, _>(value, handlers![on(|x: i32| x.to_string()), absent(|| ())]);
//! ```
use std::marker::PhantomData;

/// Policy producing the final result of an inspection.
pub trait Mode {
    type Output;
}

/// The result type is the common output type of all handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deduced<R>(PhantomData<R>);

/// The result type was requested by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Requested<R>(PhantomData<R>);

impl<R> Mode for Deduced<R> {
    type Output = R;
}

impl<R> Mode for Requested<R> {
    type Output = R;
}

/// The handler for alternative `A`, returning `Out`, fits the mode.
pub trait Conform<A, Out>: Mode {
    fn conform(out: Out) -> Self::Output;
}

impl<A, Out, R> Conform<A, Out> for Deduced<R>
where
    Out: SameAs<R, A>,
{
    #[inline]
    fn conform(out: Out) -> R {
        out.same()
    }
}

impl<A, Out, R> Conform<A, Out> for Requested<R>
where
    Out: Into<R>,
{
    #[inline]
    fn conform(out: Out) -> R {
        out.into()
    }
}

/// Identity between the output of the handler for `A` and the deduced result type `R`.
#[diagnostic::on_unimplemented(
    message = "handler for `{A}` returns `{Self}`, but another handler returns `{R}`",
    label = "handlers disagree on the result type",
    note = "without a requested result type, every handler must return the same type",
    note = "request a common result type with `inspect_as::<T, _, _, _>(...)` or `inspect!(value => T; ...)`"
)]
pub trait SameAs<R, A> {
    fn same(self) -> R;
}

impl<R, A> SameAs<R, A> for R {
    #[inline]
    fn same(self) -> R {
        self
    }
}
