//! Exhaustiveness proof for a handler set against the alternatives of a shape.
//!
//! Role
//! - [`Exhaustive<C, P>`] holds when the handler set claims every alternative of the coproduct
//!   `C` exactly once, or hands the unclaimed ones to a catch-all able to accept them.
//! - Every specific handler removes its alternative with [`Take`]; a handler for a type that is
//!   not (or no longer) an alternative fails there, naming that type.
//! - Whatever is left must be empty ([`Exhausted`]) unless the set ends with a catch-all
//!   ([`CaughtBy`]). Each leftover alternative produces its own diagnostic through
//!   [`HandlerFor`], so the message names the missing type rather than an internal trait.
//! - [`coverage`](crate::coverage) reads the same proof back as a runtime [`Coverage`] report.
//!
//! The check runs at the call site of `inspect`, before any dispatch code is instantiated:
//!
//! ```compile_fail,E0277
//! use hyadt::prelude::*;
//!
//! let value: Union![i32, f64, String] = Union::new(42);
//! // error: `inspect` is not exhaustive: no handler accepts `f64`
//! let _ = inspect(value, handlers![on(|x: i32| x), on(|s: String| s.len() as i32)]);
//! ```
//!
//! ```compile_fail,E0277
//! use hyadt::prelude::*;
//!
//! let value: Union![i32, f64] = Union::new(42);
//! // error: `i32` is not an alternative of the inspected value
//! let _ = inspect(value, handlers![on(|x: i32| x), on(|y: f64| y as i32), on(|x: i32| -x)]);
//! ```
//!
//! ```compile_fail,E0277
//! use hyadt::prelude::*;
//!
//! // error: `inspect` is not exhaustive: no handler accepts `Absent`
//! let _ = inspect(Some(3), handlers![on(|x: i32| x)]);
//! ```
use std::any::type_name;
use std::fmt;

use crate::coproduct::{Alternatives, Coproduct, Names, Take, Void};
use crate::handler::{Fallback, On, Otherwise};
use crate::hlist::{HCons, HNil};
use crate::shape::ShapeKind;

mod sealed {
    pub trait Sealed {}
}

/// Witness used in the leftover check; it never handles anything.
pub struct NoHandler;

impl sealed::Sealed for NoHandler {}

/// Never implemented: an obligation `NoHandler: HandlerFor<A>` is how a missing handler for
/// `A` surfaces.
#[diagnostic::on_unimplemented(
    message = "`inspect` is not exhaustive: no handler accepts `{A}`",
    label = "missing a handler for `{A}`",
    note = "add a handler for `{A}` (`on`, `absent`, `ok` or `err`), or end the handler set with a catch-all: `handlers![...; otherwise(...)]`"
)]
pub trait HandlerFor<A>: sealed::Sealed {
    fn refute<T>(value: A) -> T;
}

/// The leftover alternatives are empty.
pub trait Exhausted {
    fn absurd<T>(self) -> T;
}

impl Exhausted for Void {
    #[inline]
    fn absurd<T>(self) -> T {
        match self {}
    }
}

impl<H, R> Exhausted for Coproduct<H, R>
where
    NoHandler: HandlerFor<H>,
    R: Exhausted,
{
    fn absurd<T>(self) -> T {
        match self {
            Coproduct::Inl(head) => <NoHandler as HandlerFor<H>>::refute(head),
            Coproduct::Inr(rest) => rest.absurd(),
        }
    }
}

/// Every leftover alternative is accepted by the catch-all `G`.
pub trait CaughtBy<G> {}

impl<G> CaughtBy<G> for Void {}

impl<H, R, G> CaughtBy<G> for Coproduct<H, R>
where
    G: Fallback<H>,
    R: CaughtBy<G>,
{
}

/// The handler set covers the alternatives `C`, claiming them along the index paths `P`.
pub trait Exhaustive<C, P> {
    /// Record which alternatives are claimed by specific handlers and which fall through.
    fn coverage(report: &mut Coverage);
}

impl<C: Exhausted> Exhaustive<C, HNil> for HNil {
    #[inline]
    fn coverage(_: &mut Coverage) {}
}

impl<C, G> Exhaustive<C, HNil> for Otherwise<G>
where
    C: CaughtBy<G> + Alternatives,
{
    fn coverage(report: &mut Coverage) {
        C::names(&mut report.fallback);
    }
}

impl<K, F, Rest, C, I, P> Exhaustive<C, HCons<I, P>> for HCons<On<K, F>, Rest>
where
    C: Take<K, I>,
    Rest: Exhaustive<<C as Take<K, I>>::Remainder, P>,
{
    fn coverage(report: &mut Coverage) {
        report.handled.push(type_name::<K>());
        Rest::coverage(report);
    }
}

/// How a handler set covers the alternatives of a shape.
#[derive(Debug, Clone)]
pub struct Coverage {
    /// Family of the inspected shape.
    pub kind: ShapeKind,
    /// Every alternative, in declaration order.
    pub alternatives: Names,
    /// Types accepted by specific handlers, in handler order.
    pub handled: Names,
    /// Alternatives left to the catch-all, in declaration order.
    pub fallback: Names,
}

impl Coverage {
    pub fn new(kind: ShapeKind) -> Self {
        Coverage {
            kind,
            alternatives: Names::new(),
            handled: Names::new(),
            fallback: Names::new(),
        }
    }

    /// Whether some alternative falls through to a catch-all.
    #[inline]
    pub fn uses_fallback(&self) -> bool {
        !self.fallback.is_empty()
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of [{}]: handled [{}]",
            self.kind,
            self.alternatives.join(", "),
            self.handled.join(", ")
        )?;
        if self.uses_fallback() {
            write!(f, ", otherwise [{}]", self.fallback.join(", "))?;
        }
        Ok(())
    }
}
