//! Single-handler invocation.
//!
//! The handler set is walked in order: each specific handler tries to take its alternative out
//! of the value and either runs or passes the remainder on. At most one handler runs; the
//! terminator is either unreachable (no alternatives left) or the catch-all.
use crate::coproduct::{Coproduct, Take, Void};
use crate::handler::{Fallback, Invoke, On, Otherwise};
use crate::hlist::{HCons, HNil};
use crate::returns::{Conform, Mode};
use crate::validate::Exhausted;

/// Route the active alternative of `C` to its handler, along the index paths `P`.
pub trait Dispatch<C, P, M: Mode> {
    fn dispatch(self, value: C) -> M::Output;
}

impl<C, M> Dispatch<C, HNil, M> for HNil
where
    C: Exhausted,
    M: Mode,
{
    #[inline]
    fn dispatch(self, value: C) -> M::Output {
        value.absurd()
    }
}

impl<C, G, M> Dispatch<C, HNil, M> for Otherwise<G>
where
    C: FallThrough<G, M>,
    M: Mode,
{
    #[inline]
    fn dispatch(self, value: C) -> M::Output {
        value.fall_through(self.catch_all)
    }
}

impl<K, F, Rest, C, I, P, M> Dispatch<C, HCons<I, P>, M> for HCons<On<K, F>, Rest>
where
    C: Take<K, I>,
    F: Invoke<K>,
    M: Conform<K, <F as Invoke<K>>::Output>,
    Rest: Dispatch<<C as Take<K, I>>::Remainder, P, M>,
{
    #[inline]
    fn dispatch(self, value: C) -> M::Output {
        match value.take() {
            Ok(payload) => M::conform(self.head.call(payload)),
            Err(rest) => self.tail.dispatch(rest),
        }
    }
}

/// Hand the leftover alternative to the catch-all `G`.
pub trait FallThrough<G, M: Mode> {
    fn fall_through(self, catch_all: G) -> M::Output;
}

impl<G, M: Mode> FallThrough<G, M> for Void {
    #[inline]
    fn fall_through(self, _: G) -> M::Output {
        match self {}
    }
}

impl<H, R, G, M> FallThrough<G, M> for Coproduct<H, R>
where
    G: Fallback<H>,
    M: Conform<H, <G as Fallback<H>>::Output>,
    R: FallThrough<G, M>,
{
    #[inline]
    fn fall_through(self, catch_all: G) -> M::Output {
        match self {
            Coproduct::Inl(head) => M::conform(catch_all.fallback(head)),
            Coproduct::Inr(rest) => rest.fall_through(catch_all),
        }
    }
}
