//! Type-level lists and the index paths used to search them.
//!
//! Role
//! - [`HCons`]/[`HNil`] hold an ordered handler set whose element types are all known statically.
//! - [`Here`], [`There`] and [`Peeled`] are the index paths the compiler infers when a handler
//!   claims an alternative; user code never names them, they are always `_`.
use std::marker::PhantomData;

/// Empty list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HNil;

/// Non-empty list: one `head` element followed by the `tail` list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HCons<H, T> {
    pub head: H,
    pub tail: T,
}

impl HNil {
    /// Prepend an element, producing a one-element list.
    #[inline]
    pub fn prepend<H>(self, head: H) -> HCons<H, HNil> {
        HCons { head, tail: self }
    }
}

impl<H, T> HCons<H, T> {
    /// Prepend an element in front of this list.
    #[inline]
    pub fn prepend<N>(self, head: N) -> HCons<N, Self> {
        HCons { head, tail: self }
    }
}

/// Index path: the element is at the front.
#[derive(Debug, Clone, Copy, Default)]
pub struct Here;

/// Index path: the element is somewhere after the front, at path `I` of the tail.
#[derive(Debug, Clone, Copy, Default)]
pub struct There<I>(PhantomData<I>);

/// Index path: the element is at the front, wrapped in a disambiguation marker
/// ([`Success`](crate::shape::result::Success) or [`Failure`](crate::shape::result::Failure))
/// that is peeled off on extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct Peeled;

