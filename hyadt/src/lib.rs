//! Hyadt: exhaustive, expression-style inspection of sum types.
//!
//! A sum value (a [`Union`], an [`Option`], a [`Result`], an [`Either`](either::Either) or a
//! `#[derive(Shape)]` enum) holds exactly one active alternative. [`inspect`] runs the one handler
//! that accepts it and returns the handler's result. Whether the handler set covers every
//! alternative is decided when the call is compiled, and an incomplete set is rejected with a
//! message naming the alternative nobody handles.
//!
//! Model
//!  - Every shape exposes its alternatives as a type-level [`coproduct`].
//!  - A handler set is a type-level list built with [`handlers!`]: specific handlers
//!    ([`on`](handler::on), [`absent`](handler::absent), [`ok`](handler::ok),
//!    [`err`](handler::err)) optionally terminated by a catch-all
//!    ([`otherwise`](handler::otherwise), [`otherwise_with`](handler::otherwise_with)).
//!    Specific handlers win over the catch-all.
//!  - Each alternative accepts exactly one specific handler; duplicates and handlers for types
//!    that are not alternatives are rejected as well.
//!  - Without a requested result type every handler must return the same type; with
//!    [`inspect_as`] every output must convert into the requested one.
//!
//! Performance
//!  - Dispatch compiles down to nested `match` expressions on the active alternative: no
//!    allocation, no dynamic dispatch, no runtime check of the handler set.
//!
//! Example
//! ```
//! use hyadt::prelude::*;
//!
//! let value: Union![i32, f64, f32] = Union::new(42);
//! let described = inspect!(value;
//!     on(|x: i32| format!("int {x}")),
//!     on(|x: f64| format!("double {x}")),
//!     on(|x: f32| format!("float {x}")),
//! );
//! assert_eq!(described, "int 42");
//!
//! let parsed: Result<u16, String> = "77".parse::<u16>().map_err(|e| e.to_string());
//! let code = inspect(&parsed, handlers![ok(|v: &u16| i32::from(*v)), err(|_: &String| -1)]);
//! assert_eq!(code, 77);
//! ```

/// Type-level coproducts holding the alternatives of a shape.
pub mod coproduct;
/// Routing of the active alternative to its handler.
pub mod dispatch;
/// Contract violations raised by the shape accessors.
pub mod error;
/// Specific handlers, catch-alls and handler sets.
pub mod handler;
/// Type-level lists and index paths.
pub mod hlist;
mod inspection;
/// Result type policies of an inspection.
pub mod returns;
/// Sum types `inspect` can take apart.
pub mod shape;
/// Exhaustiveness proof and coverage report.
pub mod validate;

pub use inspection::{alternatives_of, coverage, inspect, inspect_as};
pub use shape::Shape;
pub use shape::union::Union;

/// Derive [`Shape`] for an enum whose variants each carry one distinct payload type.
#[cfg(feature = "derive")]
pub use hyadt_derive::Shape;

pub mod prelude {
    //! Convenient re-exports for end users.
    //!
    //! - `inspect`, `inspect_as` and the `inspect!`/`handlers!` macros
    //! - Handler constructors
    //! - Shape types and their state accessors
    pub use crate::{Coprod, Union, handlers, inspect};
    pub use crate::{alternatives_of, coverage, inspect_as};

    // Handlers
    pub use crate::handler::{
        Accepts, Fallback, Unclaimed, absent, err, ok, on, otherwise, otherwise_with,
    };

    // Shapes
    pub use crate::shape::either::Either;
    pub use crate::shape::optional::{Absent, Presence};
    pub use crate::shape::result::{Failure, Outcome, Success};
    pub use crate::shape::{Shape, ShapeKind};
    #[cfg(feature = "derive")]
    pub use hyadt_derive::Shape;

    pub use crate::error::InvalidStateAccess;
    pub use crate::validate::Coverage;
}
