//! Entry points: [`inspect`], [`inspect_as`] and the [`inspect!`](crate::inspect!) macro.
//!
//! Role
//! - Both functions first prove that the handler set is exhaustive for the value's shape
//!   ([`Exhaustive`]), then route the active alternative to exactly one handler ([`Dispatch`]).
//! - `inspect` deduces its result type from the handlers (they must agree), `inspect_as` returns
//!   the requested type and converts every handler output into it.
//! - [`coverage`] runs the exhaustiveness proof alone and reports how the alternatives are split
//!   between specific handlers and the catch-all.
//!
//! Example
//! ```
//! use hyadt::prelude::*;
//!
//! let value: Union![i32, f64, f32] = Union::new(42);
//! let text = inspect(
//!     value,
//!     handlers![
//!         on(|x: i32| format!("int {x}")),
//!         on(|x: f64| format!("double {x}")),
//!         on(|x: f32| format!("float {x}")),
//!     ],
//! );
//! assert_eq!(text, "int 42");
//! ```
use std::any::type_name;

use crate::coproduct::{Alternatives, Names};
use crate::dispatch::Dispatch;
use crate::returns::{Deduced, Requested};
use crate::shape::Shape;
use crate::validate::{Coverage, Exhaustive};

#[inline]
fn open<S: Shape>(value: S) -> S::Alternatives {
    let alternatives = value.into_alternatives();
    log::trace!(
        "inspect {} ({}): alternative {}/{} `{}`",
        type_name::<S>(),
        S::KIND,
        alternatives.position() + 1,
        <S::Alternatives as Alternatives>::LEN,
        alternatives.active_name()
    );
    alternatives
}

/// Run the handler accepting the active alternative of `value` and return its result.
///
/// Every handler must return the same type. `value` may be owned, `&S` or `&mut S`; the handlers
/// then accept owned payloads, shared borrows or mutable borrows respectively.
#[inline]
pub fn inspect<S, H, P, R>(value: S, handlers: H) -> R
where
    S: Shape,
    H: Exhaustive<S::Alternatives, P> + Dispatch<S::Alternatives, P, Deduced<R>>,
{
    handlers.dispatch(open(value))
}

/// Like [`inspect`], but return `R`, converting each handler output with [`Into`].
///
/// ```
/// use hyadt::prelude::*;
///
/// let value: Union![char, &str] = Union::new("seven");
/// let text = inspect_as::<String, _, _, _>(value, handlers![on(|c: char| c), on(|s: &str| s.to_owned())]);
/// assert_eq!(text, "seven");
/// ```
#[inline]
pub fn inspect_as<R, S, H, P>(value: S, handlers: H) -> R
where
    S: Shape,
    H: Exhaustive<S::Alternatives, P> + Dispatch<S::Alternatives, P, Requested<R>>,
{
    handlers.dispatch(open(value))
}

/// Split the alternatives of the shape `S` between the specific handlers of `handlers` and its
/// catch-all. The handlers are not run.
///
/// ```
/// use hyadt::prelude::*;
///
/// let set = handlers![on(|x: i32| x); otherwise(|_| 0)];
/// let report = coverage::<Option<i32>, _, _>(&set);
/// assert_eq!(report.handled[..], ["i32"]);
/// assert!(report.uses_fallback());
/// ```
pub fn coverage<S, H, P>(_handlers: &H) -> Coverage
where
    S: Shape,
    H: Exhaustive<S::Alternatives, P>,
{
    let mut report = Coverage::new(S::KIND);
    <S::Alternatives as Alternatives>::names(&mut report.alternatives);
    H::coverage(&mut report);
    report
}

/// Names of the alternatives of the shape `S`, in declaration order.
pub fn alternatives_of<S: Shape>() -> Names {
    let mut names = Names::new();
    <S::Alternatives as Alternatives>::names(&mut names);
    names
}

/// Inspect a value with a handler list, optionally requesting the result type.
///
/// `inspect!(value; h1, h2; catch_all)` is `inspect(value, handlers![h1, h2; catch_all])`, and
/// `inspect!(value => T; ...)` is `inspect_as::<T, _, _, _>(...)`.
///
/// ```
/// use hyadt::prelude::*;
///
/// let doubled = inspect!(Some(21); on(|x: i32| x * 2), absent(|| 0));
/// assert_eq!(doubled, 42);
///
/// let text = inspect!(Err::<u8, char>('e') => String; ok(|v: u8| v.to_string()), err(|c: char| c));
/// assert_eq!(text, "e");
/// ```
#[macro_export]
macro_rules! inspect {
    ($value:expr => $ret:ty; $($handlers:tt)*) => {
        $crate::inspect_as::<$ret, _, _, _>($value, $crate::handlers!($($handlers)*))
    };
    ($value:expr; $($handlers:tt)*) => {
        $crate::inspect($value, $crate::handlers!($($handlers)*))
    };
}
