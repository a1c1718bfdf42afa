use strum::EnumIs;
use thiserror::Error;

/// Access to the payload of a branch that is not the active one.
///
/// The `try_*` accessors of the shapes return it; the plain accessors treat it as a programming
/// error and go through [`fatal`]. `inspect` never produces it, since it only ever reads the
/// active branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, Error)]
pub enum InvalidStateAccess {
    /// The success payload was requested from a result holding an error.
    #[error(
        "Attempted to access the success value of a result that holds an error of type `{error}`."
    )]
    NotSuccess { error: &'static str },

    /// The error payload was requested from a result holding a success value.
    #[error(
        "Attempted to access the error of a result that holds a success value of type `{value}`."
    )]
    NotFailure { value: &'static str },

    /// The payload was requested from an absent optional.
    #[error("Attempted to access the value of an absent optional of type `{value}`.")]
    Absent { value: &'static str },

    /// A union was read through an alternative that is not the active one.
    #[error(
        "Attempted to access alternative `{requested}` of a union whose active alternative is `{active}`."
    )]
    InactiveAlternative {
        requested: &'static str,
        active: &'static str,
    },
}

/// Report a contract violation and stop.
///
/// The violation is logged at `error` level before panicking, so it is visible even when the
/// panic ends up aborting the process.
#[cold]
#[track_caller]
pub fn fatal(violation: InvalidStateAccess) -> ! {
    log::error!("{violation}");
    panic!("{violation}")
}
