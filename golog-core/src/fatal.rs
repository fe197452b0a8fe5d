//! Contract violations.
//!
//! Bad user data is reported through `Result`s (see [`crate::error`]). The
//! conditions here can only come from a bug in a caller, such as a reader
//! handing over text that does not match the radix it claimed, or a foreign
//! predicate returning an odd number of terms to unify. They never become
//! ordinary errors: [`abort`] does not return.
//!
//! An embedding application can observe (or redirect) them with
//! [`set_hook`]. If the hook returns, the abort still panics.

use std::fmt;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FatalError {
    /// `new_int` was handed empty text.
    EmptyInteger,
    /// A digit scan in the given radix matched nothing.
    NoDigits { token: String, radix: u32 },
    /// `ForeignReturn::unify` was given an odd number of terms.
    UnevenForeignUnify { len: usize },
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptyInteger => write!(f, "Empty string is not a valid integer"),
            Self::NoDigits { token, radix } => write!(
                f,
                "Parsed no integers: {} has no base {} digits",
                token.escape_debug(),
                radix
            ),
            Self::UnevenForeignUnify { len } => write!(
                f,
                "Uneven number of arguments to ForeignUnify: {}",
                len
            ),
        }
    }
}

impl std::error::Error for FatalError {}

pub type FatalHook = Arc<dyn Fn(&FatalError) + Send + Sync>;

static HOOK: RwLock<Option<FatalHook>> = RwLock::new(None);

/// Install a process-wide hook that runs before a fatal abort panics.
pub fn set_hook<F>(hook: F)
where
    F: Fn(&FatalError) + Send + Sync + 'static,
{
    let mut slot = HOOK.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *slot = Some(Arc::new(hook));
}

/// Remove the installed hook, returning it.
pub fn take_hook() -> Option<FatalHook> {
    let mut slot = HOOK.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    slot.take()
}

/// Report a contract violation and unwind.
#[track_caller]
pub fn abort(err: FatalError) -> ! {
    tracing::error!(%err, "fatal contract violation");
    // The lock must not be held while the hook runs.
    let hook = HOOK
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone();
    if let Some(hook) = hook {
        hook(&err);
    }
    panic!("{}", err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "Uneven number of arguments to ForeignUnify: 3")]
    fn test_abort_panics() {
        abort(FatalError::UnevenForeignUnify { len: 3 });
    }

    #[test]
    fn test_fatal_messages() {
        assert_eq!(
            FatalError::NoDigits {
                token: "zz".to_owned(),
                radix: 16
            }
            .to_string(),
            "Parsed no integers: zz has no base 16 digits"
        );
    }
}
