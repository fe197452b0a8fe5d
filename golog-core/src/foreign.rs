//! Results of native ("foreign") predicates.
//!
//! A foreign predicate runs outside the engine and reports back with a
//! [`ForeignReturn`]: plain success, failure, a set of unifications for the
//! engine to perform, or an exception.
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::bindings::Bindings;
use crate::error::{GologResult, RuntimeError, UnifyResult};
use crate::fatal::{self, FatalError};
use crate::terms::Term;

/// Terms to unify pairwise: `[a1, b1, a2, b2, ...]`.
///
/// Only built through [`ForeignReturn::unify`], so the length is always even.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnifyPairs(Vec<Term>);

impl UnifyPairs {
    pub fn terms(&self) -> &[Term] {
        &self.0
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&Term, &Term)> {
        self.0.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.0.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ForeignReturn {
    True,
    Fail,
    Unify(UnifyPairs),
    Exception(String),
}

impl ForeignReturn {
    /// Unify `terms[0]` with `terms[1]`, `terms[2]` with `terms[3]`, and so on.
    ///
    /// An odd number of terms is a bug in the predicate and aborts.
    pub fn unify(terms: Vec<Term>) -> Self {
        if terms.len() % 2 != 0 {
            fatal::abort(FatalError::UnevenForeignUnify { len: terms.len() });
        }
        Self::Unify(UnifyPairs(terms))
    }

    pub fn exception<E: fmt::Display>(err: E) -> Self {
        Self::Exception(err.to_string())
    }

    /// Apply the result to `env`.
    ///
    /// `Ok(None)` means the call failed, either outright or because one of
    /// the requested unifications did not hold.
    pub fn resolve(self, env: &Bindings) -> GologResult<Option<Bindings>> {
        self.resolve_with(env, |left, env, right| left.unify(env, right))
    }

    fn resolve_with<F>(self, env: &Bindings, mut unify: F) -> GologResult<Option<Bindings>>
    where
        F: FnMut(&Term, &Bindings, &Term) -> UnifyResult<Bindings>,
    {
        match self {
            Self::True => Ok(Some(env.clone())),
            Self::Fail => Ok(None),
            Self::Unify(pairs) => {
                let mut env = env.clone();
                for (left, right) in pairs.pairs() {
                    match unify(left, &env, right) {
                        Ok(next) => env = next,
                        Err(_) => return Ok(None),
                    }
                }
                Ok(Some(env))
            }
            Self::Exception(msg) => Err(RuntimeError::Exception { msg }.into()),
        }
    }
}

impl fmt::Display for ForeignReturn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::Fail => write!(f, "fail"),
            Self::Unify(pairs) => {
                let pairs = pairs
                    .pairs()
                    .map(|(l, r)| format!("{} = {}", l, r))
                    .collect::<Vec<_>>();
                write!(f, "unify({})", pairs.join(", "))
            }
            Self::Exception(msg) => write!(f, "exception({})", msg),
        }
    }
}

pub fn foreign_true() -> ForeignReturn {
    ForeignReturn::True
}

pub fn foreign_fail() -> ForeignReturn {
    ForeignReturn::Fail
}

pub fn foreign_unify(terms: Vec<Term>) -> ForeignReturn {
    ForeignReturn::unify(terms)
}

pub fn foreign_exception<E: fmt::Display>(err: E) -> ForeignReturn {
    ForeignReturn::exception(err)
}

/// A native predicate, called with the current bindings and its arguments.
pub type ForeignPredicate = Arc<dyn Fn(&Bindings, &[Term]) -> ForeignReturn + Send + Sync>;

/// Call `pred` and apply its result to `env`.
pub fn call_foreign(
    pred: &ForeignPredicate,
    env: &Bindings,
    args: &[Term],
) -> GologResult<Option<Bindings>> {
    let result = pred(env, args);
    debugf!("foreign call returned {}", result);
    result.resolve(env)
}
