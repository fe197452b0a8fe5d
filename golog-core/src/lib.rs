//! Core data model of a small Prolog interpreter: terms, numbers, literal
//! parsing, persistent variable bindings, unification, and the protocol
//! native predicates use to report their results.

#[macro_use]
pub mod debug;
#[macro_use]
pub mod macros;

pub mod bindings;
mod counter;
pub mod error;
pub mod fatal;
pub mod foreign;
pub mod formatting;
pub mod literals;
pub mod numerics;
pub mod terms;
mod unify;

pub use bindings::Bindings;
pub use error::{CantUnify, GologError, GologResult, UnifyResult};
pub use foreign::{
    call_foreign, foreign_exception, foreign_fail, foreign_true, foreign_unify, ForeignPredicate,
    ForeignReturn,
};
pub use numerics::Numeric;
pub use terms::{Term, Value, Variable};
