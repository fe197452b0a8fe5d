//! Helper macros to create terms
use crate::numerics::Numeric;
use crate::terms::*;

#[macro_export]
macro_rules! value {
    ($arg:expr) => {
        $crate::macros::TestHelper::<$crate::terms::Value>::from($arg).0
    };
}

#[macro_export]
macro_rules! term {
    ($($expr:tt)*) => {
        $crate::macros::TestHelper::<$crate::terms::Term>::from($crate::value!($($expr)*)).0
    };
}

#[macro_export]
macro_rules! sym {
    ($arg:expr) => {
        $crate::macros::TestHelper::<$crate::terms::Symbol>::from($arg).0
    };
}

/// A fresh variable term. Two `var!("X")` are different variables.
#[macro_export]
macro_rules! var {
    ($arg:expr) => {
        $crate::terms::Term::var($arg)
    };
}

#[macro_export]
macro_rules! atom {
    ($arg:expr) => {
        $crate::terms::Term::atom($arg)
    };
}

#[macro_export]
macro_rules! cmp {
    ($name:expr) => {
        $crate::terms::Term::atom($name)
    };
    ($name:expr, [$($args:expr),* $(,)?]) => {
        $crate::terms::Term::compound($name, vec![$($crate::term!($args)),*])
    };
}

/// Special struct which is way more eager at implementing `From`
/// for a bunch of things, so that in the macros we can use `TestHelper<Term>::from`
/// and try and convert things as often as possible.
pub struct TestHelper<T>(pub T);

impl<T> From<T> for TestHelper<T> {
    fn from(other: T) -> Self {
        Self(other)
    }
}

impl From<Value> for TestHelper<Term> {
    fn from(other: Value) -> Self {
        Self(Term::from(other))
    }
}

impl<S: AsRef<str>> From<S> for TestHelper<Symbol> {
    fn from(other: S) -> Self {
        Self(Symbol(other.as_ref().to_string()))
    }
}

impl From<i64> for TestHelper<Value> {
    fn from(other: i64) -> Self {
        Self(Value::Number(other.into()))
    }
}

impl From<f64> for TestHelper<Value> {
    fn from(other: f64) -> Self {
        Self(Value::Number(other.into()))
    }
}

impl From<Numeric> for TestHelper<Value> {
    fn from(other: Numeric) -> Self {
        Self(Value::Number(other))
    }
}

/// Strings become atoms.
impl From<&str> for TestHelper<Value> {
    fn from(other: &str) -> Self {
        Self(Value::Atom(Symbol::new(other)))
    }
}

impl From<Symbol> for TestHelper<Value> {
    fn from(other: Symbol) -> Self {
        Self(Value::Atom(other))
    }
}

impl From<Variable> for TestHelper<Value> {
    fn from(other: Variable) -> Self {
        Self(Value::Variable(other))
    }
}

impl From<Compound> for TestHelper<Value> {
    fn from(other: Compound) -> Self {
        Self(Value::Compound(other))
    }
}

impl From<Term> for TestHelper<Value> {
    fn from(other: Term) -> Self {
        Self(other.value().clone())
    }
}

impl<'a, T> From<&'a T> for TestHelper<Value>
where
    T: Clone + Into<TestHelper<Value>>,
{
    fn from(other: &'a T) -> Self {
        other.clone().into()
    }
}
