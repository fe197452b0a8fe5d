use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

pub use super::numerics::Numeric;
use super::counter::next_variable_id;
use super::error::RuntimeError;

/// Functor of a list cell.
pub const LIST_FUNCTOR: &str = ".";
/// The empty list.
pub const NIL: &str = "[]";

pub type TermList = Vec<Term>;

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Symbol(pub String);

impl Symbol {
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A logic variable.
///
/// Identity is the `id`; the name is only for display and for looking up
/// query answers by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variable {
    pub name: Symbol,
    pub id: u64,
}

impl Variable {
    /// A fresh variable, distinct from every other.
    pub fn new(name: &str) -> Self {
        Self {
            name: Symbol::new(name),
            id: next_variable_id(),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.0 == "_"
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.id.hash(state)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Compound {
    pub functor: Symbol,
    pub args: TermList,
}

impl Compound {
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    fn is_list_cell(&self) -> bool {
        self.functor.0 == LIST_FUNCTOR && self.args.len() == 2
    }
}

/// Type tags, declared in the standard order of terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TermType {
    Variable,
    Float,
    Rational,
    Integer,
    Atom,
    Compound,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Variable(Variable),
    Atom(Symbol),
    Number(Numeric),
    Compound(Compound),
}

/// An immutable, shareable term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    value: Arc<Value>,
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl From<Value> for Term {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl From<Numeric> for Term {
    fn from(n: Numeric) -> Self {
        Self::new(Value::Number(n))
    }
}

impl From<Variable> for Term {
    fn from(v: Variable) -> Self {
        Self::new(Value::Variable(v))
    }
}

impl Term {
    pub fn new(value: Value) -> Self {
        Self {
            value: Arc::new(value),
        }
    }

    /// A fresh variable named `name`.
    pub fn var(name: &str) -> Self {
        Self::from(Variable::new(name))
    }

    pub fn atom(name: &str) -> Self {
        Self::new(Value::Atom(Symbol::new(name)))
    }

    pub fn integer(i: i64) -> Self {
        Self::from(Numeric::from(i))
    }

    pub fn float(f: f64) -> Self {
        Self::from(Numeric::Float(f))
    }

    /// `functor(args...)`; with no arguments this is just the atom.
    pub fn compound(functor: &str, args: TermList) -> Self {
        if args.is_empty() {
            Self::atom(functor)
        } else {
            Self::new(Value::Compound(Compound {
                functor: Symbol::new(functor),
                args,
            }))
        }
    }

    pub fn nil() -> Self {
        Self::atom(NIL)
    }

    /// A proper list of `items`.
    pub fn list(items: TermList) -> Self {
        Self::list_with_tail(items, Self::nil())
    }

    /// A partial list `[items... | tail]`.
    pub fn list_with_tail(items: TermList, tail: Term) -> Self {
        items.into_iter().rev().fold(tail, |rest, item| {
            Self::compound(LIST_FUNCTOR, vec![item, rest])
        })
    }

    /// A code list: one integer character code per `char`.
    pub fn codes(text: &str) -> Self {
        Self::list(
            text.chars()
                .map(|c| Self::from(crate::literals::new_code(c)))
                .collect(),
        )
    }

    /// Get a reference to the underlying data of this term
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether both terms share the same allocation.
    pub(crate) fn ptr_eq(&self, other: &Term) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }

    pub fn term_type(&self) -> TermType {
        match self.value() {
            Value::Variable(_) => TermType::Variable,
            Value::Atom(_) => TermType::Atom,
            Value::Number(Numeric::Integer(_)) => TermType::Integer,
            Value::Number(Numeric::Float(_)) => TermType::Float,
            Value::Number(Numeric::Rational(_)) => TermType::Rational,
            Value::Compound(_) => TermType::Compound,
        }
    }

    /// `name/arity` for callable terms, the text itself otherwise.
    pub fn indicator(&self) -> String {
        match self.value() {
            Value::Atom(name) => format!("{}/0", crate::formatting::quote_atom(&name.0)),
            Value::Compound(c) => {
                format!("{}/{}", crate::formatting::quote_atom(&c.functor.0), c.arity())
            }
            Value::Variable(v) => v.name.0.clone(),
            Value::Number(_) => self.to_string(),
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self.value(), Value::Variable(_))
    }

    pub fn is_atom(&self) -> bool {
        matches!(self.value(), Value::Atom(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self.value(), Value::Number(_))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.value(), Value::Number(Numeric::Integer(_)))
    }

    pub fn is_float(&self) -> bool {
        matches!(self.value(), Value::Number(Numeric::Float(_)))
    }

    pub fn is_rational(&self) -> bool {
        matches!(self.value(), Value::Number(Numeric::Rational(_)))
    }

    pub fn is_compound(&self) -> bool {
        matches!(self.value(), Value::Compound(_))
    }

    pub fn is_callable(&self) -> bool {
        self.is_atom() || self.is_compound()
    }

    pub fn is_ground(&self) -> bool {
        match self.value() {
            Value::Variable(_) => false,
            Value::Atom(_) | Value::Number(_) => true,
            Value::Compound(c) => c.args.iter().all(Term::is_ground),
        }
    }

    pub fn as_variable(&self) -> Result<&Variable, RuntimeError> {
        match self.value() {
            Value::Variable(v) => Ok(v),
            _ => Err(self.type_error("variable")),
        }
    }

    pub fn as_atom(&self) -> Result<&Symbol, RuntimeError> {
        match self.value() {
            Value::Atom(name) => Ok(name),
            _ => Err(self.type_error("atom")),
        }
    }

    pub fn as_number(&self) -> Result<&Numeric, RuntimeError> {
        match self.value() {
            Value::Number(n) => Ok(n),
            _ => Err(self.type_error("number")),
        }
    }

    pub fn as_compound(&self) -> Result<&Compound, RuntimeError> {
        match self.value() {
            Value::Compound(c) => Ok(c),
            _ => Err(self.type_error("compound")),
        }
    }

    fn type_error(&self, expected: &str) -> RuntimeError {
        RuntimeError::TypeError {
            msg: format!("Expected {}, got: {}", expected, self),
        }
    }

    /// Every distinct variable in the term, in order of first occurrence.
    pub fn variables(&self) -> Vec<Variable> {
        fn collect(term: &Term, vars: &mut Vec<Variable>) {
            match term.value() {
                Value::Variable(v) => {
                    if !vars.contains(v) {
                        vars.push(v.clone())
                    }
                }
                Value::Compound(c) => c.args.iter().for_each(|arg| collect(arg, vars)),
                _ => {}
            }
        }

        let mut vars = vec![];
        collect(self, &mut vars);
        vars
    }

    /// Split a list into its items and whatever ends it (`[]` for a
    /// proper list). `None` if the term is not a list cell or `[]`.
    pub fn list_items(&self) -> Option<(TermList, Term)> {
        let mut items = vec![];
        let mut rest = self.clone();
        loop {
            let next = match rest.value() {
                Value::Compound(c) if c.is_list_cell() => {
                    items.push(c.args[0].clone());
                    c.args[1].clone()
                }
                _ => break,
            };
            rest = next;
        }
        if items.is_empty() && rest.value() != &Value::Atom(Symbol::new(NIL)) {
            return None;
        }
        Some((items, rest))
    }

    /// ISO standard order of terms.
    ///
    /// Variables < Numbers < Atoms < Compounds. Numbers compare by value,
    /// with Float < Rational < Integer when equal. Compounds compare by
    /// arity, then name, then arguments left to right.
    pub fn standard_order_cmp(&self, other: &Term) -> Ordering {
        fn rank(term: &Term) -> u8 {
            match term.value() {
                Value::Variable(_) => 0,
                Value::Number(_) => 1,
                Value::Atom(_) => 2,
                Value::Compound(_) => 3,
            }
        }

        match (self.value(), other.value()) {
            (Value::Variable(left), Value::Variable(right)) => left.id.cmp(&right.id),
            (Value::Number(left), Value::Number(right)) => left
                .arith_cmp(right)
                .unwrap_or_else(|| left.float64().total_cmp(&right.float64()))
                .then_with(|| self.term_type().cmp(&other.term_type())),
            (Value::Atom(left), Value::Atom(right)) => left.cmp(right),
            (Value::Compound(left), Value::Compound(right)) => left
                .arity()
                .cmp(&right.arity())
                .then_with(|| left.functor.cmp(&right.functor))
                .then_with(|| {
                    left.args
                        .iter()
                        .zip(&right.args)
                        .map(|(l, r)| l.standard_order_cmp(r))
                        .find(|o| *o != Ordering::Equal)
                        .unwrap_or(Ordering::Equal)
                }),
            _ => rank(self).cmp(&rank(other)),
        }
    }
}
