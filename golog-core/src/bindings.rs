//! Variable bindings.
//!
//! `Bindings` associate variables with the terms they are bound to. A value
//! is never changed in place: `bind` returns a new `Bindings` that shares
//! structure with the old one, so a choice point only has to keep the value
//! it started from to backtrack.
use std::fmt;

use im::{HashMap, OrdMap};
use serde::{Deserialize, Serialize};

use crate::error::{GologResult, RuntimeError};
use crate::terms::{Term, Value, Variable};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bindings {
    /// Keyed by variable id.
    values: HashMap<u64, Term>,
    /// Query variable names, for reporting answers.
    names: OrdMap<String, Variable>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new environment in which `var` is bound to `value`.
    ///
    /// Rebinding is an error, even to the same value.
    pub fn bind(&self, var: &Variable, value: Term) -> GologResult<Self> {
        if self.values.contains_key(&var.id) {
            return Err(RuntimeError::AlreadyBound {
                var: var.to_string(),
            }
            .into());
        }
        debugf!("bind {} (#{}) = {}", var, var.id, value);
        Ok(Self {
            values: self.values.update(var.id, value),
            names: self.names.clone(),
        })
    }

    pub fn is_bound(&self, var: &Variable) -> bool {
        self.values.contains_key(&var.id)
    }

    /// Follow `var` through variable-to-variable bindings.
    ///
    /// Returns the first non-variable term or the last, unbound, variable in
    /// the chain. `None` if `var` itself is unbound.
    pub fn resolve(&self, var: &Variable) -> Option<Term> {
        let mut current = self.values.get(&var.id)?.clone();
        loop {
            let next = match current.value() {
                Value::Variable(v) => match self.values.get(&v.id) {
                    Some(next) => next.clone(),
                    None => return Some(current),
                },
                _ => return Some(current),
            };
            current = next;
        }
    }

    /// If `term` is a bound variable, its resolved value; otherwise `term`.
    pub fn resolve_term(&self, term: &Term) -> Term {
        match term.value() {
            Value::Variable(v) => self.resolve(v).unwrap_or_else(|| term.clone()),
            _ => term.clone(),
        }
    }

    /// Number of bound variables.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Attach the names of a query's variables.
    pub fn with_names<I>(&self, vars: I) -> Self
    where
        I: IntoIterator<Item = Variable>,
    {
        let mut names = self.names.clone();
        for var in vars {
            names.insert(var.name.0.clone(), var);
        }
        Self {
            values: self.values.clone(),
            names,
        }
    }

    /// The value of the query variable called `name`, with every bound
    /// variable inside it replaced. An unbound variable comes back as itself.
    pub fn by_name(&self, name: &str) -> Option<Term> {
        let var = self.names.get(name)?;
        Some(Term::from(var.clone()).replace_variables(self))
    }
}

impl fmt::Display for Bindings {
    /// `{X = 1, Y = foo}`: bound named variables, in name order.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let answers = self
            .names
            .iter()
            .filter(|(name, var)| !name.starts_with('_') && self.is_bound(var))
            .filter_map(|(name, _)| Some(format!("{} = {}", name, self.by_name(name)?)))
            .collect::<Vec<String>>();
        write!(f, "{{{}}}", answers.join(", "))
    }
}
