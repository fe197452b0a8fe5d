//! Unification.
//!
//! Numbers and atoms only unify with a term of the same kind and value, and
//! never add bindings. Any term unified with a variable hands over to the
//! variable's side, so binding logic lives in one place.

use crate::bindings::Bindings;
use crate::error::{CantUnify, UnifyResult};
use crate::terms::{Compound, Term, Value};

impl Term {
    /// Make `self` and `other` identical under `env`, returning the
    /// extended bindings. `env` itself is untouched.
    ///
    /// There is no occurs check.
    pub fn unify(&self, env: &Bindings, other: &Term) -> UnifyResult<Bindings> {
        match (self.value(), other.value()) {
            (Value::Variable(_), _) => self.unify_variable(env, other),
            (_, Value::Variable(_)) => other.unify(env, self),
            (Value::Atom(left), Value::Atom(right)) if left == right => Ok(env.clone()),
            // Same kind and value; `1` and `1.0` do not unify.
            (Value::Number(left), Value::Number(right)) if left == right => Ok(env.clone()),
            (Value::Compound(left), Value::Compound(right)) => unify_compounds(env, left, right),
            _ => {
                debugf!("can't unify {} with {}", self, other);
                Err(CantUnify)
            }
        }
    }

    fn unify_variable(&self, env: &Bindings, other: &Term) -> UnifyResult<Bindings> {
        let left = env.resolve_term(self);
        let var = match left.value() {
            Value::Variable(var) => var,
            _ => return left.unify(env, other),
        };
        let right = env.resolve_term(other);
        match right.value() {
            Value::Variable(v) if v == var => Ok(env.clone()),
            _ => env.bind(var, right).map_err(|_| CantUnify),
        }
    }

    /// `self` with every bound variable replaced by its value, recursively.
    ///
    /// Atomic terms come back unchanged, as do compounds with nothing to
    /// replace. Without an occurs check a variable can be bound to a term
    /// containing itself (`X = f(X)`); such a variable is left in place
    /// inside its own expansion, giving `f(X)`.
    pub fn replace_variables(&self, env: &Bindings) -> Term {
        self.replace_variables_within(env, &mut vec![])
    }

    /// `expanding` holds the ids of the variables whose values are being
    /// replaced further up the tree.
    fn replace_variables_within(&self, env: &Bindings, expanding: &mut Vec<u64>) -> Term {
        match self.value() {
            Value::Variable(var) => {
                if expanding.contains(&var.id) {
                    return self.clone();
                }
                let resolved = env.resolve_term(self);
                if resolved.is_variable() {
                    return resolved;
                }
                expanding.push(var.id);
                let replaced = resolved.replace_variables_within(env, expanding);
                expanding.pop();
                replaced
            }
            Value::Compound(c) => {
                let args: Vec<Term> = c
                    .args
                    .iter()
                    .map(|a| a.replace_variables_within(env, expanding))
                    .collect();
                if args.iter().zip(&c.args).all(|(new, old)| new.ptr_eq(old)) {
                    self.clone()
                } else {
                    Term::new(Value::Compound(Compound {
                        functor: c.functor.clone(),
                        args,
                    }))
                }
            }
            Value::Atom(_) | Value::Number(_) => self.clone(),
        }
    }
}

/// Functor and arity must agree; arguments unify left to right.
fn unify_compounds(env: &Bindings, left: &Compound, right: &Compound) -> UnifyResult<Bindings> {
    if left.functor != right.functor || left.arity() != right.arity() {
        debugf!(
            "can't unify {}/{} with {}/{}",
            left.functor,
            left.arity(),
            right.functor,
            right.arity()
        );
        return Err(CantUnify);
    }
    left.args
        .iter()
        .zip(&right.args)
        .try_fold(env.clone(), |env, (l, r)| l.unify(&env, r))
}
