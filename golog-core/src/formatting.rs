//! # Formatting
//!
//! Two forms of formatting exist for terms:
//!
//! 1. Debug strings: verbose, Rust-auto derived from fmt::Debug
//! 2. Display strings: the same syntax a Prolog reader accepts, so a term
//!    printed with `{}` can be read back in.
//!
//! Lists print with bracket sugar and atoms are quoted only when they have
//! to be.

use std::fmt;

use super::numerics::Numeric;
use super::terms::*;

/// Symbol characters that form an unquoted atom on their own.
const SYMBOL_CHARS: &str = "+-*/\\^<>=~:.?@#&$";

/// `name` as it must be written to read back as the same atom.
pub fn quote_atom(name: &str) -> String {
    if needs_quotes(name) {
        let mut quoted = String::with_capacity(name.len() + 2);
        quoted.push('\'');
        for c in name.chars() {
            match c {
                '\'' => quoted.push_str("\\'"),
                '\\' => quoted.push_str("\\\\"),
                '\n' => quoted.push_str("\\n"),
                '\t' => quoted.push_str("\\t"),
                c => quoted.push(c),
            }
        }
        quoted.push('\'');
        quoted
    } else {
        name.to_owned()
    }
}

fn needs_quotes(name: &str) -> bool {
    if matches!(name, "[]" | "!" | ";" | "{}") {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        None => true,
        Some(c) if c.is_ascii_lowercase() => {
            !chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        Some(_) => name == "." || !name.chars().all(|c| SYMBOL_CHARS.contains(c)),
    }
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        "nan".to_owned()
    } else if f.is_infinite() {
        let s = if f > 0.0 { "inf" } else { "-inf" };
        s.to_owned()
    } else if f != 0.0 && (f.abs() >= 1e15 || f.abs() < 1e-4) {
        format!("{:e}", f)
    } else {
        let s = f.to_string();
        if s.contains('.') {
            s
        } else {
            s + ".0"
        }
    }
}

/// Formats a slice of terms as a comma-separated list
fn format_args(args: &[Term]) -> String {
    args.iter()
        .map(Term::to_string)
        .collect::<Vec<String>>()
        .join(",")
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Numeric::Integer(i) => write!(f, "{}", i),
            Numeric::Float(x) => write!(f, "{}", format_float(*x)),
            Numeric::Rational(r) => write!(f, "{}r{}", r.numer(), r.denom()),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", quote_atom(&self.0))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_anonymous() {
            write!(f, "_G{}", self.id)
        } else {
            write!(f, "{}", self.name.0)
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.value() {
            Value::Variable(v) => write!(f, "{}", v),
            Value::Atom(name) => write!(f, "{}", name),
            Value::Number(n) => write!(f, "{}", n),
            Value::Compound(c) => match self.list_items() {
                Some((items, tail)) => {
                    write!(f, "[{}", format_args(&items))?;
                    if tail != Term::nil() {
                        write!(f, "|{}", tail)?;
                    }
                    write!(f, "]")
                }
                None => write!(f, "{}({})", c.functor, format_args(&c.args)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::BigRational;

    #[test]
    fn test_quote_atom() {
        assert_eq!(quote_atom("foo"), "foo");
        assert_eq!(quote_atom("fooBar_1"), "fooBar_1");
        assert_eq!(quote_atom("Foo"), "'Foo'");
        assert_eq!(quote_atom("hello world"), "'hello world'");
        assert_eq!(quote_atom("=.."), "=..");
        assert_eq!(quote_atom("[]"), "[]");
        assert_eq!(quote_atom("."), "'.'");
        assert_eq!(quote_atom(""), "''");
        assert_eq!(quote_atom("it's"), "'it\\'s'");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(term!(42).to_string(), "42");
        assert_eq!(term!(-7).to_string(), "-7");
        assert_eq!(term!(3.0).to_string(), "3.0");
        assert_eq!(term!(0.25).to_string(), "0.25");
        assert_eq!(term!(1e20).to_string(), "1e20");
        assert_eq!(term!(f64::INFINITY).to_string(), "inf");
        let r = Term::from(Numeric::Rational(BigRational::new(3.into(), 2.into())));
        assert_eq!(r.to_string(), "3r2");
    }

    #[test]
    fn test_compounds_and_lists() {
        let t = cmp!("foo", [atom!("a"), term!(1), cmp!("bar", [atom!("B c")])]);
        assert_eq!(t.to_string(), "foo(a,1,bar('B c'))");
        assert_eq!(
            Term::list(vec![term!(1), term!(2), term!(3)]).to_string(),
            "[1,2,3]"
        );
        assert_eq!(Term::nil().to_string(), "[]");
        let tail = Term::var("T");
        assert_eq!(
            Term::list_with_tail(vec![term!(1)], tail).to_string(),
            "[1|T]"
        );
        // a '.' cell that does not chain into a list
        assert_eq!(
            cmp!(".", [term!(1), term!(2)]).to_string(),
            "[1|2]"
        );
    }

    #[test]
    fn test_anonymous_variables_are_distinguished() {
        let a = Term::var("_");
        let b = Term::var("_");
        assert_ne!(a.to_string(), b.to_string());
        assert!(a.to_string().starts_with("_G"));
    }
}
