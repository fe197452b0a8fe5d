use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

/// There are 53 bits of mantissa in an IEEE 754 double precision float.
pub const MOST_POSITIVE_EXACT_FLOAT: i64 = 1 << 53;

/// The numeric tower.
///
/// Each variant owns its representation. Rationals are always kept in
/// lowest terms with a positive denominator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Numeric {
    Integer(BigInt),
    Float(f64),
    Rational(BigRational),
}

impl Numeric {
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    pub fn is_rational(&self) -> bool {
        matches!(self, Self::Rational(_))
    }

    /// Lossy value, for mixing with floats.
    ///
    /// Exact values outside the f64 range saturate to an infinity.
    pub fn float64(&self) -> f64 {
        match self {
            Self::Integer(i) => i.to_f64().unwrap_or_else(|| saturate(i.is_negative())),
            Self::Float(f) => *f,
            Self::Rational(r) => r.to_f64().unwrap_or_else(|| {
                let n = r.numer().to_f64().unwrap_or_else(|| saturate(r.is_negative()));
                let d = r.denom().to_f64().unwrap_or(f64::INFINITY);
                n / d
            }),
        }
    }

    /// The exact integer value, if there is one.
    pub fn lossless_int(&self) -> Option<BigInt> {
        match self {
            Self::Integer(i) => Some(i.clone()),
            Self::Rational(r) if r.is_integer() => Some(r.to_integer()),
            _ => None,
        }
    }

    /// The exact fractional value, if there is one. Floats never have one.
    pub fn lossless_rat(&self) -> Option<BigRational> {
        match self {
            Self::Integer(i) => Some(BigRational::from_integer(i.clone())),
            Self::Rational(r) => Some(r.clone()),
            Self::Float(_) => None,
        }
    }

    /// Treat an integer as a character code.
    pub fn code(&self) -> Option<char> {
        match self {
            Self::Integer(i) => i.to_u32().and_then(char::from_u32),
            _ => None,
        }
    }

    /// Arithmetic comparison by mathematical value, across kinds.
    ///
    /// Unlike unification, `3` and `3.0` compare equal here. Finite floats
    /// are compared through their exact binary value, so no precision is
    /// lost against large integers. NaN is unordered.
    pub fn arith_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => Some(left.cmp(right)),
            (Self::Float(left), Self::Float(right)) => left.partial_cmp(right),
            (Self::Float(f), exact) if !f.is_finite() => cmp_non_finite(*f, exact),
            (exact, Self::Float(f)) if !f.is_finite() => {
                cmp_non_finite(*f, exact).map(Ordering::reverse)
            }
            (left, right) => Some(left.exact()?.cmp(&right.exact()?)),
        }
    }

    pub fn arith_eq(&self, other: &Self) -> bool {
        matches!(self.arith_cmp(other), Some(Ordering::Equal))
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(i) => i.is_zero(),
            Self::Float(f) => *f == 0.0,
            Self::Rational(r) => r.is_zero(),
        }
    }

    /// Exact value of any finite number.
    fn exact(&self) -> Option<BigRational> {
        match self {
            Self::Float(f) => BigRational::from_float(*f),
            _ => self.lossless_rat(),
        }
    }

    /// Arithmetic results with a unit denominator become integers.
    fn from_ratio(r: BigRational) -> Self {
        if r.is_integer() {
            Self::Integer(r.to_integer())
        } else {
            Self::Rational(r)
        }
    }
}

fn saturate(negative: bool) -> f64 {
    if negative {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }
}

/// Compare an infinite or NaN float `f` against a number.
fn cmp_non_finite(f: f64, other: &Numeric) -> Option<Ordering> {
    if f.is_nan() {
        None
    } else if let Numeric::Float(g) = other {
        f.partial_cmp(g)
    } else if f > 0.0 {
        Some(Ordering::Greater)
    } else {
        Some(Ordering::Less)
    }
}

/// Both operands as exact fractions; `None` if either is a float.
fn exact_operands(a: &Numeric, b: &Numeric) -> Option<(BigRational, BigRational)> {
    Some((a.lossless_rat()?, b.lossless_rat()?))
}

impl Add for Numeric {
    type Output = Option<Self>;

    fn add(self, other: Self) -> Option<Self> {
        match (self, other) {
            (Numeric::Integer(a), Numeric::Integer(b)) => Some(Numeric::Integer(a + b)),
            (Numeric::Float(a), b) => Some(Numeric::Float(a + b.float64())),
            (a, Numeric::Float(b)) => Some(Numeric::Float(a.float64() + b)),
            (a, b) => exact_operands(&a, &b).map(|(a, b)| Numeric::from_ratio(a + b)),
        }
    }
}

impl Sub for Numeric {
    type Output = Option<Self>;

    fn sub(self, other: Self) -> Option<Self> {
        match (self, other) {
            (Numeric::Integer(a), Numeric::Integer(b)) => Some(Numeric::Integer(a - b)),
            (Numeric::Float(a), b) => Some(Numeric::Float(a - b.float64())),
            (a, Numeric::Float(b)) => Some(Numeric::Float(a.float64() - b)),
            (a, b) => exact_operands(&a, &b).map(|(a, b)| Numeric::from_ratio(a - b)),
        }
    }
}

impl Mul for Numeric {
    type Output = Option<Self>;

    fn mul(self, other: Self) -> Option<Self> {
        match (self, other) {
            (Numeric::Integer(a), Numeric::Integer(b)) => Some(Numeric::Integer(a * b)),
            (Numeric::Float(a), b) => Some(Numeric::Float(a * b.float64())),
            (a, Numeric::Float(b)) => Some(Numeric::Float(a.float64() * b)),
            (a, b) => exact_operands(&a, &b).map(|(a, b)| Numeric::from_ratio(a * b)),
        }
    }
}

impl Div for Numeric {
    type Output = Option<Self>;

    /// Exact division by zero is `None`; float division follows IEEE.
    fn div(self, other: Self) -> Option<Self> {
        match (self, other) {
            (Numeric::Float(a), b) => Some(Numeric::Float(a / b.float64())),
            (a, Numeric::Float(b)) => Some(Numeric::Float(a.float64() / b)),
            (a, b) => {
                let (a, b) = exact_operands(&a, &b)?;
                if b.is_zero() {
                    None
                } else {
                    Some(Numeric::from_ratio(a / b))
                }
            }
        }
    }
}

impl Neg for Numeric {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Numeric::Integer(i) => Numeric::Integer(-i),
            Numeric::Float(f) => Numeric::Float(-f),
            Numeric::Rational(r) => Numeric::Rational(-r),
        }
    }
}

/// Same kind and same value. `1` is not equal to `1.0` here.
impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::Rational(left), Self::Rational(right)) => left == right,
            _ => false,
        }
    }
}

impl From<i64> for Numeric {
    fn from(other: i64) -> Self {
        Self::Integer(other.into())
    }
}

impl From<BigInt> for Numeric {
    fn from(other: BigInt) -> Self {
        Self::Integer(other)
    }
}

impl From<f64> for Numeric {
    fn from(other: f64) -> Self {
        Self::Float(other)
    }
}

impl From<BigRational> for Numeric {
    fn from(other: BigRational) -> Self {
        Self::Rational(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(i: i64) -> Numeric {
        Numeric::from(i)
    }

    fn float(f: f64) -> Numeric {
        Numeric::from(f)
    }

    fn rat(n: i64, d: i64) -> Numeric {
        Numeric::Rational(BigRational::new(n.into(), d.into()))
    }

    fn lt(a: Numeric, b: Numeric) -> bool {
        a.arith_cmp(&b) == Some(Ordering::Less)
    }

    fn gt(a: Numeric, b: Numeric) -> bool {
        a.arith_cmp(&b) == Some(Ordering::Greater)
    }

    fn eq(a: Numeric, b: Numeric) -> bool {
        a.arith_eq(&b)
    }

    #[test]
    /// Test mixed comparison of integers & doubles.
    fn test_mixed_comparison() {
        // NaN to int -- Nothing compares equal to NaN.
        assert!(!eq(int(1), float(f64::NAN)));
        assert!(!eq(int(-1), float(f64::NAN)));
        assert!(!lt(int(1), float(f64::NAN)));
        assert!(!gt(int(1), float(f64::NAN)));
        assert!(!gt(int(-1), float(f64::NAN)));

        // All zeros equal.
        assert!(eq(int(0), float(0.0)));
        assert!(eq(int(0), float(-0.0)));

        // Infinity to int compares greater than all ints.
        assert!(lt(int(1), float(f64::INFINITY)));
        assert!(lt(int(i64::MAX), float(f64::INFINITY)));
        assert!(lt(int(i64::MIN), float(f64::INFINITY)));
        assert!(gt(int(i64::MIN), float(f64::NEG_INFINITY)));
        assert!(gt(int(0), float(f64::NEG_INFINITY)));
        assert!(gt(int(i64::MAX), float(f64::NEG_INFINITY)));

        // Float representable as integer compares correctly.
        assert!(eq(int(1), float(1.0)));
        assert!(!eq(int(-1), float(1.0)));
        assert!(gt(int(2), float(1.0)));
        assert!(lt(int(-2), float(1.0)));
        assert!(eq(int(1 << 52), float(2f64.powi(52))));
        assert!(eq(int(1 << 53), float(2f64.powi(53))));
        assert!(eq(int((1 << 52) + 1), float(2f64.powi(52) + 1.0)));
        assert!(lt(int(1 << 52), float(2f64.powi(52) + 1.0)));
        assert!(gt(int((1 << 52) + 1), float(2f64.powi(52))));

        // Integer not exactly representable as float compares correctly.
        assert!(gt(int((1 << 53) + 1), float(2f64.powi(53))));
        assert!(eq(int((1 << 53) - 1), float(2f64.powi(53) - 1.0)));
        assert!(lt(int(-(1 << 53) - 1), float(-(2f64.powi(53)))));
        assert!(gt(int(1 << 56), float(2f64.powi(54))));

        // Floats beyond i64 range.
        assert!(lt(int(1 << 56), float(2f64.powi(70))));
        assert!(gt(int(i64::MIN), float(-(2f64.powi(70)))));
        assert!(lt(int(i64::MAX), float(2f64.powi(63))));
        assert!(gt(int(i64::MAX), float(2f64.powi(63) - 1024.0)));
        assert!(eq(int(i64::MIN), float(-(2f64.powi(63)))));

        assert!(eq(int(2), float(2.0)));
        assert!(lt(int(2), float(2.0 + 2.0 * f64::EPSILON)));
        assert!(gt(int(2), float(2.0 - 2.0 * f64::EPSILON)));
        assert!(lt(int(1), float(1.0 + f64::EPSILON)));
        assert!(gt(int(1), float(1.0 - f64::EPSILON)));
    }

    #[test]
    fn test_rational_comparison() {
        assert!(eq(rat(3, 2), float(1.5)));
        assert!(lt(rat(1, 3), float(0.34)));
        assert!(gt(rat(1, 3), int(0)));
        assert!(eq(rat(4, 2), int(2)));
        // 0.1 has no exact binary value.
        assert!(!eq(rat(1, 10), float(0.1)));
        let huge = Numeric::Integer(BigInt::from(10).pow(400));
        assert!(lt(huge.clone(), float(f64::INFINITY)));
        assert!(gt(huge, float(f64::MAX)));
    }

    #[test]
    fn test_variant_exact_equality() {
        assert_eq!(int(3), int(3));
        assert_ne!(int(3), float(3.0));
        assert_ne!(int(2), rat(2, 1));
        assert_ne!(float(f64::NAN), float(f64::NAN));
        assert_eq!(float(0.0), float(-0.0));
    }

    #[test]
    fn test_lossless_queries() {
        assert_eq!(int(7).lossless_int(), Some(BigInt::from(7)));
        assert_eq!(
            int(7).lossless_rat(),
            Some(BigRational::from_integer(7.into()))
        );
        assert_eq!(float(7.0).lossless_int(), None);
        assert_eq!(float(7.0).lossless_rat(), None);
        assert_eq!(rat(3, 2).lossless_int(), None);
        assert_eq!(
            rat(3, 2).lossless_rat(),
            Some(BigRational::new(3.into(), 2.into()))
        );
        assert_eq!(rat(4, 2).lossless_int(), Some(BigInt::from(2)));
    }

    #[test]
    fn test_float64() {
        assert_eq!(int(-5).float64(), -5.0);
        assert_eq!(rat(1, 4).float64(), 0.25);
        let huge = Numeric::Integer(BigInt::from(10).pow(400));
        assert_eq!(huge.float64(), f64::INFINITY);
        assert_eq!((-huge).float64(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(int(2) + int(3), Some(int(5)));
        assert_eq!(int(2) - float(0.5), Some(float(1.5)));
        assert_eq!(rat(1, 2) + rat(1, 2), Some(int(1)));
        assert_eq!(int(1) / int(3), Some(rat(1, 3)));
        assert_eq!(int(6) / int(3), Some(int(2)));
        assert_eq!(int(1) / int(0), None);
        assert_eq!(rat(1, 2) / int(0), None);
        assert_eq!(int(1) / float(0.0), Some(float(f64::INFINITY)));
        assert_eq!(rat(2, 3) * int(3), Some(int(2)));
        assert_eq!(-rat(2, 3), rat(-2, 3));

        let big = Numeric::Integer(BigInt::from(i64::MAX));
        assert_eq!(
            big * int(4),
            Some(Numeric::Integer(BigInt::from(i64::MAX) * 4))
        );
    }

    #[test]
    fn test_code() {
        assert_eq!(int(97).code(), Some('a'));
        assert_eq!(int(-1).code(), None);
        assert_eq!(float(97.0).code(), None);
    }
}
