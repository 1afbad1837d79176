//! Exact rational arithmetic for the astronomical calendars.
//!
//! The Old Hindu period constants are fractions with seven- and eight-digit
//! denominators. Floating point drifts by whole days over a few millennia of
//! such products, so every sub-day quantity is kept as a reduced `i128`
//! fraction instead.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A reduced fraction with a strictly positive denominator.
///
/// Equality is structural, which is sound because every constructor
/// normalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i128,
    den: i128,
}

const fn gcd(mut a: i128, mut b: i128) -> i128 {
    if a < 0 {
        a = -a;
    }
    if b < 0 {
        b = -b;
    }
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

const fn floor_div_i128(a: i128, b: i128) -> i128 {
    let q = a / b;
    if a % b != 0 && (a < 0) != (b < 0) { q - 1 } else { q }
}

impl Rational {
    pub const ZERO: Self = Self { num: 0, den: 1 };
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Creates the fraction `num / den` in lowest terms.
    ///
    /// # Panics
    /// Panics if `den` is zero. Usable in `const` context, where the panic
    /// becomes a compile error.
    pub const fn new(num: i128, den: i128) -> Self {
        assert!(den != 0, "rational with zero denominator");
        let g = gcd(num, den);
        let (num, den) = (num / g, den / g);
        if den < 0 { Self { num: -num, den: -den } } else { Self { num, den } }
    }

    /// Creates `num / den`, or `None` when `den` is zero.
    pub const fn checked_new(num: i128, den: i128) -> Option<Self> {
        if den == 0 { None } else { Some(Self::new(num, den)) }
    }

    /// Creates the mixed number `whole + num / den`.
    pub const fn mixed(whole: i128, num: i128, den: i128) -> Self {
        Self::new(whole * den + num, den)
    }

    pub const fn from_integer(value: i64) -> Self {
        Self { num: value as i128, den: 1 }
    }

    pub const fn numer(self) -> i128 {
        self.num
    }

    pub const fn denom(self) -> i128 {
        self.den
    }

    pub const fn is_negative(self) -> bool {
        self.num < 0
    }

    /// Greatest integer less than or equal to `self`.
    pub const fn floor(self) -> i128 {
        floor_div_i128(self.num, self.den)
    }

    /// [`floor`](Self::floor) narrowed to a day count.
    ///
    /// Every value this crate floors is a day, year or degree count, so it
    /// fits comfortably in `i64`.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn floor_i64(self) -> i64 {
        self.floor() as i64
    }

    /// `self / rhs`, floored.
    pub fn quotient(self, rhs: Self) -> i64 {
        (self / rhs).floor_i64()
    }

    /// Floored remainder `self - rhs * floor(self / rhs)`.
    ///
    /// Non-negative for positive `rhs`.
    pub fn modulo(self, rhs: Self) -> Self {
        let r = self - rhs * Self::from_integer((self / rhs).floor_i64());
        if r.is_negative() && !rhs.is_negative() { r + rhs } else { r }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let g = gcd(self.den, rhs.den);
        let den = self.den / g * rhs.den;
        Self::new(self.num * (den / self.den) + rhs.num * (den / rhs.den), den)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self {
        Self { num: -self.num, den: self.den }
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        // Cross-reduce first to keep intermediates small. Denominators are
        // positive, so neither gcd is zero.
        let g1 = gcd(self.num, rhs.den);
        let g2 = gcd(rhs.num, self.den);
        Self::new((self.num / g1) * (rhs.num / g2), (self.den / g2) * (rhs.den / g1))
    }
}

impl Div for Rational {
    type Output = Self;

    /// # Panics
    /// Panics on division by zero.
    fn div(self, rhs: Self) -> Self {
        assert!(rhs.num != 0, "rational division by zero");
        self * Self::new(rhs.den, rhs.num)
    }
}

impl Add<i64> for Rational {
    type Output = Self;

    fn add(self, rhs: i64) -> Self {
        self + Self::from_integer(rhs)
    }
}

impl Mul<i64> for Rational {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        self * Self::from_integer(rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplication preserves order.
        (self.num * other.den).cmp(&(other.num * self.den))
    }
}
