//! Integer helpers shared by every calendar.
//!
//! All divisions here are floored: the remainder takes the sign of the
//! divisor, so day and month arithmetic stays correct for dates before
//! the epoch of the proleptic calendars.

/// Floored remainder of `a` by `b`.
///
/// For positive `b` the result is always in `0..b`, unlike `%`.
#[inline]
pub const fn modulo(a: i64, b: i64) -> i64 {
    let r = a % b;
    if r != 0 && (r < 0) != (b < 0) { r + b } else { r }
}

/// Floored quotient of `a` by `b`.
#[inline]
pub const fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && (a < 0) != (b < 0) { q - 1 } else { q }
}

/// Adjusted remainder `modulo(a - 1, b) + 1`, mapping into `1..=b`.
#[inline]
pub const fn amod(a: i64, b: i64) -> i64 {
    modulo(a - 1, b) + 1
}

/// Sums `f(i)` for `i = start, start + 1, ...` for as long as `predicate(i)`
/// holds. The predicate is checked before each term is added.
///
/// The caller is responsible for termination: the predicate must become
/// false eventually, which holds for every use in this crate because each
/// predicate is monotone in `i` over the valid range of dates.
pub fn sum_while<F, P>(start: i64, f: F, predicate: P) -> i64
where
    F: FnMut(i64) -> i64,
    P: FnMut(&i64) -> bool,
{
    (start..).take_while(predicate).map(f).sum()
}

/// Number of consecutive values starting at `start` that satisfy `predicate`.
///
/// This is the search form of [`sum_while`]: starting from an estimate, it
/// counts how far to step forward before the predicate fails.
pub fn count_while<P>(start: i64, predicate: P) -> i64
where
    P: FnMut(&i64) -> bool,
{
    sum_while(start, |_| 1, predicate)
}
