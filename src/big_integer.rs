//! # BigInteger
//! Arbitrary-precision signed integers stored as a sign flag plus base `2^32` limbs,
//! least significant limb first.
//!
//! Every operation leaves the value normalized: no most significant zero limbs (zero
//! itself is the single limb `0`) and no negative zero. Equality and ordering rely on it.
//!
//! A `BigInteger` has no interior mutability and no locking. Mutation needs `&mut`,
//! so exclusive access while mutating is checked by the borrow checker; sharing
//! immutable values across threads is fine.
//!
//! # Example
//! ```
//! use high_precision::BigInteger;
//!
//! let a: BigInteger = "10000000000000".parse().unwrap();
//! let b = BigInteger::from(900000000000_i64);
//! assert_eq!((&a + &b).to_string(), "10900000000000");
//! assert_eq!((&a - &b).to_string(), "9100000000000");
//! assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
//! ```

use std::cmp::Ordering;
use std::ops::{AddAssign, MulAssign, Neg, SubAssign};

use crate::error::{BigIntegerError, Operation};
use crate::ntt;

/// Implements the owned and borrowed binary forms of an operator on top of its
/// `OpAssign<&BigInteger>` implementation.
macro_rules! forward_binop {
    ($($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident);* $(;)?) => {
    $(
    impl std::ops::$imp_assign<BigInteger> for BigInteger {
        fn $method_assign(&mut self, rhs: BigInteger) {
            std::ops::$imp_assign::$method_assign(self, &rhs);
        }
    }

    impl std::ops::$imp<&BigInteger> for BigInteger {
        type Output = BigInteger;

        fn $method(mut self, rhs: &BigInteger) -> Self::Output {
            std::ops::$imp_assign::$method_assign(&mut self, rhs);
            self
        }
    }

    impl std::ops::$imp<BigInteger> for BigInteger {
        type Output = BigInteger;

        fn $method(mut self, rhs: BigInteger) -> Self::Output {
            std::ops::$imp_assign::$method_assign(&mut self, &rhs);
            self
        }
    }

    impl std::ops::$imp<&BigInteger> for &BigInteger {
        type Output = BigInteger;

        fn $method(self, rhs: &BigInteger) -> Self::Output {
            let mut result = self.clone();
            std::ops::$imp_assign::$method_assign(&mut result, rhs);
            result
        }
    }

    impl std::ops::$imp<BigInteger> for &BigInteger {
        type Output = BigInteger;

        fn $method(self, rhs: BigInteger) -> Self::Output {
            let mut result = self.clone();
            std::ops::$imp_assign::$method_assign(&mut result, &rhs);
            result
        }
    }
    )*
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    pub(crate) limbs: Vec<u32>,
    pub(crate) negative: bool,
}

// Normalization and accessors
impl BigInteger {
    pub fn zero() -> Self {
        BigInteger { limbs: vec![0], negative: false }
    }

    /// Builds a value from limbs given least significant first. Leading zero limbs
    /// are dropped and a zero magnitude is never negative.
    pub fn from_limbs(negative: bool, mut limbs: Vec<u32>) -> Self {
        if limbs.is_empty() {
            limbs.push(0);
        }
        let mut value = BigInteger { limbs, negative };
        value.trim_leading_zeros();
        value
    }

    pub(crate) fn trim_leading_zeros(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
        self.eliminate_negative_zero();
    }

    pub(crate) fn eliminate_negative_zero(&mut self) {
        if self.is_zero() {
            self.negative = false;
        }
    }

    pub(crate) fn is_normalized(&self) -> bool {
        match self.limbs.last() {
            None => false,
            Some(&0) => self.limbs.len() == 1 && !self.negative,
            Some(_) => true,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn signum(&self) -> i8 {
        if self.negative {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// Magnitude limbs, least significant first.
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    pub fn abs(&self) -> BigInteger {
        BigInteger { limbs: self.limbs.clone(), negative: false }
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        BigInteger::zero()
    }
}

// Construction from primitive integers
impl BigInteger {
    fn value_of(magnitude: u64, negative: bool) -> BigInteger {
        let low = magnitude as u32;
        let high = (magnitude >> u32::BITS) as u32;
        let limbs = if high == 0 { vec![low] } else { vec![low, high] };
        let mut value = BigInteger { limbs, negative };
        value.eliminate_negative_zero();
        value
    }
}

impl From<i64> for BigInteger {
    fn from(val: i64) -> Self {
        BigInteger::value_of(val.unsigned_abs(), val < 0)
    }
}

impl From<u64> for BigInteger {
    fn from(val: u64) -> Self {
        BigInteger::value_of(val, false)
    }
}

macro_rules! impl_signed_to_big_integer {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInteger {
        fn from(val: $i) -> Self {
            BigInteger::from(val as i64)
        }
    }
    )*
    };
}

macro_rules! impl_unsigned_to_big_integer {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInteger {
        fn from(val: $u) -> Self {
            BigInteger::from(val as u64)
        }
    }
    )*
    };
}

impl_signed_to_big_integer!(i8, i16, i32, isize);
impl_unsigned_to_big_integer!(u8, u16, u32, usize);

// Comparison
fn compare_magnitude(lhs: &[u32], rhs: &[u32]) -> Ordering {
    lhs.len()
        .cmp(&rhs.len())
        .then_with(|| lhs.iter().rev().cmp(rhs.iter().rev()))
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => compare_magnitude(&self.limbs, &other.limbs),
            (true, true) => compare_magnitude(&self.limbs, &other.limbs).reverse(),
        }
    }
}

// Magnitude helpers shared by the carry/borrow operators.

fn increment_magnitude(limbs: &mut Vec<u32>) {
    for limb in limbs.iter_mut() {
        let (sum, carry) = limb.overflowing_add(1);
        *limb = sum;
        if !carry {
            return;
        }
    }
    limbs.push(1);
}

/// The magnitude must be nonzero.
fn decrement_magnitude(limbs: &mut [u32]) {
    debug_assert!(limbs.iter().any(|&limb| limb != 0));
    for limb in limbs.iter_mut() {
        let (difference, borrow) = limb.overflowing_sub(1);
        *limb = difference;
        if !borrow {
            return;
        }
    }
}

/// `lhs += rhs` on magnitudes.
fn add_magnitude(lhs: &mut Vec<u32>, rhs: &[u32]) {
    if lhs.len() < rhs.len() {
        lhs.resize(rhs.len(), 0);
    }
    let mut carry: u64 = 0;
    for (index, x) in lhs.iter_mut().enumerate() {
        let y = match rhs.get(index) {
            Some(&y) => y,
            None if carry == 0 => break,
            None => 0,
        };
        let sum = *x as u64 + y as u64 + carry;
        *x = sum as u32;
        carry = sum >> u32::BITS;
    }
    if carry != 0 {
        lhs.push(carry as u32);
    }
}

/// `lhs -= rhs` on magnitudes, `lhs >= rhs`.
fn sub_magnitude(lhs: &mut [u32], rhs: &[u32]) {
    let mut difference: i64 = 0;
    for (index, x) in lhs.iter_mut().enumerate() {
        let y = match rhs.get(index) {
            Some(&y) => y,
            None if difference == 0 => break,
            None => 0,
        };
        difference = *x as i64 - y as i64 + difference;
        *x = difference as u32;
        difference >>= u32::BITS;
    }
    debug_assert_eq!(difference, 0);
}

/// `lhs = rhs - lhs` on magnitudes, `rhs >= lhs`.
fn sub_magnitude_from(lhs: &mut Vec<u32>, rhs: &[u32]) {
    debug_assert!(lhs.len() <= rhs.len());
    lhs.resize(rhs.len(), 0);
    let mut difference: i64 = 0;
    for (x, &y) in lhs.iter_mut().zip(rhs) {
        difference = y as i64 - *x as i64 + difference;
        *x = difference as u32;
        difference >>= u32::BITS;
    }
    debug_assert_eq!(difference, 0);
}

// Increment and decrement
impl BigInteger {
    /// `++self`
    pub fn inc(&mut self) -> &mut Self {
        if self.negative {
            decrement_magnitude(&mut self.limbs);
            self.trim_leading_zeros();
        } else {
            increment_magnitude(&mut self.limbs);
        }
        self
    }

    /// `--self`
    pub fn dec(&mut self) -> &mut Self {
        if self.negative {
            increment_magnitude(&mut self.limbs);
        } else if self.is_zero() {
            self.limbs[0] = 1;
            self.negative = true;
        } else {
            decrement_magnitude(&mut self.limbs);
            self.trim_leading_zeros();
        }
        self
    }

    /// `self++`: increments and returns the previous value.
    pub fn post_inc(&mut self) -> BigInteger {
        let previous = self.clone();
        self.inc();
        previous
    }

    /// `self--`: decrements and returns the previous value.
    pub fn post_dec(&mut self) -> BigInteger {
        let previous = self.clone();
        self.dec();
        previous
    }
}

// Addition and subtraction
impl AddAssign<&BigInteger> for BigInteger {
    fn add_assign(&mut self, rhs: &BigInteger) {
        if self.negative == rhs.negative {
            add_magnitude(&mut self.limbs, &rhs.limbs);
        } else {
            // Signs agree after the flip, so `sub_assign` does not redirect back here.
            self.negative = !self.negative;
            *self -= rhs;
            self.negative = !self.negative;
            self.eliminate_negative_zero();
        }
        debug_assert!(self.is_normalized());
    }
}

impl SubAssign<&BigInteger> for BigInteger {
    fn sub_assign(&mut self, rhs: &BigInteger) {
        if self.negative == rhs.negative {
            match compare_magnitude(&self.limbs, &rhs.limbs) {
                Ordering::Less => {
                    sub_magnitude_from(&mut self.limbs, &rhs.limbs);
                    self.negative = !self.negative;
                }
                Ordering::Equal | Ordering::Greater => {
                    sub_magnitude(&mut self.limbs, &rhs.limbs);
                }
            }
            self.trim_leading_zeros();
        } else {
            // Signs agree after the flip, so `add_assign` does not redirect back here.
            self.negative = !self.negative;
            *self += rhs;
            self.negative = !self.negative;
        }
        debug_assert!(self.is_normalized());
    }
}

// Negation
impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(mut self) -> Self::Output {
        self.negative = !self.negative;
        self.eliminate_negative_zero();
        self
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// Multiplication, division and remainder
impl BigInteger {
    /// Multiplies through the number theoretic transform. Fails only when the
    /// operands exceed the transform capacity (see [`ntt::TransformPlan`]).
    pub fn try_mul(&self, rhs: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        let limbs = ntt::multiply_magnitudes(&self.limbs, &rhs.limbs)?;
        Ok(BigInteger::from_limbs(self.negative != rhs.negative, limbs))
    }

    /// Division is not implemented.
    pub fn try_div(&self, _rhs: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        Err(BigIntegerError::Unsupported(Operation::Division))
    }

    /// Remainder is not implemented.
    pub fn try_rem(&self, _rhs: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        Err(BigIntegerError::Unsupported(Operation::Remainder))
    }
}

impl MulAssign<&BigInteger> for BigInteger {
    /// # Panics
    /// When the operands exceed the transform capacity.
    fn mul_assign(&mut self, rhs: &BigInteger) {
        match self.try_mul(rhs) {
            Ok(product) => *self = product,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_binop! {
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(val: i64) -> BigInteger {
        BigInteger::from(val)
    }

    #[test]
    fn test_from() {
        assert_eq!(big(0).limbs(), &[0]);
        assert!(!big(0).is_negative());
        assert_eq!(big(-7).limbs(), &[7]);
        assert!(big(-7).is_negative());
        assert_eq!(big(1 << 32).limbs(), &[0, 1]);
        assert_eq!(big(i64::MIN).limbs(), &[0, 0x8000_0000]);
        assert_eq!(big(i64::MAX).limbs(), &[u32::MAX, 0x7fff_ffff]);
        assert_eq!(BigInteger::from(u64::MAX).limbs(), &[u32::MAX, u32::MAX]);
        assert_eq!(BigInteger::from(-3_i8), big(-3));
        assert_eq!(BigInteger::from(40000_u16), big(40000));
        assert_eq!(BigInteger::default(), BigInteger::zero());
    }

    #[test]
    fn test_from_limbs_normalizes() {
        let value = BigInteger::from_limbs(true, vec![5, 0, 0]);
        assert_eq!(value.limbs(), &[5]);
        assert!(value.is_negative());

        let value = BigInteger::from_limbs(true, vec![0, 0]);
        assert_eq!(value, BigInteger::zero());

        assert_eq!(BigInteger::from_limbs(false, vec![]), BigInteger::zero());
    }

    #[test]
    fn test_signum_and_abs() {
        assert_eq!(big(-9).signum(), -1);
        assert_eq!(big(0).signum(), 0);
        assert_eq!(big(9).signum(), 1);
        assert_eq!(big(-9).abs(), big(9));
    }

    #[test]
    fn test_ordering() {
        let values = [i64::MIN, -(1 << 40), -(1 << 32), -5, -1, 0, 1, 5, 1 << 32, 1 << 40, i64::MAX];
        for &a in values.iter() {
            for &b in values.iter() {
                assert_eq!(big(a).cmp(&big(b)), a.cmp(&b), "{} <=> {}", a, b);
                assert_eq!(big(a) == big(b), a == b);
            }
        }
    }

    #[test]
    fn test_inc_carries_into_new_limb() {
        let mut value = BigInteger::from(u32::MAX);
        value.inc();
        assert_eq!(value.limbs(), &[0, 1]);

        let mut value = BigInteger::from(u64::MAX);
        value.inc();
        assert_eq!(value.limbs(), &[0, 0, 1]);
    }

    #[test]
    fn test_dec_borrows_and_trims() {
        let mut value = big(1 << 32);
        value.dec();
        assert_eq!(value.limbs(), &[u32::MAX]);

        let mut value = big(1);
        value.dec();
        assert_eq!(value, BigInteger::zero());
    }

    #[test]
    fn test_inc_dec_cross_zero() {
        let mut value = big(0);
        value.dec();
        assert_eq!(value, big(-1));
        value.inc();
        assert_eq!(value, big(0));
        assert!(!value.is_negative());
        value.inc();
        assert_eq!(value, big(1));

        let mut value = big(-(1 << 32));
        value.inc();
        assert_eq!(value, big(-(1 << 32) + 1));
        let mut value = big(-(1 << 32) + 1);
        value.dec();
        assert_eq!(value, big(-(1 << 32)));
    }

    #[test]
    fn test_post_inc_dec() {
        let mut value = big(41);
        assert_eq!(value.post_inc(), big(41));
        assert_eq!(value, big(42));
        assert_eq!(value.post_dec(), big(42));
        assert_eq!(value, big(41));
    }

    #[test]
    fn test_add_sub_every_sign_combination() {
        let values = [
            0, 1, -1, 7, -7, 1 << 32, -(1 << 32), (1 << 32) - 1, -((1 << 32) - 1),
            1 << 40, -(1 << 40), i64::MAX, i64::MIN + 1,
        ];
        for &a in values.iter() {
            for &b in values.iter() {
                let sum = big(a) + big(b);
                let difference = big(a) - big(b);
                assert_eq!(sum.to_string(), (a as i128 + b as i128).to_string(), "{} + {}", a, b);
                assert_eq!(difference.to_string(), (a as i128 - b as i128).to_string(), "{} - {}", a, b);
                assert!(sum.is_normalized());
                assert!(difference.is_normalized());
            }
        }
    }

    #[test]
    fn test_add_carries_through_limbs() {
        let mut value = BigInteger::from_limbs(false, vec![u32::MAX, u32::MAX, u32::MAX]);
        value += &big(1);
        assert_eq!(value.limbs(), &[0, 0, 0, 1]);
        value -= &big(1);
        assert_eq!(value.limbs(), &[u32::MAX, u32::MAX, u32::MAX]);
    }

    #[test]
    fn test_equal_magnitudes_cancel_to_positive_zero() {
        let a = BigInteger::from_limbs(true, vec![1, 2, 3]);
        let b = BigInteger::from_limbs(false, vec![1, 2, 3]);
        let sum = &a + &b;
        assert_eq!(sum, BigInteger::zero());
        assert!(!sum.is_negative());
        let difference = &a - &a;
        assert_eq!(difference, BigInteger::zero());
        assert!(!difference.is_negative());
    }

    #[test]
    fn test_neg() {
        assert_eq!(-big(5), big(-5));
        assert_eq!(-&big(-5), big(5));
        assert!(!(-big(0)).is_negative());
    }

    #[test]
    fn test_mul_signs() {
        assert_eq!(big(-3) * big(4), big(-12));
        assert_eq!(big(-3) * big(-4), big(12));
        assert_eq!(big(3) * big(-4), big(-12));
        let zero = big(-3) * big(0);
        assert_eq!(zero, BigInteger::zero());
        assert!(!zero.is_negative());
    }

    #[test]
    fn test_mul_assign_forms() {
        let mut value = big(1 << 32);
        value *= big(2);
        assert_eq!(value, big(1 << 33));
        value *= &big(-1);
        assert_eq!(value, big(-(1 << 33)));
        assert_eq!(&value * &value, big(1 << 33) * big(1 << 33));
    }

    #[test]
    fn test_division_is_unsupported() {
        assert_eq!(
            big(10).try_div(&big(2)),
            Err(BigIntegerError::Unsupported(Operation::Division))
        );
        assert_eq!(
            big(10).try_rem(&big(3)),
            Err(BigIntegerError::Unsupported(Operation::Remainder))
        );
    }

    fn over_capacity() -> BigInteger {
        BigInteger::from_limbs(true, vec![1; ntt::TransformPlan::MAX_OPERAND_LIMBS + 1])
    }

    #[test]
    fn test_try_mul_capacity_exceeded() {
        let value = over_capacity();
        let expected = Err(BigIntegerError::CapacityExceeded {
            limbs: ntt::TransformPlan::MAX_OPERAND_LIMBS + 1,
            limit: ntt::TransformPlan::MAX_OPERAND_LIMBS,
        });
        assert_eq!(value.try_mul(&big(3)), expected);
        assert_eq!(big(3).try_mul(&value), expected);
        assert_eq!(value.limbs().len(), ntt::TransformPlan::MAX_OPERAND_LIMBS + 1);
    }

    #[test]
    #[should_panic(expected = "limit is 16777216")]
    fn test_mul_assign_panics_over_capacity() {
        let mut value = over_capacity();
        value *= big(3);
    }
}
