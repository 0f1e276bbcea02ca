//! Modular arithmetic and the number theoretic transform behind multiplication.
//!
//! All arithmetic is modulo [`MOD`] `= 3 * 2^30 + 1` with primitive root [`ROOT`] `= 5`.
//! Since `MOD < 2^32`, products of two residues fit in a `u64`.
//!
//! A limb product can reach `2^64`, far beyond `MOD`, so limbs are not transformed
//! directly. Each limb is split into narrow digits and the digit width is chosen so
//! that no convolution coefficient can reach `MOD` (see [`TransformPlan`]).

use tracing::{debug, instrument};

use crate::big_num_cache::{INVERSE_LENGTHS, UNIT_ROOTS};
use crate::big_num_constants::*;
use crate::error::BigIntegerError;

/// `base^exp mod MOD` by binary exponentiation.
pub fn modpow(mut base: u64, mut exp: u64) -> u64 {
    let mut result = 1;
    base %= MOD;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % MOD;
        }
        base = base * base % MOD;
        exp >>= 1;
    }
    result
}

/// Inverse of `value` modulo `modulus` by the extended Euclidean algorithm,
/// normalized into `[0, modulus)`. `value` and `modulus` must be coprime.
pub fn modinv(value: i64, modulus: i64) -> u64 {
    debug_assert!(modulus > 1);
    let (mut old_r, mut r) = (value.rem_euclid(modulus), modulus);
    let (mut old_s, mut s) = (1_i64, 0_i64);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    debug_assert_eq!(old_r, 1, "{} is not invertible modulo {}", value, modulus);
    old_s.rem_euclid(modulus) as u64
}

/// In-place radix-2 transform of `values` modulo [`MOD`].
///
/// `values.len()` must be a power of two no larger than `2^30` and every value must be
/// below `MOD`. The inverse transform scales by `len^-1` before the bit reversal
/// permutation rather than after the butterflies.
#[instrument(skip_all, level = "trace", fields(len = values.len(), inverse = inverse))]
pub fn ntt(values: &mut [u64], inverse: bool) {
    let n = values.len();
    assert!(n.is_power_of_two(), "transform length {} is not a power of two", n);
    let log_n = n.trailing_zeros();
    assert!(log_n <= MAX_LOG_TRANSFORM, "transform length 2^{} is too large", log_n);
    debug_assert!(values.iter().all(|&v| v < MOD));

    // Powers of the unit root.
    let g = UNIT_ROOTS[log_n as usize];
    let mut w = Vec::with_capacity(n);
    let mut power = 1;
    for _ in 0..n {
        w.push(power);
        power = power * g % MOD;
    }

    if inverse {
        w[1..].reverse();
        let inv = INVERSE_LENGTHS[log_n as usize];
        for value in values.iter_mut() {
            *value = *value * inv % MOD;
        }
    }

    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            values.swap(i, j);
        }
    }

    let mut half = 1;
    while half < n {
        let stride = n / (half << 1);
        for start in (0..n).step_by(half << 1) {
            for k in 0..half {
                let x = values[start + k];
                let z = values[start + half + k] * w[stride * k] % MOD;
                values[start + half + k] = if x < z { x + MOD - z } else { x - z };
                values[start + k] = if x + z < MOD { x + z } else { x + z - MOD };
            }
        }
        half <<= 1;
    }
}

/// Digit width and transform length used to multiply two magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformPlan {
    digit_bits: u32,
    log_len: u32,
}

impl TransformPlan {
    /// Largest operand, in limbs, any plan can handle: 2-bit digits with a
    /// transform of length `2^29` (64 MiB per operand).
    pub const MAX_OPERAND_LIMBS: usize = 1 << 24;

    /// Picks the widest digit for which no convolution coefficient can reach `MOD`.
    pub fn for_operands(lhs_limbs: usize, rhs_limbs: usize) -> Result<Self, BigIntegerError> {
        let longest = lhs_limbs.max(rhs_limbs);
        DIGIT_BITS_CHOICES
            .iter()
            .find_map(|&digit_bits| TransformPlan::with_digit_bits(digit_bits, longest))
            .ok_or(BigIntegerError::CapacityExceeded {
                limbs: longest,
                limit: TransformPlan::MAX_OPERAND_LIMBS,
            })
    }

    /// Plan for operands of at most `longest` limbs split into `digit_bits`-bit digits,
    /// or `None` if the coefficients could overflow `MOD`. The width must be a
    /// power of two below 32; any other width yields `None`.
    pub fn with_digit_bits(digit_bits: u32, longest: usize) -> Option<Self> {
        if !digit_bits.is_power_of_two() || digit_bits >= u32::BITS {
            return None;
        }
        let digits = longest.max(1).checked_mul((u32::BITS / digit_bits) as usize)?;
        let len = digits.checked_mul(2)?.checked_next_power_of_two()?;
        let log_len = len.trailing_zeros();
        if log_len > MAX_LOG_TRANSFORM {
            return None;
        }
        // A coefficient sums at most len / 2 digit products.
        let max_digit = (1_u64 << digit_bits) - 1;
        let bound = (len as u64 / 2)
            .checked_mul(max_digit)?
            .checked_mul(max_digit)?;
        (bound < MOD).then_some(TransformPlan { digit_bits, log_len })
    }

    pub fn digit_bits(&self) -> u32 {
        self.digit_bits
    }

    pub fn transform_len(&self) -> usize {
        1 << self.log_len
    }

    fn digits_per_limb(&self) -> usize {
        (u32::BITS / self.digit_bits) as usize
    }

    /// Limbs to zero padded transform digits, least significant first.
    fn split(&self, limbs: &[u32]) -> Vec<u64> {
        let mask = (1_u32 << self.digit_bits) - 1;
        let mut digits = Vec::with_capacity(self.transform_len());
        for &limb in limbs {
            for j in 0..self.digits_per_limb() as u32 {
                digits.push(((limb >> (j * self.digit_bits)) & mask) as u64);
            }
        }
        digits.resize(self.transform_len(), 0);
        digits
    }

    /// Carries convolution coefficients back into limbs. The result is not trimmed.
    fn join(&self, coefficients: &[u64]) -> Vec<u32> {
        let per_limb = self.digits_per_limb();
        let mask = (1_u64 << self.digit_bits) - 1;
        let mut limbs = vec![0_u32; coefficients.len() / per_limb];
        let mut carry: u64 = 0;
        for (k, &coefficient) in coefficients.iter().enumerate() {
            let acc = carry + coefficient;
            let shift = (k % per_limb) as u32 * self.digit_bits;
            limbs[k / per_limb] |= ((acc & mask) as u32) << shift;
            carry = acc >> self.digit_bits;
        }
        debug_assert_eq!(carry, 0);
        limbs
    }
}

/// Product of two magnitudes, limbs least significant first. Not trimmed.
pub(crate) fn multiply_magnitudes(lhs: &[u32], rhs: &[u32]) -> Result<Vec<u32>, BigIntegerError> {
    let plan = TransformPlan::for_operands(lhs.len(), rhs.len())?;
    Ok(multiply_with_plan(&plan, lhs, rhs))
}

#[instrument(skip_all, level = "trace")]
fn multiply_with_plan(plan: &TransformPlan, lhs: &[u32], rhs: &[u32]) -> Vec<u32> {
    debug!(
        lhs_limbs = lhs.len(),
        rhs_limbs = rhs.len(),
        digit_bits = plan.digit_bits,
        transform_len = plan.transform_len(),
        "multiplying via NTT"
    );
    let mut l = plan.split(lhs);
    let mut r = plan.split(rhs);
    ntt(&mut l, false);
    ntt(&mut r, false);
    for (x, y) in l.iter_mut().zip(r.iter()) {
        *x = *x * *y % MOD;
    }
    // TODO: keep operands in the transformed domain across chained multiplications.
    ntt(&mut l, true);
    plan.join(&l)
}
