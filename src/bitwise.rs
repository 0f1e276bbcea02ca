//! Bitwise operators over sign and magnitude.
//!
//! This is a simplified model, not infinite-width two's complement: the limb-wise
//! operation is applied to the magnitudes and the sign flags are combined with the
//! same logical operator. For non-negative operands the results coincide with the
//! usual unsigned bitwise operations. `!x` keeps the two's complement identity
//! `!x == -x - 1`.

use std::ops::{BitAndAssign, BitOrAssign, BitXorAssign, Not};

use crate::big_integer::BigInteger;

impl BitAndAssign<&BigInteger> for BigInteger {
    fn bitand_assign(&mut self, rhs: &BigInteger) {
        self.limbs.truncate(rhs.limbs.len());
        self.negative &= rhs.negative;
        for (x, y) in self.limbs.iter_mut().zip(rhs.limbs.iter()) {
            *x &= y;
        }
        self.trim_leading_zeros();
    }
}

impl BitOrAssign<&BigInteger> for BigInteger {
    fn bitor_assign(&mut self, rhs: &BigInteger) {
        if self.limbs.len() < rhs.limbs.len() {
            self.limbs.resize(rhs.limbs.len(), 0);
        }
        self.negative |= rhs.negative;
        for (x, y) in self.limbs.iter_mut().zip(rhs.limbs.iter()) {
            *x |= y;
        }
    }
}

impl BitXorAssign<&BigInteger> for BigInteger {
    fn bitxor_assign(&mut self, rhs: &BigInteger) {
        let common = self.limbs.len().min(rhs.limbs.len());
        if self.limbs.len() == common {
            self.limbs.extend_from_slice(&rhs.limbs[common..]);
        }
        self.negative ^= rhs.negative;
        for (x, y) in self.limbs[..common].iter_mut().zip(rhs.limbs.iter()) {
            *x ^= y;
        }
        self.trim_leading_zeros();
    }
}

impl Not for BigInteger {
    type Output = BigInteger;

    /// `-self - 1`
    fn not(mut self) -> Self::Output {
        self.inc();
        self.negative = !self.negative;
        self.eliminate_negative_zero();
        self
    }
}

impl Not for &BigInteger {
    type Output = BigInteger;

    fn not(self) -> Self::Output {
        !self.clone()
    }
}

forward_binop! {
    BitAnd, bitand, BitAndAssign, bitand_assign;
    BitOr, bitor, BitOrAssign, bitor_assign;
    BitXor, bitxor, BitXorAssign, bitxor_assign;
}
