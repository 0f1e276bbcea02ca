/// Radix of the limb representation.
pub const BASE: u64 = 1 << u32::BITS;

/// Prime modulus of the number theoretic transform, `3 * 2^30 + 1`.
pub const MOD: u64 = (3 << 30) + 1;

/// Primitive root of `MOD`.
pub const ROOT: u64 = 5;

/// `MOD - 1 = 3 * 2^30`, so roots of unity exist for every length up to `2^30`.
pub const MAX_LOG_TRANSFORM: u32 = 30;

/// Candidate widths (in bits) of the digits fed into the transform, widest first.
/// Each width divides 32 so a limb splits into a whole number of digits.
pub const DIGIT_BITS_CHOICES: [u32; 3] = [8, 4, 2];

/// Decimal digits per base-10^9 group.
pub const DEC_GROUP_DIGITS: usize = 9;

pub const DEC_GROUP_BASE: u64 = 1_000_000_000;

pub const POW10: [u32; DEC_GROUP_DIGITS + 1] = [
    1, 10, 100, 1_000, 10_000, 100_000,
    1_000_000, 10_000_000, 100_000_000, 1_000_000_000,
];
