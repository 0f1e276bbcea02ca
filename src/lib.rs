//! High Precision \
//! This crate provides [`BigInteger`], an arbitrary-precision signed integer with:
//! - addition, subtraction, increment and decrement with carry/borrow propagation over base `2^32` limbs;
//! - `O(n log n)` multiplication through a number theoretic transform modulo `3 * 2^30 + 1` ([`ntt`]);
//! - bitwise `& | ^ !` over a simplified sign and magnitude model;
//! - decimal parsing and printing ([`Scanner`], `FromStr`, `Display`).
//!
//! Division, remainder and non-decimal text conversion are not implemented; they fail
//! with [`BigIntegerError::Unsupported`] and [`BigIntegerError::UnsupportedRadix`].

#[macro_use]
mod big_integer;
mod big_num_cache;
mod big_num_constants;
mod bitwise;
mod error;
pub mod ntt;
mod radix;

pub use big_integer::BigInteger;
pub use big_num_constants::{BASE, MOD, ROOT};
pub use error::{BigIntegerError, Operation};
pub use radix::{Radix, Scanner};
