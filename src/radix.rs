//! Text conversion between decimal digits and base `2^32` limbs.
//!
//! Both directions go through base `10^9` groups and cost `O(log² n)` for an `n` bit
//! value: each of the `O(log n)` passes scans the whole group or limb array.
//! Only radix 10 is implemented; other radixes fail with
//! [`BigIntegerError::UnsupportedRadix`].

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::big_integer::BigInteger;
use crate::big_num_constants::*;
use crate::error::BigIntegerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hexadecimal => "hexadecimal",
        };
        f.write_str(name)
    }
}

fn parse_group(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0, |value, &digit| value * 10 + (digit - b'0') as u32)
}

/// Converts a non-empty run of ASCII decimal digits, most significant first, into
/// limbs. The result may carry leading zero limbs.
pub(crate) fn decimal_to_limbs(digits: &[u8]) -> Vec<u32> {
    debug_assert!(digits.iter().all(u8::is_ascii_digit));
    // Discard leading zeros.
    let start = digits.iter().position(|&d| d != b'0').unwrap_or(digits.len());
    let digits = &digits[start..];
    if digits.is_empty() {
        return vec![0];
    }

    // Base 10^9 groups, most significant first. The leading group takes the
    // digits left over by the full groups.
    let mut first_group_len = digits.len() % DEC_GROUP_DIGITS;
    if first_group_len == 0 {
        first_group_len = DEC_GROUP_DIGITS;
    }
    let mut decimal = Vec::with_capacity(digits.len() / DEC_GROUP_DIGITS + 1);
    decimal.push(parse_group(&digits[..first_group_len]));
    decimal.extend(digits[first_group_len..].chunks(DEC_GROUP_DIGITS).map(parse_group));

    // Each pass divides the groups by 2^32 in place. The head group is always below
    // 2^32, so its quotient is zero and the pass can drop it.
    let mut limbs = Vec::with_capacity(decimal.len());
    let mut head = 0;
    while head + 1 < decimal.len() {
        let mut remainder = decimal[head] as u64;
        head += 1;
        for group in decimal[head..].iter_mut() {
            let value = remainder * DEC_GROUP_BASE + *group as u64;
            *group = (value >> u32::BITS) as u32;
            remainder = value & (BASE - 1);
        }
        limbs.push(remainder as u32);
    }
    limbs.push(decimal[head]);
    limbs
}

/// Decimal digits of a normalized magnitude, no sign.
pub(crate) fn limbs_to_decimal(limbs: &[u32]) -> String {
    if limbs == [0] {
        return String::from("0");
    }

    let mut binary = limbs.to_vec();
    let mut groups: Vec<u32> = Vec::with_capacity(limbs.len() * 32 / 29 + 1);
    while !binary.is_empty() {
        let mut remainder: u64 = 0;
        for limb in binary.iter_mut().rev() {
            let value = (remainder << u32::BITS) | *limb as u64;
            *limb = (value / DEC_GROUP_BASE) as u32;
            remainder = value % DEC_GROUP_BASE;
        }
        groups.push(remainder as u32);
        while binary.last() == Some(&0) {
            binary.pop();
        }
    }

    let mut text = String::with_capacity(groups.len() * DEC_GROUP_DIGITS);
    let mut groups = groups.iter().rev();
    if let Some(first) = groups.next() {
        text.push_str(&first.to_string());
    }
    for &group in groups {
        for j in (1..DEC_GROUP_DIGITS).rev() {
            if group < POW10[j] {
                text.push('0');
            } else {
                break;
            }
        }
        text.push_str(&group.to_string());
    }
    text
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &limbs_to_decimal(&self.limbs))
    }
}

impl BigInteger {
    /// Text in the given radix. Only [`Radix::Decimal`] is supported.
    pub fn to_str_radix(&self, radix: Radix) -> Result<String, BigIntegerError> {
        match radix {
            Radix::Decimal => Ok(self.to_string()),
            other => Err(BigIntegerError::UnsupportedRadix(other)),
        }
    }
}

impl FromStr for BigInteger {
    type Err = BigIntegerError;

    /// Accepts `[+-]?[0-9]+`, ignoring surrounding ASCII whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scanner = Scanner::new(s);
        let mut value = BigInteger::zero();
        scanner.read(&mut value)?;
        if scanner.remaining().trim_end_matches(|c: char| c.is_ascii_whitespace()).is_empty() {
            Ok(value)
        } else {
            Err(BigIntegerError::Malformed)
        }
    }
}

/// Reads whitespace separated integers from text, in the manner of an input stream.
///
/// A failed read leaves the scanner in a failed state: further reads return
/// [`BigIntegerError::StreamFailed`] until [`Scanner::clear`] is called.
///
/// ```
/// use high_precision::{BigInteger, Scanner};
///
/// let mut scanner = Scanner::new("12 -34 x");
/// let mut value = BigInteger::zero();
/// scanner.read(&mut value).unwrap();
/// assert_eq!(value, BigInteger::from(12));
/// scanner.read(&mut value).unwrap();
/// assert_eq!(value, BigInteger::from(-34));
/// assert!(scanner.read(&mut value).is_err());
/// assert!(scanner.is_failed());
/// assert_eq!(value, BigInteger::zero());
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    radix: Radix,
    failed: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Scanner::with_radix(input, Radix::Decimal)
    }

    pub fn with_radix(input: &'a str, radix: Radix) -> Self {
        Scanner { input, pos: 0, radix, failed: false }
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    pub fn set_radix(&mut self, radix: Radix) -> &mut Self {
        self.radix = radix;
        self
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Resets the failed state. The cursor stays where the failed read left it.
    pub fn clear(&mut self) {
        self.failed = false;
    }

    /// Input not consumed yet.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// Reads the next integer into `value`.
    ///
    /// Without a digit after the optional sign, `value` becomes zero, the scanner
    /// fails and [`BigIntegerError::Malformed`] is returned. A non-decimal radix
    /// fails with [`BigIntegerError::UnsupportedRadix`] and leaves `value` and the
    /// cursor untouched.
    pub fn read(&mut self, value: &mut BigInteger) -> Result<(), BigIntegerError> {
        if self.failed {
            return Err(BigIntegerError::StreamFailed);
        }
        if self.radix != Radix::Decimal {
            self.failed = true;
            trace!(radix = %self.radix, "unsupported radix");
            return Err(BigIntegerError::UnsupportedRadix(self.radix));
        }

        self.skip_whitespace();
        let bytes = self.input.as_bytes();
        let mut negative = false;
        if let Some(&sign @ (b'+' | b'-')) = bytes.get(self.pos) {
            negative = sign == b'-';
            self.pos += 1;
        }

        let start = self.pos;
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        if start == self.pos {
            *value = BigInteger::zero();
            self.failed = true;
            trace!(position = start, "no decimal digit");
            return Err(BigIntegerError::Malformed);
        }

        *value = BigInteger::from_limbs(negative, decimal_to_limbs(&bytes[start..self.pos]));
        Ok(())
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<BigInteger, BigIntegerError>;

    /// Yields integers until the input is exhausted; a failed read is yielded once
    /// and ends the iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining().trim_start().is_empty() {
            return None;
        }
        let mut value = BigInteger::zero();
        Some(self.read(&mut value).map(|()| value))
    }
}
