use std::cmp::Ordering;

use high_precision::BigInteger;
use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;

/// Arbitrary value of up to six limbs with either sign.
#[derive(Clone, Debug)]
struct Big(BigInteger);

impl Arbitrary for Big {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 6 + 1;
        let limbs = (0..len).map(|_| u32::arbitrary(g)).collect();
        Big(BigInteger::from_limbs(bool::arbitrary(g), limbs))
    }
}

fn zero() -> BigInteger {
    BigInteger::zero()
}

#[quickcheck]
fn prop_decimal_round_trip(negative: bool, digits: Vec<u8>) -> TestResult {
    let digits: String = digits.iter().map(|d| char::from(b'0' + d % 10)).collect();
    if digits.is_empty() {
        return TestResult::discard();
    }
    let text = format!("{}{}", if negative { "-" } else { "" }, digits);
    let value: BigInteger = text.parse().unwrap();

    let canonical = digits.trim_start_matches('0');
    let expected = match (canonical.is_empty(), negative) {
        (true, _) => "0".to_string(),
        (false, true) => format!("-{}", canonical),
        (false, false) => canonical.to_string(),
    };
    TestResult::from_bool(value.to_string() == expected)
}

#[quickcheck]
fn prop_additive_identity(a: Big) -> bool {
    &a.0 + &zero() == a.0
}

#[quickcheck]
fn prop_additive_inverse(a: Big) -> bool {
    let sum = &a.0 + &(-&a.0);
    sum == zero() && !sum.is_negative()
}

#[quickcheck]
fn prop_add_commutative(a: Big, b: Big) -> bool {
    &a.0 + &b.0 == &b.0 + &a.0
}

#[quickcheck]
fn prop_add_associative(a: Big, b: Big, c: Big) -> bool {
    (&a.0 + &b.0) + &c.0 == &a.0 + (&b.0 + &c.0)
}

#[quickcheck]
fn prop_mul_commutative(a: Big, b: Big) -> bool {
    &a.0 * &b.0 == &b.0 * &a.0
}

#[quickcheck]
fn prop_mul_associative(a: Big, b: Big, c: Big) -> bool {
    (&a.0 * &b.0) * &c.0 == &a.0 * (&b.0 * &c.0)
}

#[quickcheck]
fn prop_mul_distributes(a: Big, b: Big, c: Big) -> bool {
    &a.0 * (&b.0 + &c.0) == &a.0 * &b.0 + &a.0 * &c.0
}

#[quickcheck]
fn prop_sub_is_add_negated(a: Big, b: Big) -> bool {
    &a.0 - &b.0 == &a.0 + (-&b.0)
}

#[quickcheck]
fn prop_add_then_sub(a: Big, b: Big) -> bool {
    (&a.0 + &b.0) - &b.0 == a.0
}

#[quickcheck]
fn prop_mul_is_repeated_add(a: Big, k: u8) -> bool {
    let k = k % 40;
    let mut sum = zero();
    for _ in 0..k {
        sum += &a.0;
    }
    &a.0 * BigInteger::from(k) == sum
}

#[quickcheck]
fn prop_not_is_negate_minus_one(a: Big) -> bool {
    !&a.0 == -&a.0 - BigInteger::from(1)
}

#[quickcheck]
fn prop_inc_dec_inverse(a: Big) -> bool {
    let mut x = a.0.clone();
    x.dec().inc();
    let mut y = a.0.clone();
    y.inc().dec();
    x == a.0 && y == a.0
}

#[quickcheck]
fn prop_inc_is_add_one(a: Big) -> bool {
    let mut x = a.0.clone();
    x.inc();
    x == &a.0 + BigInteger::from(1)
}

#[quickcheck]
fn prop_ordering_total(a: Big, b: Big) -> bool {
    let outcomes = [a.0 < b.0, a.0 == b.0, a.0 > b.0];
    outcomes.iter().filter(|&&holds| holds).count() == 1
}

#[quickcheck]
fn prop_ordering_matches_difference_sign(a: Big, b: Big) -> bool {
    let difference = &a.0 - &b.0;
    let expected = match difference.signum() {
        -1 => Ordering::Less,
        0 => Ordering::Equal,
        _ => Ordering::Greater,
    };
    a.0.cmp(&b.0) == expected
}

#[quickcheck]
fn prop_text_round_trip(a: Big) -> bool {
    a.0.to_string().parse::<BigInteger>() == Ok(a.0)
}

#[quickcheck]
fn prop_matches_i128(a: i64, b: i64) -> bool {
    let (x, y) = (BigInteger::from(a), BigInteger::from(b));
    let (a, b) = (a as i128, b as i128);
    (&x + &y).to_string() == (a + b).to_string()
        && (&x - &y).to_string() == (a - b).to_string()
        && (&x * &y).to_string() == (a * b).to_string()
        && x.cmp(&y) == a.cmp(&b)
}

#[quickcheck]
fn prop_bitwise_matches_u64(a: u64, b: u64) -> bool {
    let (x, y) = (BigInteger::from(a), BigInteger::from(b));
    &x & &y == BigInteger::from(a & b)
        && &x | &y == BigInteger::from(a | b)
        && &x ^ &y == BigInteger::from(a ^ b)
}

#[quickcheck]
fn prop_results_are_normalized(a: Big, b: Big) -> bool {
    let results = [
        &a.0 + &b.0,
        &a.0 - &b.0,
        &a.0 * &b.0,
        &a.0 & &b.0,
        &a.0 | &b.0,
        &a.0 ^ &b.0,
        !&a.0,
    ];
    results.iter().all(|r| {
        let limbs = r.limbs();
        let trimmed = limbs.len() == 1 || limbs.last() != Some(&0);
        trimmed && !(r.is_zero() && r.is_negative())
    })
}
