use lazy_static::*;

use crate::big_num_constants::*;
use crate::ntt::{modinv, modpow};

const TABLE_LEN: usize = MAX_LOG_TRANSFORM as usize + 1;

lazy_static! {
    /// `UNIT_ROOTS[k]` is a primitive `2^k`-th root of unity modulo `MOD`.
    pub static ref UNIT_ROOTS: [u64; TABLE_LEN] = {
        let mut roots = [0_u64; TABLE_LEN];
        for (log_n, root) in roots.iter_mut().enumerate() {
            *root = modpow(ROOT, (MOD - 1) >> log_n);
        }
        roots
    };
    /// `INVERSE_LENGTHS[k]` is `2^-k mod MOD`.
    pub static ref INVERSE_LENGTHS: [u64; TABLE_LEN] = {
        let mut inverses = [0_u64; TABLE_LEN];
        for (log_n, inverse) in inverses.iter_mut().enumerate() {
            *inverse = modinv(1 << log_n, MOD as i64);
        }
        inverses
    };
}
