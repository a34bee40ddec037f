//! Conversions between pool-native integers and `f64`.
//!
//! Sqrt prices and amounts live in `U256`; the price formulas are evaluated
//! in `f64`. Both directions go through the raw limbs / IEEE-754 bits so no
//! intermediate value is truncated to 64 or 128 bits on the way.

use crate::error::MathError;
use alloy_primitives::U256;

const TWO_POW_64: f64 = 18446744073709551616f64;
const TWO_POW_128: f64 = TWO_POW_64 * TWO_POW_64;
const TWO_POW_192: f64 = TWO_POW_128 * TWO_POW_64;

/// `2^96` as a float, the Q96 scaling factor.
pub const Q96_F64: f64 = 79228162514264337593543950336f64;

const MANTISSA_BITS: u32 = 52;
const EXPONENT_BIAS: i32 = 1075;

/// Closest `f64` to a `U256`. Values above `2^1024` cannot occur here.
#[must_use]
pub fn u256_to_f64(x: U256) -> f64 {
    let [l0, l1, l2, l3] = x.into_limbs();
    l0 as f64 + l1 as f64 * TWO_POW_64 + l2 as f64 * TWO_POW_128 + l3 as f64 * TWO_POW_192
}

/// Interprets a Q64.96 value as a plain float, i.e. `x / 2^96`.
///
/// Dividing by a power of two is exact, so this is as precise as
/// [`u256_to_f64`].
#[must_use]
pub fn q96_to_f64(x: U256) -> f64 {
    u256_to_f64(x) / Q96_F64
}

/// Truncates a non-negative float to a `U256`.
///
/// Rejects NaN, infinities and negative values instead of saturating.
pub fn f64_to_u256(value: f64) -> Result<U256, MathError> {
    if !value.is_finite() {
        return Err(MathError::NonFinite);
    }
    if value < 0.0 {
        return Err(MathError::Negative);
    }

    let value = value.trunc();
    if value < 1.0 {
        return Ok(U256::ZERO);
    }

    let bits = value.to_bits();
    let exponent = ((bits >> MANTISSA_BITS) & 0x7ff) as i32 - EXPONENT_BIAS;
    let mantissa = (bits & ((1u64 << MANTISSA_BITS) - 1)) | (1u64 << MANTISSA_BITS);

    if exponent >= 0 {
        // the 53-bit mantissa must still fit once shifted
        if exponent > 256 - 53 {
            return Err(MathError::Overflow);
        }
        Ok(U256::from(mantissa) << exponent as usize)
    } else {
        Ok(U256::from(mantissa) >> exponent.unsigned_abs() as usize)
    }
}

/// Difference `a - b` as a signed float, computed exactly in integers
/// before the conversion so two nearby Q96 prices do not cancel.
#[must_use]
pub fn signed_difference_f64(a: U256, b: U256) -> f64 {
    if a >= b {
        u256_to_f64(a - b)
    } else {
        -u256_to_f64(b - a)
    }
}
