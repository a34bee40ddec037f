//! Conversions between the Q96 sqrt-price domain and decimal prices.
//!
//! Two price representations exist side by side and must not be mixed:
//! the pool's `sqrtPriceX96` (a `U256`, square root scaled by `2^96`) and
//! the decimal price `1.0001^tick` used by the reserve formulas.

use crate::error::MathError;
use crate::math::conversion::{Q96_F64, f64_to_u256, q96_to_f64};
use alloy_primitives::U256;

/// Base of the geometric tick ladder.
pub const TICK_BASE: f64 = 1.0001;

/// Raw pool price (token1 units per token0 unit) of a Q96 sqrt price:
/// `(sqrt_price_x96 / 2^96)^2`.
#[must_use]
pub fn sqrt_price_to_price(sqrt_price_x96: U256) -> f64 {
    let sqrt_price = q96_to_f64(sqrt_price_x96);
    sqrt_price * sqrt_price
}

/// Q96 sqrt price of a raw pool price, truncated: `sqrt(price) * 2^96`.
pub fn price_to_sqrt_price_x96(price: f64) -> Result<U256, MathError> {
    if !price.is_finite() {
        return Err(MathError::NonFinite);
    }
    if price < 0.0 {
        return Err(MathError::Negative);
    }
    f64_to_u256(price.sqrt() * Q96_F64)
}

/// Decimal price at a tick, `1.0001^tick`.
#[must_use]
pub fn tick_to_price(tick: i32) -> f64 {
    TICK_BASE.powf(tick as f64)
}

/// Factor turning a raw token1-per-token0 price into whole units of
/// token1 per whole unit of token0: `10^(decimals0 - decimals1)`.
#[must_use]
pub fn decimal_scale(decimals0: u8, decimals1: u8) -> f64 {
    10f64.powi(decimals0 as i32 - decimals1 as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::tick_math::tick_to_sqrt_price_x96;
    use approx::assert_relative_eq;

    #[test]
    fn sqrt_price_of_one() {
        assert_eq!(sqrt_price_to_price(U256::ONE << 96), 1.0);
        assert_eq!(sqrt_price_to_price(U256::ONE << 97), 4.0);
        assert_eq!(sqrt_price_to_price(U256::ZERO), 0.0);
    }

    #[test]
    fn tick_to_price_known_values() {
        assert_eq!(tick_to_price(0), 1.0);
        assert_relative_eq!(tick_to_price(1), 1.0001, max_relative = 1e-15);
        assert_relative_eq!(tick_to_price(-1), 1.0 / 1.0001, max_relative = 1e-15);
        assert_relative_eq!(tick_to_price(195543), 310_384_481.598_685_6, max_relative = 1e-9);
    }

    #[test]
    fn sqrt_price_round_trips_through_ticks() {
        for tick in [
            -200000, -150000, -100000, -46055, -10000, -60, -1, 0, 1, 10, 60, 200, 10000,
            46054, 100000, 150000, 195543, 200000,
        ] {
            let sqrt_price = tick_to_sqrt_price_x96(tick).unwrap();
            assert_relative_eq!(
                sqrt_price_to_price(sqrt_price),
                tick_to_price(tick),
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn price_to_sqrt_price_inverts_sqrt_price_to_price() {
        for price in [1e-12, 0.5, 1.0, 3211.84, 311_348_012.354, 1e20] {
            let sqrt_price = price_to_sqrt_price_x96(price).unwrap();
            assert_relative_eq!(sqrt_price_to_price(sqrt_price), price, max_relative = 1e-12);
        }
    }

    #[test]
    fn price_to_sqrt_price_rejects_invalid_prices() {
        assert_eq!(price_to_sqrt_price_x96(-1.0), Err(MathError::Negative));
        assert_eq!(price_to_sqrt_price_x96(f64::NAN), Err(MathError::NonFinite));
        assert_eq!(price_to_sqrt_price_x96(0.0).unwrap(), U256::ZERO);
    }

    #[test]
    fn decimal_scale_usdc_weth() {
        assert_relative_eq!(decimal_scale(6, 18), 1e-12, max_relative = 1e-15);
        assert_relative_eq!(decimal_scale(18, 6), 1e12, max_relative = 1e-15);
        assert_eq!(decimal_scale(18, 18), 1.0);
    }
}
