//! Reserves available inside the active tick range.
//!
//! With liquidity `L` constant across `[pa, pb]` and the current sqrt price
//! `p` inside it, the pool holds
//!
//! ```text
//! x = L * (sqrt(pb) - p) / (p * sqrt(pb))    token0, sold as price rises to pb
//! y = L * (p - sqrt(pa))                     token1, sold as price falls to pa
//! ```
//!
//! `p` is the *normalized* sqrt price (`sqrtPriceX96 / 2^96`) while `pa`
//! and `pb` are decimal tick prices (`1.0001^tick`, not square-rooted).

use crate::Q96;
use crate::error::{Error, MathError, StateError};
use crate::math::math_helpers::mul_div;
use crate::math::sqrt_price_math::{get_amount_0_delta, get_amount_1_delta};
use alloy_primitives::U256;

/// Token0 reserve between sqrt price `p` and the range's upper price.
///
/// Returns `0.0` for a degenerate range (`p` or `upper_bound_price` not
/// positive) and when `p` is already at or above the upper bound.
#[must_use]
pub fn reserve_a(sqrt_price: f64, upper_bound_price: f64, liquidity: u128) -> f64 {
    if !(sqrt_price > 0.0 && upper_bound_price > 0.0) {
        return 0.0;
    }
    let sqrt_upper = upper_bound_price.sqrt();
    let amount = liquidity as f64 * ((sqrt_upper - sqrt_price) / (sqrt_price * sqrt_upper));
    if amount.is_finite() { amount.max(0.0) } else { 0.0 }
}

/// Token1 reserve between the range's lower price and sqrt price `p`.
///
/// Returns `0.0` when `p` is at or below the lower bound.
#[must_use]
pub fn reserve_b(sqrt_price: f64, lower_bound_price: f64, liquidity: u128) -> f64 {
    if !(sqrt_price >= 0.0 && lower_bound_price >= 0.0) {
        return 0.0;
    }
    let amount = liquidity as f64 * (sqrt_price - lower_bound_price.sqrt());
    if amount.is_finite() { amount.max(0.0) } else { 0.0 }
}

/// Integer counterpart of [`reserve_a`] working on Q96 sqrt prices,
/// rounded down.
pub fn exact_reserve_a(
    sqrt_price_x96: U256,
    upper_sqrt_price_x96: U256,
    liquidity: u128,
) -> Result<U256, Error> {
    if sqrt_price_x96.is_zero() || sqrt_price_x96 >= upper_sqrt_price_x96 {
        return Ok(U256::ZERO);
    }
    get_amount_0_delta(sqrt_price_x96, upper_sqrt_price_x96, liquidity)
}

/// Integer counterpart of [`reserve_b`] working on Q96 sqrt prices,
/// rounded down.
pub fn exact_reserve_b(
    sqrt_price_x96: U256,
    lower_sqrt_price_x96: U256,
    liquidity: u128,
) -> Result<U256, Error> {
    if sqrt_price_x96 <= lower_sqrt_price_x96 {
        return Ok(U256::ZERO);
    }
    get_amount_1_delta(lower_sqrt_price_x96, sqrt_price_x96, liquidity)
}

fn sorted(sqrt_ratio_a_x96: U256, sqrt_ratio_b_x96: U256) -> (U256, U256) {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    } else {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96)
    }
}

fn to_liquidity(liquidity: U256) -> Result<u128, Error> {
    Ok(u128::try_from(liquidity).map_err(|_| MathError::Overflow)?)
}

/// Liquidity that `amount0` of token0 provides across `[a, b]`, rounded
/// down: `amount0 * (a * b / 2^96) / (b - a)`.
///
/// The bounds may be given in either order.
pub fn get_liquidity_for_amount_0(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    amount0: U256,
) -> Result<u128, Error> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = sorted(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    if sqrt_ratio_a_x96.is_zero() {
        return Err(StateError::SqrtRatioIsZero.into());
    }

    let intermediate = mul_div(sqrt_ratio_a_x96, sqrt_ratio_b_x96, Q96)?;
    to_liquidity(mul_div(
        amount0,
        intermediate,
        sqrt_ratio_b_x96 - sqrt_ratio_a_x96,
    )?)
}

/// Liquidity that `amount1` of token1 provides across `[a, b]`, rounded
/// down: `amount1 * 2^96 / (b - a)`.
pub fn get_liquidity_for_amount_1(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    amount1: U256,
) -> Result<u128, Error> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = sorted(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    to_liquidity(mul_div(amount1, Q96, sqrt_ratio_b_x96 - sqrt_ratio_a_x96)?)
}

/// Largest liquidity both amounts can back at `sqrt_price_x96` inside
/// `[a, b]`.
///
/// Below the range only token0 counts, above it only token1; inside it
/// the smaller of the two sides wins.
pub fn get_liquidity_for_amounts(
    sqrt_price_x96: U256,
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    amount0: U256,
    amount1: U256,
) -> Result<u128, Error> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = sorted(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if sqrt_price_x96 <= sqrt_ratio_a_x96 {
        get_liquidity_for_amount_0(sqrt_ratio_a_x96, sqrt_ratio_b_x96, amount0)
    } else if sqrt_price_x96 < sqrt_ratio_b_x96 {
        let liquidity0 = get_liquidity_for_amount_0(sqrt_price_x96, sqrt_ratio_b_x96, amount0)?;
        let liquidity1 = get_liquidity_for_amount_1(sqrt_ratio_a_x96, sqrt_price_x96, amount1)?;
        Ok(liquidity0.min(liquidity1))
    } else {
        get_liquidity_for_amount_1(sqrt_ratio_a_x96, sqrt_ratio_b_x96, amount1)
    }
}
