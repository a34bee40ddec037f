use crate::RESOLUTION;
use crate::math::math_helpers::mul_div;
use crate::{
    Q96,
    error::{Error, StateError},
};
use alloy_primitives::U256;

/// Amount of token0 held by `liquidity` between two sqrt prices, rounded
/// down: `L * 2^96 * (sqrt_b - sqrt_a) / (sqrt_b * sqrt_a)`.
///
/// The arguments may be given in either order.
pub fn get_amount_0_delta(
    mut sqrt_ratio_a_x96: U256,
    mut sqrt_ratio_b_x96: U256,
    liquidity: u128,
) -> Result<U256, Error> {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    };

    if sqrt_ratio_a_x96.is_zero() {
        return Err(StateError::SqrtRatioIsZero.into());
    }

    let numerator1 = U256::from(liquidity) << RESOLUTION;
    let numerator2 = sqrt_ratio_b_x96 - sqrt_ratio_a_x96;

    Ok(mul_div(numerator1, numerator2, sqrt_ratio_b_x96)? / sqrt_ratio_a_x96)
}

/// Amount of token1 held by `liquidity` between two sqrt prices, rounded
/// down: `L * (sqrt_b - sqrt_a) / 2^96`.
///
/// This is also the constant-liquidity estimate of the token1 trade that
/// moves the price from one sqrt price to the other.
pub fn get_amount_1_delta(
    mut sqrt_ratio_a_x96: U256,
    mut sqrt_ratio_b_x96: U256,
    liquidity: u128,
) -> Result<U256, Error> {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    };

    Ok(mul_div(
        U256::from(liquidity),
        sqrt_ratio_b_x96 - sqrt_ratio_a_x96,
        Q96,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::tick_math::tick_to_sqrt_price_x96;

    // ------------------------- get_amount_0_delta -------------------------

    #[test]
    fn amount_0_delta_zero_when_prices_equal() {
        let p = Q96;
        assert_eq!(get_amount_0_delta(p, p, 1_000_000).unwrap(), U256::ZERO);
    }

    #[test]
    fn amount_0_delta_rejects_zero_price() {
        let result = get_amount_0_delta(U256::ZERO, Q96, 1_000_000);
        assert!(matches!(
            result,
            Err(Error::StateError(StateError::SqrtRatioIsZero))
        ));
    }

    #[test]
    fn amount_0_delta_price_one_to_two() {
        // sqrt prices 1 and 2: L * (2 - 1) / (2 * 1) = L / 2
        let a = Q96;
        let b = Q96 << 1;
        let amount = get_amount_0_delta(a, b, 1_000_000_000_000_000_000).unwrap();
        assert_eq!(amount, U256::from(500_000_000_000_000_000u64));
    }

    #[test]
    fn amount_0_delta_is_symmetric_in_argument_order() {
        let a = tick_to_sqrt_price_x96(195540).unwrap();
        let b = tick_to_sqrt_price_x96(195550).unwrap();
        let liquidity = 22402462192838616433u128;

        assert_eq!(
            get_amount_0_delta(a, b, liquidity).unwrap(),
            get_amount_0_delta(b, a, liquidity).unwrap()
        );
    }

    // ------------------------- get_amount_1_delta -------------------------

    #[test]
    fn amount_1_delta_price_one_to_two() {
        // sqrt prices 1 and 2: L * (2 - 1)
        let a = Q96;
        let b = Q96 << 1;
        let amount = get_amount_1_delta(b, a, 1_000_000_000_000_000_000).unwrap();
        assert_eq!(amount, U256::from(1_000_000_000_000_000_000u64));
    }

    #[test]
    fn amount_1_delta_zero_liquidity() {
        let a = tick_to_sqrt_price_x96(-60).unwrap();
        let b = tick_to_sqrt_price_x96(60).unwrap();
        assert_eq!(get_amount_1_delta(a, b, 0).unwrap(), U256::ZERO);
    }

    #[test]
    fn amount_1_delta_max_liquidity_does_not_overflow() {
        let a = tick_to_sqrt_price_x96(-887272).unwrap();
        let b = tick_to_sqrt_price_x96(887272).unwrap();
        assert!(get_amount_1_delta(a, b, u128::MAX).is_ok());
    }
}
