use crate::config::PoolConfig;
use crate::error::{Error, StateError};
use crate::math::price_math::sqrt_price_to_price;
use crate::math::reserves::{
    exact_reserve_a, exact_reserve_b, get_liquidity_for_amounts, reserve_a, reserve_b,
};
use crate::math::tick_math::tick_to_sqrt_price_x96;
use crate::math::tick_range::TickRange;
use crate::pool::snapshot::PoolSnapshot;
use alloy_primitives::U256;

/// Reserves of both assets inside the active tick range of a snapshot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RangeReserves {
    pub range: TickRange,
    /// `1.0001^range.lower`
    pub lower_price: f64,
    /// `1.0001^range.upper`
    pub upper_price: f64,
    /// Asset A (token0) in its smallest unit.
    pub reserve_a: f64,
    /// Asset B (token1) in its smallest unit.
    pub reserve_b: f64,
    /// Asset A in whole tokens.
    pub reserve_a_units: f64,
    /// Asset B in whole tokens.
    pub reserve_b_units: f64,
    pub exact_reserve_a: U256,
    pub exact_reserve_b: U256,
}

/// Price and reserve conversions for one pool configuration.
///
/// Everything here is a pure function of its arguments and the
/// [`PoolConfig`] given at construction.
#[derive(Copy, Clone, Debug)]
pub struct PriceMath {
    config: PoolConfig,
    decimal_scale: f64,
}

impl PriceMath {
    pub fn new(config: PoolConfig) -> Self {
        Self {
            config,
            decimal_scale: config.decimal_scale(),
        }
    }

    #[inline]
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Raw pool price `(sqrt_price_x96 / 2^96)^2`, token1 units per token0 unit.
    #[inline]
    pub fn sqrt_price_to_price(&self, sqrt_price_x96: U256) -> f64 {
        sqrt_price_to_price(sqrt_price_x96)
    }

    /// Whole units of asset B paid for one whole unit of asset A.
    pub fn price_of_asset_a(&self, sqrt_price_x96: U256) -> f64 {
        sqrt_price_to_price(sqrt_price_x96) * self.decimal_scale
    }

    /// Whole units of asset A paid for one whole unit of asset B, the
    /// reciprocal of [`Self::price_of_asset_a`]. Infinite at a zero price.
    pub fn price_of_asset_b(&self, sqrt_price_x96: U256) -> f64 {
        1.0 / self.price_of_asset_a(sqrt_price_x96)
    }

    #[inline]
    pub fn tick_to_sqrt_price_x96(&self, tick: i32) -> Result<U256, StateError> {
        tick_to_sqrt_price_x96(tick)
    }

    /// The configured-spacing range holding `tick`.
    #[inline]
    pub fn tick_range(&self, tick: i32) -> TickRange {
        TickRange::containing(tick, self.config.tick_spacing)
    }

    /// Reserves available between the snapshot's price and the bounds of
    /// its tick range, in raw units, whole tokens, and exact integers.
    pub fn in_range_reserves(&self, snapshot: &PoolSnapshot) -> Result<RangeReserves, Error> {
        let range = self.tick_range(snapshot.tick);
        let (lower_price, upper_price) = range.price_bounds();
        let (lower_sqrt_price_x96, upper_sqrt_price_x96) = range.sqrt_price_bounds_x96()?;

        let sqrt_price = snapshot.sqrt_price();
        let amount_a = reserve_a(sqrt_price, upper_price, snapshot.liquidity);
        let amount_b = reserve_b(sqrt_price, lower_price, snapshot.liquidity);

        Ok(RangeReserves {
            range,
            lower_price,
            upper_price,
            reserve_a: amount_a,
            reserve_b: amount_b,
            reserve_a_units: amount_a / 10f64.powi(self.config.asset_a_decimals as i32),
            reserve_b_units: amount_b / 10f64.powi(self.config.asset_b_decimals as i32),
            exact_reserve_a: exact_reserve_a(
                snapshot.sqrt_price_x96,
                upper_sqrt_price_x96,
                snapshot.liquidity,
            )?,
            exact_reserve_b: exact_reserve_b(
                snapshot.sqrt_price_x96,
                lower_sqrt_price_x96,
                snapshot.liquidity,
            )?,
        })
    }

    /// Liquidity a deposit of `amount_a` and `amount_b` (smallest units)
    /// backs in the snapshot's tick range at the snapshot's price.
    pub fn liquidity_for_amounts(
        &self,
        snapshot: &PoolSnapshot,
        amount_a: U256,
        amount_b: U256,
    ) -> Result<u128, Error> {
        let (lower_sqrt_price_x96, upper_sqrt_price_x96) =
            self.tick_range(snapshot.tick).sqrt_price_bounds_x96()?;
        get_liquidity_for_amounts(
            snapshot.sqrt_price_x96,
            lower_sqrt_price_x96,
            upper_sqrt_price_x96,
            amount_a,
            amount_b,
        )
    }
}

impl From<PoolConfig> for PriceMath {
    fn from(config: PoolConfig) -> Self {
        Self::new(config)
    }
}
