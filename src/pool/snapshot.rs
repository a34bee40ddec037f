use crate::error::StateError;
use crate::math::conversion::q96_to_f64;
use crate::math::tick_math::{sqrt_price_x96_to_tick, tick_to_sqrt_price_x96};
use alloy_primitives::U256;

/// Pool state read once per simulation step.
///
/// The three values must come from the same point in time; the engine
/// never re-reads them halfway through a solve.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolSnapshot {
    pub sqrt_price_x96: U256,
    pub tick: i32,
    pub liquidity: u128,
}

impl Default for PoolSnapshot {
    fn default() -> Self {
        Self {
            sqrt_price_x96: U256::ZERO,
            tick: 0i32,
            liquidity: 0u128,
        }
    }
}

impl PoolSnapshot {
    #[inline]
    pub fn new(sqrt_price_x96: U256, tick: i32, liquidity: u128) -> Self {
        Self {
            sqrt_price_x96,
            tick,
            liquidity,
        }
    }

    /// Builds a snapshot sitting exactly on a tick boundary.
    pub fn at_tick(tick: i32, liquidity: u128) -> Result<Self, StateError> {
        Ok(Self::new(tick_to_sqrt_price_x96(tick)?, tick, liquidity))
    }

    /// Builds a snapshot from a sqrt price, deriving its tick.
    pub fn from_sqrt_price(sqrt_price_x96: U256, liquidity: u128) -> Result<Self, StateError> {
        Ok(Self::new(
            sqrt_price_x96,
            sqrt_price_x96_to_tick(sqrt_price_x96)?,
            liquidity,
        ))
    }

    /// The normalized sqrt price `sqrt_price_x96 / 2^96`.
    #[inline]
    pub fn sqrt_price(&self) -> f64 {
        q96_to_f64(self.sqrt_price_x96)
    }
}
