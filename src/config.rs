//! Plain-value configuration supplied when a [`crate::PriceMath`] is built.

use crate::error::TickError;
use crate::math::price_math::decimal_scale;
use crate::math::tick_range::TickSpacing;

/// Uniswap V3 fee tiers and the tick spacing each one enables.
///
/// | fee %  | spacing |
/// |-------:|--------:|
/// | 0.01   | 1       |
/// | 0.05   | 10      |
/// | 0.3    | 60      |
/// | 1.0    | 200     |
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeeTier {
    Lowest,
    Low,
    Medium,
    High,
}

impl FeeTier {
    /// Fee in pips (hundredths of a basis point).
    pub const fn fee_pips(self) -> u32 {
        match self {
            FeeTier::Lowest => 100,
            FeeTier::Low => 500,
            FeeTier::Medium => 3000,
            FeeTier::High => 10000,
        }
    }

    pub const fn tick_spacing(self) -> TickSpacing {
        match self {
            FeeTier::Lowest => TickSpacing::ONE,
            FeeTier::Low => TickSpacing::TEN,
            FeeTier::Medium => TickSpacing::SIXTY,
            FeeTier::High => TickSpacing::TWO_HUNDRED,
        }
    }

    pub fn from_fee_pips(fee_pips: u32) -> Result<Self, TickError> {
        match fee_pips {
            100 => Ok(FeeTier::Lowest),
            500 => Ok(FeeTier::Low),
            3000 => Ok(FeeTier::Medium),
            10000 => Ok(FeeTier::High),
            other => Err(TickError::UnknownFeeTier(other)),
        }
    }
}

impl TryFrom<u32> for FeeTier {
    type Error = TickError;

    fn try_from(fee_pips: u32) -> Result<Self, Self::Error> {
        Self::from_fee_pips(fee_pips)
    }
}

/// Per-pool constants: decimals of both assets and the tick spacing.
///
/// Asset A is the pool's token0 and asset B its token1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    pub asset_a_decimals: u8,
    pub asset_b_decimals: u8,
    pub tick_spacing: TickSpacing,
}

impl PoolConfig {
    pub fn new(
        asset_a_decimals: u8,
        asset_b_decimals: u8,
        tick_spacing: i32,
    ) -> Result<Self, TickError> {
        Ok(Self {
            asset_a_decimals,
            asset_b_decimals,
            tick_spacing: TickSpacing::new(tick_spacing)?,
        })
    }

    pub fn for_fee_tier(asset_a_decimals: u8, asset_b_decimals: u8, fee_tier: FeeTier) -> Self {
        Self {
            asset_a_decimals,
            asset_b_decimals,
            tick_spacing: fee_tier.tick_spacing(),
        }
    }

    pub fn with_tick_spacing(mut self, tick_spacing: i32) -> Result<Self, TickError> {
        self.tick_spacing = TickSpacing::new(tick_spacing)?;
        Ok(self)
    }

    /// Multiplier from a raw token1-per-token0 pool price to whole units of
    /// asset B per whole unit of asset A.
    pub fn decimal_scale(&self) -> f64 {
        decimal_scale(self.asset_a_decimals, self.asset_b_decimals)
    }
}
