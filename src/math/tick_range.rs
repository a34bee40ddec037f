use crate::error::{StateError, TickError};
use crate::math::price_math::tick_to_price;
use crate::math::tick_math::tick_to_sqrt_price_x96;
use alloy_primitives::U256;

/// Distance between two usable ticks of a pool; always `>= 1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub struct TickSpacing(i32);

impl TickSpacing {
    pub const ONE: Self = Self(1);
    pub const TEN: Self = Self(10);
    pub const SIXTY: Self = Self(60);
    pub const TWO_HUNDRED: Self = Self(200);

    pub fn new(spacing: i32) -> Result<Self, TickError> {
        if spacing < 1 {
            return Err(TickError::InvalidSpacing(spacing));
        }
        Ok(Self(spacing))
    }

    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for TickSpacing {
    type Error = TickError;

    fn try_from(spacing: i32) -> Result<Self, Self::Error> {
        Self::new(spacing)
    }
}

impl From<TickSpacing> for i32 {
    fn from(spacing: TickSpacing) -> Self {
        spacing.0
    }
}

/// The spacing-aligned bracket `[lower, upper)` holding a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickRange {
    pub lower: i32,
    pub upper: i32,
}

impl TickRange {
    /// Range containing `tick` for an already validated spacing.
    pub fn containing(tick: i32, spacing: TickSpacing) -> Self {
        let lower = tick.div_euclid(spacing.get()) * spacing.get();
        Self {
            lower,
            upper: lower + spacing.get(),
        }
    }

    #[inline]
    pub fn contains(&self, tick: i32) -> bool {
        self.lower <= tick && tick < self.upper
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.upper - self.lower
    }

    /// Decimal prices `(1.0001^lower, 1.0001^upper)`.
    pub fn price_bounds(&self) -> (f64, f64) {
        (tick_to_price(self.lower), tick_to_price(self.upper))
    }

    /// Q96 sqrt prices at both ends of the range.
    pub fn sqrt_price_bounds_x96(&self) -> Result<(U256, U256), StateError> {
        Ok((
            tick_to_sqrt_price_x96(self.lower)?,
            tick_to_sqrt_price_x96(self.upper)?,
        ))
    }
}

/// `floor(tick / spacing) * spacing`, rounding towards negative infinity
/// for negative ticks.
pub fn lower_tick(tick: i32, spacing: i32) -> Result<i32, TickError> {
    Ok(TickRange::containing(tick, TickSpacing::new(spacing)?).lower)
}

/// `lower_tick(tick, spacing) + spacing`.
pub fn upper_tick(tick: i32, spacing: i32) -> Result<i32, TickError> {
    Ok(TickRange::containing(tick, TickSpacing::new(spacing)?).upper)
}

pub fn tick_range(tick: i32, spacing: i32) -> Result<TickRange, TickError> {
    Ok(TickRange::containing(tick, TickSpacing::new(spacing)?))
}
