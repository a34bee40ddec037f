//! Helpers for a driver that moves a pool tick by tick.

use crate::error::Error;
use crate::math::tick_math::{MAX_TICK, MIN_TICK, tick_to_sqrt_price_x96};
use crate::math::tick_range::TickSpacing;
use crate::pool::snapshot::PoolSnapshot;
use crate::targeter::{Direction, SwapTarget, SwapTargeter};
use alloy_primitives::U256;
use tracing::debug;

impl SwapTargeter {
    /// Sizes the swap that moves the pool in `snapshot` onto `target_tick`.
    ///
    /// The direction follows from the two prices and is passed to `quote`
    /// with every amount, so the caller can route increases to an
    /// exact-input quote and decreases to an exact-output one.
    pub fn plan_to_tick<F, E>(
        &self,
        snapshot: &PoolSnapshot,
        target_tick: i32,
        mut quote: F,
    ) -> Result<SwapTarget, Error>
    where
        F: FnMut(Direction, U256) -> Result<U256, E>,
        E: std::error::Error + Send + Sync + 'static,
    {
        let target_sqrt_price_x96 = tick_to_sqrt_price_x96(target_tick)?;
        let Some(direction) = Direction::from_prices(snapshot.sqrt_price_x96, target_sqrt_price_x96)
        else {
            debug!(target_tick, "pool already at target price");
            return Ok(SwapTarget::Degenerate);
        };

        let mut quoter = |amount: U256| quote(direction, amount);
        Ok(self.solve(
            direction,
            target_sqrt_price_x96,
            snapshot.sqrt_price_x96,
            snapshot.liquidity,
            &mut quoter,
        )?)
    }
}

/// Target ticks for a fixed number of simulation steps: one spacing up per
/// step for the first half, then one spacing back down per step.
///
/// With an even step count the walk ends on the starting tick. Targets are
/// clamped to the valid tick domain.
#[derive(Clone, Debug)]
pub struct TickWalk {
    start: i32,
    spacing: i32,
    steps: usize,
    rising: usize,
    position: usize,
}

impl TickWalk {
    pub fn new(current_tick: i32, spacing: TickSpacing, steps: usize) -> Self {
        Self {
            start: current_tick,
            spacing: spacing.get(),
            steps,
            rising: steps / 2,
            position: 0,
        }
    }

    /// Target tick of `step`, `None` past the last step.
    pub fn target(&self, step: usize) -> Option<i32> {
        if step >= self.steps {
            return None;
        }
        let offset = if step < self.rising {
            step as i64 + 1
        } else {
            self.rising as i64 - (step - self.rising) as i64 - 1
        };
        let tick = self.start as i64 + offset * self.spacing as i64;
        Some(tick.clamp(MIN_TICK as i64, MAX_TICK as i64) as i32)
    }

    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Iterator for TickWalk {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let tick = self.target(self.position)?;
        self.position += 1;
        Some(tick)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps.saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TickWalk {}
