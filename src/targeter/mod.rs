//! Sizing the swap that moves a pool to a target sqrt price.
//!
//! The first guess comes from the constant-liquidity token1 delta
//! `L * |target - current| / 2^96`. It is exact while the price stays in
//! the active tick range and an underestimate once ticks are crossed, so
//! the search starts at half of it and refines against the caller's
//! quoter.

mod newton;
pub mod plan;
mod quoter;

pub use plan::TickWalk;
pub use quoter::SqrtPriceQuoter;

use crate::Q96;
use crate::error::TargetSwapError;
use crate::math::math_helpers::mul_div;
use alloy_primitives::U256;
use newton::newton_search;
use tracing::debug;

/// Which way the swap pushes the pool price.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Asset B (token1) goes in, the price rises.
    IncreasePrice,
    /// Asset B (token1) comes out, the price falls.
    DecreasePrice,
}

impl Direction {
    /// `None` when the two prices are equal.
    pub fn from_prices(current_sqrt_price_x96: U256, target_sqrt_price_x96: U256) -> Option<Self> {
        match target_sqrt_price_x96.cmp(&current_sqrt_price_x96) {
            std::cmp::Ordering::Greater => Some(Direction::IncreasePrice),
            std::cmp::Ordering::Less => Some(Direction::DecreasePrice),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// How the solved token1 amount is handed to the execution layer.
    pub const fn framing(self) -> TradeFraming {
        match self {
            Direction::IncreasePrice => TradeFraming::ExactInput,
            Direction::DecreasePrice => TradeFraming::ExactOutput,
        }
    }

    fn admits(self, current_sqrt_price_x96: U256, target_sqrt_price_x96: U256) -> bool {
        match self {
            Direction::IncreasePrice => target_sqrt_price_x96 >= current_sqrt_price_x96,
            Direction::DecreasePrice => target_sqrt_price_x96 <= current_sqrt_price_x96,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TradeFraming {
    /// The amount is what the trader pays in.
    ExactInput,
    /// The amount is what the trader receives.
    ExactOutput,
}

/// A solved trade, ready for execution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SwapPlan {
    pub direction: Direction,
    pub framing: TradeFraming,
    /// Token1 magnitude, truncated to whole smallest units.
    pub amount: U256,
    /// Sqrt price quoted for `amount`.
    pub achieved_sqrt_price_x96: U256,
    /// The constant-liquidity estimate the search was seeded from.
    pub estimate: U256,
    /// Search steps taken.
    pub iterations: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SwapTarget {
    /// The price move rounds to no trade at all; nothing was quoted.
    Degenerate,
    Swap(SwapPlan),
}

impl SwapTarget {
    pub fn plan(&self) -> Option<&SwapPlan> {
        match self {
            SwapTarget::Degenerate => None,
            SwapTarget::Swap(plan) => Some(plan),
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, SwapTarget::Degenerate)
    }
}

pub type SwapTargetResult = Result<SwapTarget, TargetSwapError>;

/// Folds a solve result to "trade or skip".
pub trait IntoTrade {
    fn into_trade(self) -> Option<SwapPlan>;
}

impl IntoTrade for SwapTargetResult {
    fn into_trade(self) -> Option<SwapPlan> {
        match self {
            Ok(SwapTarget::Swap(plan)) => Some(plan),
            Ok(SwapTarget::Degenerate) | Err(_) => None,
        }
    }
}

/// Newton search settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Newton steps allowed after the seed quote.
    /// Default: 5
    pub max_iterations: u32,

    /// Optional relative tolerance on the quoted sqrt price. With a
    /// positive value the search also stops once
    /// `|quote - target| <= price_tolerance * target`; at zero it stops
    /// only on an exact hit or a sub-unit step.
    /// Default: 0.0
    pub price_tolerance: f64,

    /// Relative perturbation used for the first step's forward-difference
    /// slope, never less than one smallest unit.
    /// Default: 1e-4
    pub derivative_step: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 5,
            price_tolerance: 0.0,
            derivative_step: 1e-4,
        }
    }
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_price_tolerance(mut self, price_tolerance: f64) -> Self {
        self.price_tolerance = price_tolerance;
        self
    }

    pub fn with_derivative_step(mut self, derivative_step: f64) -> Self {
        self.derivative_step = derivative_step;
        self
    }
}

/// Solves target swaps with a fixed [`SolverConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapTargeter {
    config: SolverConfig,
}

impl SwapTargeter {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Finds the token1 amount that moves the pool from
    /// `current_sqrt_price_x96` to `target_sqrt_price_x96`.
    ///
    /// Returns [`SwapTarget::Degenerate`] without quoting when the linear
    /// estimate is zero, which covers `target == current` and empty
    /// liquidity.
    pub fn solve<Q: SqrtPriceQuoter>(
        &self,
        direction: Direction,
        target_sqrt_price_x96: U256,
        current_sqrt_price_x96: U256,
        liquidity: u128,
        quoter: &mut Q,
    ) -> SwapTargetResult {
        if !direction.admits(current_sqrt_price_x96, target_sqrt_price_x96) {
            return Err(TargetSwapError::DirectionMismatch {
                direction,
                current: current_sqrt_price_x96,
                target: target_sqrt_price_x96,
            });
        }

        let price_move = if target_sqrt_price_x96 > current_sqrt_price_x96 {
            target_sqrt_price_x96 - current_sqrt_price_x96
        } else {
            current_sqrt_price_x96 - target_sqrt_price_x96
        };
        // token1 delta over the move at constant liquidity, rounded down
        let estimate = mul_div(U256::from(liquidity), price_move, Q96)?;
        if estimate.is_zero() {
            debug!(
                ?direction,
                %current_sqrt_price_x96,
                %target_sqrt_price_x96,
                liquidity,
                "price move rounds to a zero trade"
            );
            return Ok(SwapTarget::Degenerate);
        }

        let seed = (estimate >> 1usize).max(U256::ONE);
        let outcome = newton_search(&self.config, seed, target_sqrt_price_x96, quoter)?;

        debug!(
            ?direction,
            amount = %outcome.amount,
            %estimate,
            iterations = outcome.iterations,
            "target swap converged"
        );

        Ok(SwapTarget::Swap(SwapPlan {
            direction,
            framing: direction.framing(),
            amount: outcome.amount,
            achieved_sqrt_price_x96: outcome.sqrt_price_x96,
            estimate,
            iterations: outcome.iterations,
        }))
    }
}

/// [`SwapTargeter::solve`] with the default [`SolverConfig`].
pub fn solve_target_swap<Q: SqrtPriceQuoter>(
    direction: Direction,
    target_sqrt_price_x96: U256,
    current_sqrt_price_x96: U256,
    liquidity: u128,
    quoter: &mut Q,
) -> SwapTargetResult {
    SwapTargeter::default().solve(
        direction,
        target_sqrt_price_x96,
        current_sqrt_price_x96,
        liquidity,
        quoter,
    )
}
