use alloy_primitives::U256;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Math error - overflow")]
    Overflow,
    #[error("Math error - division by zero")]
    DivisionByZero,
    #[error("Math error - float value is NaN or infinite")]
    NonFinite,
    #[error("Math error - float value is negative")]
    Negative,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    #[error("State error - sqrtPrice out of bounds")]
    SqrtPriceOutOfBounds,
    #[error("State error - sqrtRatio is 0")]
    SqrtRatioIsZero,
    #[error("State error - tick {0} out of bounds")]
    TickOutOfBounds(i32),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TickError {
    #[error("Tick error - spacing must be a positive integer, got {0}")]
    InvalidSpacing(i32),
    #[error("Tick error - fee of {0} pips has no known tick spacing")]
    UnknownFeeTier(u32),
}

/// Why a Newton search gave up before reaching the target price.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DivergenceReason {
    /// The quoted price did not move when the amount was perturbed.
    #[error("flat derivative")]
    FlatDerivative,
    /// The Newton step came out as NaN or infinity.
    #[error("non-finite step")]
    NonFiniteStep,
    /// The Newton step would have produced a zero or negative amount.
    #[error("non-positive amount")]
    NonPositiveAmount,
    /// Every iteration was spent without meeting the price tolerance.
    #[error("iteration budget exhausted")]
    IterationBudgetExhausted,
}

/// Failure outcomes of a target swap search.
///
/// A target equal to the current price is not an error; it is reported as
/// [`crate::targeter::SwapTarget::Degenerate`].
#[derive(Debug, Error)]
pub enum TargetSwapError {
    #[error("Solver diverged after {iterations} iterations ({reason}), last amount {last_amount}")]
    SolverDivergence {
        reason: DivergenceReason,
        iterations: u32,
        last_amount: U256,
    },
    #[error("Quote oracle failed at iteration {iteration}: {source}")]
    Oracle {
        iteration: u32,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
    #[error("Target sqrt price {target} cannot be reached from {current} by a {direction:?} swap")]
    DirectionMismatch {
        direction: crate::targeter::Direction,
        current: U256,
        target: U256,
    },
    #[error(transparent)]
    MathError(#[from] MathError),
}

impl TargetSwapError {
    pub fn is_divergence(&self) -> bool {
        matches!(self, TargetSwapError::SolverDivergence { .. })
    }

    pub fn is_oracle_failure(&self) -> bool {
        matches!(self, TargetSwapError::Oracle { .. })
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    MathError(#[from] MathError),

    #[error(transparent)]
    StateError(#[from] StateError),

    #[error(transparent)]
    TickError(#[from] TickError),

    #[error(transparent)]
    TargetSwapError(#[from] TargetSwapError),
}
