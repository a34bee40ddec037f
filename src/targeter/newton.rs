//! Bounded Newton search on `f(x) = quote(x) - target`.
//!
//! The slope is a secant through the last two quoted points. Only the
//! first step has no previous point, so it spends one extra quote on a
//! forward difference. A solve therefore calls the quoter at most
//! `max_iterations + 2` times. There is no bisection fallback: when the
//! search cannot make progress it reports why.
//!
//! Amounts stay integers throughout. Each step is rounded so the next
//! amount is `floor(x - f(x) / f'(x))`, and the search stops once a step
//! would move the amount by less than one smallest unit.

use crate::error::{DivergenceReason, MathError, TargetSwapError};
use crate::math::conversion::{f64_to_u256, signed_difference_f64, u256_to_f64};
use crate::targeter::SolverConfig;
use crate::targeter::quoter::SqrtPriceQuoter;
use alloy_primitives::U256;
use tracing::{trace, warn};

/// Where a converged search stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NewtonOutcome {
    pub amount: U256,
    pub sqrt_price_x96: U256,
    pub iterations: u32,
}

fn quote<Q: SqrtPriceQuoter>(
    quoter: &mut Q,
    amount: U256,
    iteration: u32,
) -> Result<U256, TargetSwapError> {
    quoter.quote_sqrt_price(amount).map_err(|err| {
        warn!(iteration, %amount, error = %err, "quote oracle failed");
        TargetSwapError::Oracle {
            iteration,
            source: Box::new(err),
        }
    })
}

fn diverged(reason: DivergenceReason, iterations: u32, last_amount: U256) -> TargetSwapError {
    warn!(%reason, iterations, %last_amount, "target swap search diverged");
    TargetSwapError::SolverDivergence {
        reason,
        iterations,
        last_amount,
    }
}

/// Runs the search from `seed` (which must be non-zero) towards
/// `target_sqrt_price_x96`.
pub(crate) fn newton_search<Q: SqrtPriceQuoter>(
    config: &SolverConfig,
    seed: U256,
    target_sqrt_price_x96: U256,
    quoter: &mut Q,
) -> Result<NewtonOutcome, TargetSwapError> {
    let tolerance = config.price_tolerance * u256_to_f64(target_sqrt_price_x96);

    let mut amount = seed;
    let mut iteration = 0u32;
    let mut sqrt_price_x96 = quote(quoter, amount, iteration)?;
    let mut previous: Option<(U256, U256)> = None;

    loop {
        let residual = signed_difference_f64(sqrt_price_x96, target_sqrt_price_x96);

        trace!(iteration, %amount, %sqrt_price_x96, residual, "newton iteration");

        let converged = NewtonOutcome {
            amount,
            sqrt_price_x96,
            iterations: iteration,
        };

        if residual.abs() <= tolerance {
            return Ok(converged);
        }
        if iteration >= config.max_iterations {
            return Err(diverged(
                DivergenceReason::IterationBudgetExhausted,
                iteration,
                amount,
            ));
        }

        let (other_amount, other_sqrt_price_x96) = match previous {
            Some(point) => point,
            None => {
                let step_size =
                    f64_to_u256((u256_to_f64(amount) * config.derivative_step).max(1.0))?;
                let bumped = amount
                    .checked_add(step_size)
                    .ok_or(MathError::Overflow)?;
                (bumped, quote(quoter, bumped, iteration)?)
            }
        };

        let slope = signed_difference_f64(other_sqrt_price_x96, sqrt_price_x96)
            / signed_difference_f64(other_amount, amount);
        if slope == 0.0 || !slope.is_finite() {
            return Err(diverged(DivergenceReason::FlatDerivative, iteration, amount));
        }

        let step = residual / slope;
        if !step.is_finite() {
            return Err(diverged(DivergenceReason::NonFiniteStep, iteration, amount));
        }
        // the next amount would differ by less than one smallest unit
        if step.abs() < 1.0 {
            return Ok(converged);
        }

        let next = if step > 0.0 {
            // floor(amount - step) for an integer amount
            let delta = f64_to_u256(step.ceil())?;
            match amount.checked_sub(delta) {
                Some(next) if !next.is_zero() => next,
                _ => {
                    return Err(diverged(
                        DivergenceReason::NonPositiveAmount,
                        iteration,
                        amount,
                    ));
                }
            }
        } else {
            amount
                .checked_add(f64_to_u256(-step)?)
                .ok_or(MathError::Overflow)?
        };

        previous = Some((amount, sqrt_price_x96));
        amount = next;
        iteration += 1;
        sqrt_price_x96 = quote(quoter, amount, iteration)?;
    }
}
