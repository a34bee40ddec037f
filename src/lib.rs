//! Uniswap V3–style price math and target-price swap sizing in pure Rust.
//!
//! This crate exposes:
//! - Low‑level math primitives (`math::*`) for ticks, sqrt prices, tick
//!   ranges and in-range reserves.
//! - A [`PriceMath`] facade that applies a pool's decimals and tick spacing.
//! - A [`SwapTargeter`] that sizes the trade moving a pool to a target
//!   price, refining a linear estimate against a caller-supplied quoter.
//!
//! # Examples
//!
//! ## Pure math
//! ```no_run
//! use clmm_swap_target::{math::tick_math, math::tick_range, RESOLUTION, U256};
//!
//! let sqrt_price = tick_math::tick_to_sqrt_price_x96(0).unwrap();
//! assert!(sqrt_price > U256::ZERO);
//! assert_eq!(RESOLUTION, 96);
//!
//! let range = tick_range::tick_range(195543, 10).unwrap();
//! assert_eq!((range.lower, range.upper), (195540, 195550));
//! ```
//!
//! ## Prices and reserves of a USDC/WETH pool
//! ```no_run
//! use clmm_swap_target::{FeeTier, PoolConfig, PoolSnapshot, PriceMath};
//!
//! let math = PriceMath::new(PoolConfig::for_fee_tier(6, 18, FeeTier::Low));
//! let snapshot = PoolSnapshot::at_tick(195543, 22402462192838616433).unwrap();
//!
//! // USDC per WETH
//! let price = math.price_of_asset_b(snapshot.sqrt_price_x96);
//! let reserves = math.in_range_reserves(&snapshot).unwrap();
//! println!("price {price}, {} USDC / {} WETH", reserves.reserve_a_units, reserves.reserve_b_units);
//! ```
//!
//! ## Sizing a swap against a quoter
//! ```no_run
//! use clmm_swap_target::{Direction, SwapTarget, U256, solve_target_swap};
//! use std::convert::Infallible;
//!
//! let current = U256::from(1_000_000u64);
//! let target = U256::from(2_000_000u64);
//!
//! // stand-in for a quoter contract call
//! let mut quoter = |amount: U256| Ok::<_, Infallible>(current + amount);
//!
//! match solve_target_swap(Direction::IncreasePrice, target, current, 1u128 << 96, &mut quoter) {
//!     Ok(SwapTarget::Swap(plan)) => println!("swap {} token1 in", plan.amount),
//!     Ok(SwapTarget::Degenerate) => println!("nothing to do"),
//!     Err(err) => println!("skipping step: {err}"),
//! }
//! ```

pub use alloy_primitives::U256;

pub mod config;
pub mod error;
pub mod math;
pub mod pool;
pub mod targeter;

pub use config::{FeeTier, PoolConfig};
pub use error::Error;
pub use pool::price_math::{PriceMath, RangeReserves};
pub use pool::snapshot::PoolSnapshot;
pub use targeter::{
    Direction, IntoTrade, SolverConfig, SqrtPriceQuoter, SwapPlan, SwapTarget, SwapTargetResult,
    SwapTargeter, TickWalk, TradeFraming, solve_target_swap,
};

pub const RESOLUTION: u8 = 96;
pub const Q96: U256 = U256::from_limbs([0, 4294967296, 0, 0]);
