#![allow(dead_code)]

use clmm_swap_target::math::conversion::q96_to_f64;
use clmm_swap_target::math::price_math::{price_to_sqrt_price_x96, sqrt_price_to_price};
use clmm_swap_target::math::reserves::{exact_reserve_a, exact_reserve_b, reserve_a, reserve_b};
use clmm_swap_target::math::tick_math::{sqrt_price_x96_to_tick, tick_to_sqrt_price_x96};
use clmm_swap_target::math::tick_range::tick_range;
use clmm_swap_target::{
    Direction, FeeTier, PoolConfig, PoolSnapshot, PriceMath, SwapTargeter, U256, Q96,
};
use criterion::Criterion;
use std::convert::Infallible;
use std::hint::black_box;

const LIQUIDITY: u128 = 22402462192838616433;
const TICKS: [i32; 5] = [-887272, -195543, 0, 195543, 887272];

pub fn bench_tick_math(c: &mut Criterion) {
    c.bench_function("tick_to_sqrt_price_x96", |b| {
        b.iter(|| {
            for tick in TICKS {
                black_box(tick_to_sqrt_price_x96(black_box(tick)).unwrap());
            }
        })
    });

    let sqrt_prices: Vec<U256> = TICKS
        .iter()
        .map(|&tick| tick_to_sqrt_price_x96(tick).unwrap())
        .collect();
    c.bench_function("sqrt_price_x96_to_tick", |b| {
        b.iter(|| {
            for sqrt_price in &sqrt_prices[..4] {
                black_box(sqrt_price_x96_to_tick(black_box(*sqrt_price)).unwrap());
            }
        })
    });
}

pub fn bench_price_math(c: &mut Criterion) {
    let sqrt_price = tick_to_sqrt_price_x96(195543).unwrap();
    c.bench_function("sqrt_price_to_price", |b| {
        b.iter(|| black_box(sqrt_price_to_price(black_box(sqrt_price))))
    });
    c.bench_function("price_to_sqrt_price_x96", |b| {
        b.iter(|| black_box(price_to_sqrt_price_x96(black_box(3.1e8)).unwrap()))
    });
    c.bench_function("tick_range", |b| {
        b.iter(|| black_box(tick_range(black_box(195543), black_box(10)).unwrap()))
    });
}

pub fn bench_reserves(c: &mut Criterion) {
    let current = tick_to_sqrt_price_x96(195543).unwrap();
    let lower = tick_to_sqrt_price_x96(195540).unwrap();
    let upper = tick_to_sqrt_price_x96(195550).unwrap();
    let p = q96_to_f64(current);

    c.bench_function("reserve_a_b", |b| {
        b.iter(|| {
            black_box(reserve_a(black_box(p), black_box(1.0001f64.powi(195550)), LIQUIDITY));
            black_box(reserve_b(black_box(p), black_box(1.0001f64.powi(195540)), LIQUIDITY));
        })
    });
    c.bench_function("exact_reserve_a_b", |b| {
        b.iter(|| {
            black_box(exact_reserve_a(black_box(current), upper, LIQUIDITY).unwrap());
            black_box(exact_reserve_b(black_box(current), lower, LIQUIDITY).unwrap());
        })
    });

    let math = PriceMath::new(PoolConfig::for_fee_tier(6, 18, FeeTier::Low));
    let snapshot = PoolSnapshot::at_tick(195543, LIQUIDITY).unwrap();
    c.bench_function("in_range_reserves", |b| {
        b.iter(|| black_box(math.in_range_reserves(black_box(&snapshot)).unwrap()))
    });
}

pub fn bench_targeter(c: &mut Criterion) {
    let snapshot = PoolSnapshot::at_tick(195543, LIQUIDITY).unwrap();
    let targeter = SwapTargeter::default();

    // constant-liquidity pool: the quote is the token1 delta mapped back to price
    let quote = |direction: Direction, amount: U256| {
        let delta = amount * Q96 / U256::from(snapshot.liquidity);
        Ok::<_, Infallible>(match direction {
            Direction::IncreasePrice => snapshot.sqrt_price_x96 + delta,
            Direction::DecreasePrice => snapshot.sqrt_price_x96 - delta,
        })
    };

    c.bench_function("plan_to_tick_up", |b| {
        b.iter(|| black_box(targeter.plan_to_tick(&snapshot, black_box(195553), quote).unwrap()))
    });
    c.bench_function("plan_to_tick_down", |b| {
        b.iter(|| black_box(targeter.plan_to_tick(&snapshot, black_box(195533), quote).unwrap()))
    });
    c.bench_function("plan_to_tick_degenerate", |b| {
        b.iter(|| black_box(targeter.plan_to_tick(&snapshot, black_box(195543), quote).unwrap()))
    });
}
