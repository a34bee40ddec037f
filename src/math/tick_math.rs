use crate::error::StateError;
use crate::math::conversion::q96_to_f64;
use alloy_primitives::U256;

pub const MIN_TICK: i32 = -887272;
pub const MAX_TICK: i32 = -MIN_TICK;

pub const MIN_SQRT_RATIO: U256 = U256::from_limbs([4295128739, 0, 0, 0]);
pub const MAX_SQRT_RATIO: U256 =
    U256::from_limbs([6743328256752651558, 17280870778742802505, 4294805859, 0]);

/// `ln(sqrt(1.0001))`, the log of one tick step in sqrt-price space.
const LN_SQRT_TICK_BASE: f64 = 0.000049997500166654168;

/// Clamps a tick into the valid `[MIN_TICK, MAX_TICK]` domain.
#[inline]
pub fn clamp_tick(tick: i32) -> i32 {
    tick.clamp(MIN_TICK, MAX_TICK)
}

/// Returns the sqrt price (Q64.96 fixed‑point) at a given tick, i.e.
/// `sqrt(1.0001^tick) * 2^96`, rounded up.
///
/// The power is evaluated as a product of precomputed Q128 factors, one
/// per set bit of `|tick|`, so there is no float cancellation even at the
/// edges of the tick domain. Ticks outside `[MIN_TICK, MAX_TICK]` fail with
/// `StateError::TickOutOfBounds`; use [`clamp_tick`] first to saturate.
pub fn tick_to_sqrt_price_x96(tick: i32) -> Result<U256, StateError> {
    let abs_tick = tick.unsigned_abs();

    if abs_tick > MAX_TICK as u32 {
        return Err(StateError::TickOutOfBounds(tick));
    }

    let mut ratio = if abs_tick & 1 != 0 {
        U256::from_limbs([12262481743371124737, 18445821805675392311, 0, 0])
    } else {
        U256::from_limbs([0, 0, 1, 0])
    };

    macro_rules! apply_multiplier {
        ($bit:expr, $l0:expr, $l1:expr) => {
            if abs_tick & $bit != 0 {
                ratio = ratio.wrapping_mul(U256::from_limbs([$l0, $l1, 0, 0])) >> 128;
            }
        };
    }

    apply_multiplier!(2, 6459403834229662010, 18444899583751176498);
    apply_multiplier!(4, 17226890335427755468, 18443055278223354162);
    apply_multiplier!(8, 2032852871939366096, 18439367220385604838);
    apply_multiplier!(16, 14545316742740207172, 18431993317065449817);
    apply_multiplier!(32, 5129152022828963008, 18417254355718160513);
    apply_multiplier!(64, 4894419605888772193, 18387811781193591352);
    apply_multiplier!(128, 1280255884321894483, 18329067761203520168);
    apply_multiplier!(256, 15924666964335305636, 18212142134806087854);
    apply_multiplier!(512, 8010504389359918676, 17980523815641551639);
    apply_multiplier!(1024, 10668036004952895731, 17526086738831147013);
    apply_multiplier!(2048, 4878133418470705625, 16651378430235024244);
    apply_multiplier!(4096, 9537173718739605541, 15030750278693429944);
    apply_multiplier!(8192, 9972618978014552549, 12247334978882834399);
    apply_multiplier!(16384, 10428997489610666743, 8131365268884726200);
    apply_multiplier!(32768, 9305304367709015974, 3584323654723342297);
    apply_multiplier!(65536, 14301143598189091785, 696457651847595233);
    apply_multiplier!(131072, 7393154844743099908, 26294789957452057);
    apply_multiplier!(262144, 2209338891292245656, 37481735321082);
    apply_multiplier!(524288, 10518117631919034274, 76158723);

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128 -> Q96, rounding up
    let lower_32_bits = ratio.as_limbs()[0] & 0xFFFF_FFFF;
    Ok((ratio >> 32) + U256::from((lower_32_bits != 0) as u64))
}

/// Returns the greatest tick whose sqrt price is `<= sqrt_price_x96`.
///
/// A float logarithm gives a first guess which is then corrected against
/// [`tick_to_sqrt_price_x96`], so the result is exact at tick boundaries.
pub fn sqrt_price_x96_to_tick(sqrt_price_x96: U256) -> Result<i32, StateError> {
    if sqrt_price_x96 < MIN_SQRT_RATIO || sqrt_price_x96 >= MAX_SQRT_RATIO {
        return Err(StateError::SqrtPriceOutOfBounds);
    }

    let approximate = (q96_to_f64(sqrt_price_x96).ln() / LN_SQRT_TICK_BASE).floor();
    let mut tick = clamp_tick(approximate as i32);

    while tick < MAX_TICK && tick_to_sqrt_price_x96(tick + 1)? <= sqrt_price_x96 {
        tick += 1;
    }
    while tick > MIN_TICK && tick_to_sqrt_price_x96(tick)? > sqrt_price_x96 {
        tick -= 1;
    }

    Ok(tick)
}

#[cfg(test)]
mod test {
    use super::*;

    use std::{ops::Sub, str::FromStr};

    #[test]
    fn test_tick_to_sqrt_price_bounds() {
        assert_eq!(
            tick_to_sqrt_price_x96(MIN_TICK - 1),
            Err(StateError::TickOutOfBounds(MIN_TICK - 1))
        );
        assert_eq!(
            tick_to_sqrt_price_x96(MAX_TICK + 1),
            Err(StateError::TickOutOfBounds(MAX_TICK + 1))
        );
        assert_eq!(
            tick_to_sqrt_price_x96(i32::MIN),
            Err(StateError::TickOutOfBounds(i32::MIN))
        );
    }

    #[test]
    fn test_clamp_tick() {
        assert_eq!(clamp_tick(MIN_TICK - 100), MIN_TICK);
        assert_eq!(clamp_tick(MAX_TICK + 100), MAX_TICK);
        assert_eq!(clamp_tick(195543), 195543);
        assert!(tick_to_sqrt_price_x96(clamp_tick(i32::MAX)).is_ok());
    }

    #[test]
    fn test_tick_to_sqrt_price_values() {
        assert_eq!(
            tick_to_sqrt_price_x96(MIN_TICK).unwrap(),
            MIN_SQRT_RATIO,
            "sqrt ratio at min incorrect"
        );
        assert_eq!(
            tick_to_sqrt_price_x96(MIN_TICK + 1).unwrap(),
            U256::from(4295343490u64),
            "sqrt ratio at min + 1 incorrect"
        );
        assert_eq!(
            tick_to_sqrt_price_x96(MAX_TICK).unwrap(),
            MAX_SQRT_RATIO,
            "sqrt ratio at max incorrect"
        );
        assert_eq!(
            tick_to_sqrt_price_x96(0).unwrap(),
            U256::ONE << 96,
            "sqrt ratio at 0 incorrect"
        );
        assert_eq!(
            tick_to_sqrt_price_x96(50).unwrap(),
            U256::from(79426470787362580746886972461u128),
            "sqrt ratio at 50 incorrect"
        );
        assert_eq!(
            tick_to_sqrt_price_x96(5000).unwrap(),
            U256::from(101729702841318637793976746270u128),
            "sqrt ratio at 5000 incorrect"
        );
        assert_eq!(
            tick_to_sqrt_price_x96(150000).unwrap(),
            U256::from(143194173941309278083010301478497u128),
            "sqrt ratio at 150000 incorrect"
        );
        assert_eq!(
            tick_to_sqrt_price_x96(500000).unwrap(),
            U256::from_str("5697689776495288729098254600827762987878").unwrap(),
            "sqrt ratio at 500000 incorrect"
        );
    }

    #[test]
    fn test_sqrt_price_to_tick_bounds() {
        assert_eq!(
            sqrt_price_x96_to_tick(MIN_SQRT_RATIO.sub(U256::ONE)),
            Err(StateError::SqrtPriceOutOfBounds)
        );
        assert_eq!(
            sqrt_price_x96_to_tick(MAX_SQRT_RATIO),
            Err(StateError::SqrtPriceOutOfBounds)
        );
        assert_eq!(sqrt_price_x96_to_tick(MIN_SQRT_RATIO).unwrap(), MIN_TICK);
        assert_eq!(
            sqrt_price_x96_to_tick(U256::from(4295343490u64)).unwrap(),
            MIN_TICK + 1
        );
        assert_eq!(
            sqrt_price_x96_to_tick(MAX_SQRT_RATIO - U256::ONE).unwrap(),
            MAX_TICK - 1
        );
    }

    #[test]
    fn test_sqrt_price_to_tick_is_exact_at_boundaries() {
        for tick in [-887000, -200000, -195543, -1, 0, 1, 60, 195540, 195543, 200000, 887000] {
            let sqrt_price = tick_to_sqrt_price_x96(tick).unwrap();
            assert_eq!(sqrt_price_x96_to_tick(sqrt_price).unwrap(), tick);
            // one unit below a boundary belongs to the tick beneath
            assert_eq!(
                sqrt_price_x96_to_tick(sqrt_price - U256::ONE).unwrap(),
                tick - 1
            );
        }
    }

    #[test]
    fn test_sqrt_price_to_tick_between_boundaries() {
        let lower = tick_to_sqrt_price_x96(195543).unwrap();
        let upper = tick_to_sqrt_price_x96(195544).unwrap();
        let midpoint = (lower + upper) >> 1;

        assert_eq!(sqrt_price_x96_to_tick(midpoint).unwrap(), 195543);
    }
}
