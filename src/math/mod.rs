pub mod conversion;
pub mod math_helpers;
pub mod price_math;
pub mod reserves;
pub mod sqrt_price_math;
pub mod tick_math;
pub mod tick_range;
