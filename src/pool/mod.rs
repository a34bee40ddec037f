pub mod price_math;
pub mod snapshot;
