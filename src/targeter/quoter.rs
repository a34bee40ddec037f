use alloy_primitives::U256;

/// Maps a trade magnitude to the sqrt price the pool would end at.
///
/// Implementations are usually backed by a quoter contract or a full
/// pool simulation, so calls may be slow and may fail. The solver owns
/// the quoter mutably for the duration of one solve.
pub trait SqrtPriceQuoter {
    type Error: std::error::Error + Send + Sync + 'static;

    fn quote_sqrt_price(&mut self, amount: U256) -> Result<U256, Self::Error>;
}

impl<F, E> SqrtPriceQuoter for F
where
    F: FnMut(U256) -> Result<U256, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    #[inline]
    fn quote_sqrt_price(&mut self, amount: U256) -> Result<U256, E> {
        self(amount)
    }
}
