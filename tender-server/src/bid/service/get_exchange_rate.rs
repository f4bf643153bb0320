use {
    super::Service,
    crate::bid::entities,
};

impl Service {
    /// Current price of the base currency in the quote currency, or the fallback rate.
    pub async fn get_exchange_rate(&self) -> entities::ExchangeRate {
        let rate = self
            .exchange_rate
            .get_rate(&self.config.base_currency, &self.config.quote_currency)
            .await;
        entities::ExchangeRate {
            base: self.config.base_currency.clone(),
            quote: self.config.quote_currency.clone(),
            rate,
        }
    }
}
