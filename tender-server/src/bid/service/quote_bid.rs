use {
    super::Service,
    crate::{
        api::RestError,
        bid::entities,
    },
};

pub struct QuoteBidInput {
    pub context:    entities::TenderContext,
    pub bid_in_inr: f64,
}

impl Service {
    pub(super) async fn get_quote(
        &self,
        tender: &entities::Tender,
        bid_in_inr: f64,
    ) -> entities::BidQuote {
        let rate = self
            .exchange_rate
            .get_rate(&self.config.base_currency, &self.config.quote_currency)
            .await;
        let quote = entities::BidQuote::new(rate, tender.min_bid_crypto, bid_in_inr);
        if quote.below_minimum {
            tracing::warn!(
                tender_id = tender.id.to_string(),
                bid_in_inr = bid_in_inr,
                "Bid amount must be greater than the minimum bid of {} INR",
                quote.display_minimum_bid_in_inr()
            );
        }
        quote
    }

    /// Converts a bid amount for the selected tender and checks it against the tender minimum.
    /// A bid below the minimum is reported, not rejected.
    #[tracing::instrument(skip_all)]
    pub async fn quote_bid(&self, input: QuoteBidInput) -> Result<entities::BidQuote, RestError> {
        let tender = Self::resolve_tender(&input.context)?;
        Self::verify_bid_amount(input.bid_in_inr)?;
        Ok(self.get_quote(&tender, input.bid_in_inr).await)
    }
}
