use {
    super::{
        verification::VerifiedBidForm,
        Service,
    },
    crate::{
        api::RestError,
        bid::entities,
        tender_metrics::BID_SUBMISSIONS_TOTAL,
    },
    axum_prometheus::metrics,
};

pub struct SubmitBidInput {
    pub context: entities::TenderContext,
    pub form:    entities::BidForm,
}

pub struct SubmitBidOutput {
    pub bid:   entities::Bid,
    pub quote: entities::BidQuote,
}

impl Service {
    /// Places a bid on the selected tender. The bid is stored with status `Pending` only when
    /// the tender already appears in the store.
    #[tracing::instrument(skip_all, fields(tender_id))]
    pub async fn submit_bid(&self, input: SubmitBidInput) -> Result<SubmitBidOutput, RestError> {
        let tender = Self::resolve_tender(&input.context)?;
        tracing::Span::current().record("tender_id", tender.id.to_string());

        let result = self.place_bid(tender, input.form).await;
        let result_label = match &result {
            Ok(_) => "success",
            Err(RestError::NoTenderSelected) => "no_tender_selected",
            Err(RestError::InvalidInput(_)) => "invalid_input",
            Err(RestError::TenderNotFound(_)) => "tender_not_found",
            Err(RestError::StorageUnavailable) => "storage_unavailable",
        };
        metrics::counter!(BID_SUBMISSIONS_TOTAL, &[("result", result_label.to_string())])
            .increment(1);
        result
    }

    async fn place_bid(
        &self,
        tender: entities::Tender,
        form: entities::BidForm,
    ) -> Result<SubmitBidOutput, RestError> {
        let VerifiedBidForm { form, salary } = Self::verify_bid_form(form)?;
        let quote = self.get_quote(&tender, form.bid_in_inr).await;

        let bid = self
            .repo
            .add_bid(entities::Bid {
                tender_id: tender.id,
                tender_name: tender.name,
                bid_in_inr: form.bid_in_inr,
                bid_in_eth: quote.bid_in_eth,
                mobile_number: form.mobile_number,
                address: form.address,
                salary,
                occupation: form.occupation,
                previous_tenders_count: form.previous_tenders_count,
                status: entities::BidStatus::Pending,
                bidder_wallet: self.config.bidder_wallet.clone(),
            })
            .await?;
        tracing::info!(
            status = %bid.status,
            bid_in_eth = quote.display_bid_in_eth(),
            below_minimum = quote.below_minimum,
            "Bid of {} INR placed successfully",
            bid.bid_in_inr
        );
        Ok(SubmitBidOutput { bid, quote })
    }
}
