use {
    super::{
        entities,
        service::{
            get_bids::GetBidsInput,
            quote_bid::QuoteBidInput,
            submit_bid::SubmitBidInput,
        },
    },
    crate::{
        api::RestError,
        state::Store,
    },
    axum::{
        extract::{
            Query,
            State,
        },
        Json,
    },
    std::sync::Arc,
    tender_api_types::{
        bid::{
            Bid,
            BidCreate,
            BidForm,
            BidQuote,
            BidQuoteRequest,
            BidResult,
            BidStatus,
            Bids,
            GetBidsQueryParams,
        },
        exchange_rate::ExchangeRate,
        tender::TenderContext,
        ErrorBodyResponse,
    },
};

/// Place a bid on the selected tender.
///
/// The bid amount is converted to ETH with the current exchange rate. Bids below the tender
/// minimum are accepted and flagged in the returned quote. The tender must already appear in the
/// bid store.
#[utoipa::path(post, path = "/v1/bids", request_body = BidCreate, responses(
    (status = 200, description = "Bid was placed successfully", body = BidResult),
    (status = 400, response = ErrorBodyResponse),
    (status = 404, description = "Tender was not found", body = ErrorBodyResponse),
    (status = 503, description = "Bid store is unavailable", body = ErrorBodyResponse),
),)]
pub async fn post_bid(
    State(store): State<Arc<Store>>,
    Json(bid_create): Json<BidCreate>,
) -> Result<Json<BidResult>, RestError> {
    let output = store
        .bid_service
        .submit_bid(SubmitBidInput {
            context: bid_create.tender.into(),
            form:    bid_create.form.into(),
        })
        .await?;
    Ok(Json(BidResult {
        status: "OK".to_string(),
        bid:    output.bid.into(),
        quote:  output.quote.into(),
    }))
}

/// Convert a bid amount for the selected tender and compare it with the tender minimum.
#[utoipa::path(post, path = "/v1/bids/quote", request_body = BidQuoteRequest, responses(
    (status = 200, body = BidQuote),
    (status = 400, response = ErrorBodyResponse),
),)]
pub async fn post_bid_quote(
    State(store): State<Arc<Store>>,
    Json(request): Json<BidQuoteRequest>,
) -> Result<Json<BidQuote>, RestError> {
    let quote = store
        .bid_service
        .quote_bid(QuoteBidInput {
            context:    request.tender.into(),
            bid_in_inr: request.bid_in_inr,
        })
        .await?;
    Ok(Json(quote.into()))
}

/// List stored bids, optionally only those of a single tender.
#[utoipa::path(get, path = "/v1/bids", params(GetBidsQueryParams), responses(
    (status = 200, body = Bids),
    (status = 503, description = "Bid store is unavailable", body = ErrorBodyResponse),
),)]
pub async fn get_bids(
    State(store): State<Arc<Store>>,
    Query(params): Query<GetBidsQueryParams>,
) -> Result<Json<Bids>, RestError> {
    let bids = store
        .bid_service
        .get_bids(GetBidsInput {
            tender_id: params.tender_id,
        })
        .await?;
    Ok(Json(Bids {
        items: bids.into_iter().map(Bid::from).collect(),
    }))
}

/// Current price of one ETH in INR. Falls back to a fixed rate when the price service is down.
#[utoipa::path(get, path = "/v1/exchange-rate", responses(
    (status = 200, body = ExchangeRate),
),)]
pub async fn get_exchange_rate(State(store): State<Arc<Store>>) -> Json<ExchangeRate> {
    Json(store.bid_service.get_exchange_rate().await.into())
}

impl From<TenderContext> for entities::TenderContext {
    fn from(context: TenderContext) -> Self {
        Self {
            tender_id:      context.tender_id,
            tender_name:    context.tender_name,
            tender_min_bid: context.tender_min_bid,
        }
    }
}

impl From<BidForm> for entities::BidForm {
    fn from(form: BidForm) -> Self {
        Self {
            bid_in_inr:             form.bid_in_inr,
            mobile_number:          form.mobile_number,
            address:                form.address,
            salary:                 form.salary,
            occupation:             form.occupation,
            previous_tenders_count: form.previous_tenders_count,
        }
    }
}

impl From<entities::BidStatus> for BidStatus {
    fn from(status: entities::BidStatus) -> Self {
        match status {
            entities::BidStatus::Pending => BidStatus::Pending,
            entities::BidStatus::Approved => BidStatus::Approved,
            entities::BidStatus::Rejected => BidStatus::Rejected,
        }
    }
}

impl From<entities::Bid> for Bid {
    fn from(bid: entities::Bid) -> Self {
        Self {
            tender_id:              bid.tender_id,
            tender_name:            bid.tender_name,
            bid_in_inr:             bid.bid_in_inr,
            bid_in_eth:             bid.bid_in_eth,
            mobile_number:          bid.mobile_number,
            address:                bid.address,
            salary:                 bid.salary,
            occupation:             bid.occupation,
            previous_tenders_count: bid.previous_tenders_count,
            status:                 bid.status.into(),
            bidder_wallet:          bid.bidder_wallet,
        }
    }
}

impl From<entities::ExchangeRate> for ExchangeRate {
    fn from(exchange_rate: entities::ExchangeRate) -> Self {
        Self {
            base:  exchange_rate.base,
            quote: exchange_rate.quote,
            rate:  exchange_rate.rate,
        }
    }
}

impl From<entities::BidQuote> for BidQuote {
    fn from(quote: entities::BidQuote) -> Self {
        Self {
            exchange_rate:      quote.exchange_rate,
            minimum_bid_in_inr: quote.minimum_bid_in_inr,
            bid_in_inr:         quote.bid_in_inr,
            bid_in_eth:         quote.bid_in_eth,
            below_minimum:      quote.below_minimum,
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::bid::{
            repository::MockStorage,
            service::tests::get_service,
        },
        serde_json::json,
        tender_api_types::tender::TenderId,
    };

    #[test]
    fn test_bid_create_from_flat_json() {
        let bid_create: BidCreate = serde_json::from_value(json!({
            "tender_id": 3,
            "tender_name": "Bridge repair",
            "tender_min_bid": 0.5,
            "bid_in_inr": 150000.0,
            "mobile_number": "9876543210",
            "address": "12 MG Road, Bengaluru",
            "salary": 4000,
            "occupation": "Civil contractor",
            "previous_tenders_count": 3,
        }))
        .unwrap();
        let context: entities::TenderContext = bid_create.tender.into();
        assert_eq!(context.tender_id, Some(TenderId::Number(3)));
        assert_eq!(context.tender_min_bid, Some(0.5));
        let form: entities::BidForm = bid_create.form.into();
        assert_eq!(form.salary, Some(4000.));
        assert_eq!(form.previous_tenders_count, 3);
    }

    #[test]
    fn test_bid_create_without_tender_or_salary() {
        let bid_create: BidCreate = serde_json::from_value(json!({
            "bid_in_inr": 150000.0,
            "mobile_number": "9876543210",
            "address": "12 MG Road, Bengaluru",
            "occupation": "Civil contractor",
        }))
        .unwrap();
        let context: entities::TenderContext = bid_create.tender.into();
        assert_eq!(context, entities::TenderContext::default());
        assert_eq!(bid_create.form.salary, None);
        assert_eq!(bid_create.form.previous_tenders_count, 0);
    }

    #[tokio::test]
    async fn test_bid_create_with_missing_fields() {
        let bid_create: BidCreate = serde_json::from_value(json!({
            "tender_id": 3,
            "salary": 4000,
            "occupation": "Civil contractor",
        }))
        .unwrap();
        assert_eq!(bid_create.form.bid_in_inr, 0.);
        assert_eq!(bid_create.form.mobile_number, "");

        let mut storage = MockStorage::new();
        storage.expect_load().never();
        storage.expect_save().never();
        let result = get_service(storage, 2000.)
            .submit_bid(SubmitBidInput {
                context: bid_create.tender.into(),
                form:    bid_create.form.into(),
            })
            .await;
        assert_eq!(
            result.err(),
            Some(RestError::InvalidInput(
                "Please fill in all required fields (bid amount, mobile number, address)"
                    .to_string()
            ))
        );
    }

    #[test]
    fn test_bid_quote_request_without_amount() {
        let request: BidQuoteRequest =
            serde_json::from_value(json!({"tender_id": "TND-1"})).unwrap();
        assert_eq!(request.bid_in_inr, 0.);
        assert_eq!(
            request.tender.tender_id,
            Some(TenderId::Text("TND-1".to_string()))
        );
    }

    #[test]
    fn test_bid_into_api() {
        let bid: Bid = entities::Bid {
            tender_id:              TenderId::Text("TND-1".to_string()),
            tender_name:            "Street lights".to_string(),
            bid_in_inr:             10000.,
            bid_in_eth:             5.,
            mobile_number:          "9000000001".to_string(),
            address:                "1 Park Street, Kolkata".to_string(),
            salary:                 3000.,
            occupation:             "Electrician".to_string(),
            previous_tenders_count: 0,
            status:                 entities::BidStatus::Pending,
            bidder_wallet:          "0xabc".to_string(),
        }
        .into();
        assert_eq!(
            serde_json::to_value(bid).unwrap(),
            json!({
                "tender_id": "TND-1",
                "tender_name": "Street lights",
                "bid_in_inr": 10000.0,
                "bid_in_eth": 5.0,
                "mobile_number": "9000000001",
                "address": "1 Park Street, Kolkata",
                "salary": 3000.0,
                "occupation": "Electrician",
                "previous_tenders_count": 0,
                "status": "Pending",
                "bidder_wallet": "0xabc",
            })
        );
    }
}
