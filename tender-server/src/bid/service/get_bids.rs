use {
    super::Service,
    crate::{
        api::RestError,
        bid::entities,
    },
};

pub struct GetBidsInput {
    pub tender_id: Option<String>,
}

impl Service {
    pub async fn get_bids(&self, input: GetBidsInput) -> Result<Vec<entities::Bid>, RestError> {
        self.repo.get_bids(input.tender_id.as_deref()).await
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::bid::{
            repository::{
                MockStorage,
                Record,
            },
            service::tests::{
                get_service,
                get_tender_record,
            },
        },
        serde_json::json,
    };

    fn get_bid_record(tender_id: serde_json::Value) -> Record {
        serde_json::from_value(json!({
            "tender_id": tender_id,
            "tender_name": "Bridge repair",
            "bid_in_inr": 150000.0,
            "bid_in_eth": 0.6,
            "mobile_number": "9876543210",
            "address": "12 MG Road, Bengaluru",
            "salary": 4000.0,
            "occupation": "Civil contractor",
            "previous_tenders_count": 3,
            "status": "Pending",
            "bidder_wallet": "0xe0B91993111a6C70f3E938438b82eAAe79206b4B",
        }))
        .unwrap()
    }

    fn get_storage() -> MockStorage {
        let mut storage = MockStorage::new();
        storage.expect_load().returning(|| {
            Ok(vec![
                get_tender_record(json!(3)),
                get_bid_record(json!(3)),
                get_bid_record(json!(4)),
            ])
        });
        storage.expect_save().never();
        storage
    }

    #[tokio::test]
    async fn test_get_bids_with_filter() {
        let bids = get_service(get_storage(), 2000.)
            .get_bids(GetBidsInput {
                tender_id: Some("4".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0].tender_id, entities::TenderId::Number(4));
    }

    #[tokio::test]
    async fn test_get_bids_without_filter() {
        let bids = get_service(get_storage(), 2000.)
            .get_bids(GetBidsInput { tender_id: None })
            .await
            .unwrap();
        assert_eq!(
            bids.into_iter()
                .map(|bid| bid.tender_id)
                .collect::<Vec<_>>(),
            vec![entities::TenderId::Number(3), entities::TenderId::Number(4)]
        );
    }
}
