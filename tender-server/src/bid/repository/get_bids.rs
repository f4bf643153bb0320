use {
    super::Repository,
    crate::{
        api::RestError,
        bid::entities,
    },
};

impl Repository {
    /// Bids placed through the bid form, optionally limited to the tender whose id displays as
    /// `tender_id`. Entries of the store that are not bids are skipped.
    pub async fn get_bids(
        &self,
        tender_id: Option<&str>,
    ) -> Result<Vec<entities::Bid>, RestError> {
        let records = self.storage.load().await.map_err(|e| {
            tracing::error!(error = format!("{:#}", e), "Failed to read bids from store");
            RestError::StorageUnavailable
        })?;

        Ok(records
            .into_iter()
            .filter(|record| match tender_id {
                Some(tender_id) => record
                    .tender_id
                    .as_ref()
                    .is_some_and(|id| id.to_string() == tender_id),
                None => true,
            })
            .filter_map(|record| {
                record
                    .get_bid()
                    .map_err(|e| {
                        tracing::debug!(
                            error = e.to_string(),
                            tender_id = ?record.tender_id,
                            "Skipping store entry that is not a bid"
                        );
                    })
                    .ok()
            })
            .map(|bid| bid.get_bid_entity())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::bid::repository::{
            MockStorage,
            Record,
        },
        serde_json::{
            json,
            Value,
        },
    };

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    fn bid_record(tender_id: Value, mobile_number: &str) -> Record {
        record(json!({
            "tender_id": tender_id,
            "tender_name": "Street lights",
            "bid_in_inr": 10000,
            "bid_in_eth": 5,
            "mobile_number": mobile_number,
            "address": "1 Park Street, Kolkata",
            "salary": 3000,
            "occupation": "Electrician",
            "previous_tenders_count": 0,
            "status": "Approved",
            "bidder_wallet": "0xe0B91993111a6C70f3E938438b82eAAe79206b4B",
        }))
    }

    fn get_repository() -> Repository {
        let mut storage = MockStorage::new();
        storage.expect_load().returning(|| {
            Ok(vec![
                record(json!({"tender_id": 7, "tender_name": "Street lights"})),
                bid_record(json!(7), "9000000001"),
                bid_record(json!("7"), "9000000002"),
                bid_record(json!(8), "9000000003"),
            ])
        });
        Repository::new(storage)
    }

    #[tokio::test]
    async fn test_get_all_bids() {
        let bids = get_repository().get_bids(None).await.unwrap();
        assert_eq!(
            bids.iter()
                .map(|bid| bid.mobile_number.as_str())
                .collect::<Vec<_>>(),
            vec!["9000000001", "9000000002", "9000000003"]
        );
        assert!(bids
            .iter()
            .all(|bid| bid.status == entities::BidStatus::Approved));
    }

    #[tokio::test]
    async fn test_get_bids_for_tender() {
        let bids = get_repository().get_bids(Some("7")).await.unwrap();
        assert_eq!(
            bids.iter()
                .map(|bid| bid.tender_id.clone())
                .collect::<Vec<_>>(),
            vec![
                entities::TenderId::Number(7),
                entities::TenderId::Text("7".to_string())
            ]
        );
        assert!(get_repository()
            .get_bids(Some("9"))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_get_bids_storage_failure() {
        let mut storage = MockStorage::new();
        storage
            .expect_load()
            .returning(|| Err(anyhow::anyhow!("Permission denied")));
        let result = Repository::new(storage).get_bids(None).await;
        assert_eq!(result.unwrap_err(), RestError::StorageUnavailable);
    }
}
