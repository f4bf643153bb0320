use {
    super::{
        models,
        Repository,
    },
    crate::{
        api::RestError,
        bid::entities,
    },
};

impl Repository {
    /// Appends a bid to the store, provided its tender already appears in the store.
    pub async fn add_bid(&self, bid: entities::Bid) -> Result<entities::Bid, RestError> {
        let _write_guard = self.write_lock.lock().await;
        let mut records = self.storage.load().await.map_err(|e| {
            tracing::error!(error = format!("{:#}", e), "Failed to read bids from store");
            RestError::StorageUnavailable
        })?;

        if !records
            .iter()
            .any(|record| record.tender_id.as_ref() == Some(&bid.tender_id))
        {
            return Err(RestError::TenderNotFound(bid.tender_id));
        }

        let record = models::Record::try_from(models::Bid::new_from(bid.clone())).map_err(|e| {
            tracing::error!(error = e.to_string(), bid = ?bid, "Failed to convert bid to record");
            RestError::StorageUnavailable
        })?;
        records.push(record);

        self.storage.save(&records).await.map_err(|e| {
            tracing::error!(
                error = format!("{:#}", e),
                bid = ?bid,
                "Failed to write bids to store"
            );
            RestError::StorageUnavailable
        })?;
        Ok(bid)
    }
}
