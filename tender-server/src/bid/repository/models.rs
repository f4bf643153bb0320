#[cfg(test)]
use mockall::automock;
use {
    super::super::entities,
    axum::async_trait,
    serde::{
        Deserialize,
        Serialize,
    },
    serde_json::{
        Map,
        Value,
    },
    std::fmt::Debug,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BidStatus {
    Pending,
    Approved,
    Rejected,
}

/// One entry of the store. The store is shared with the rest of the tender application, so an
/// entry is only required to carry a `tender_id` key; everything else is kept as is. A `null`
/// id is kept too but never matches a tender.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(deserialize_with = "Option::deserialize")]
    pub tender_id: Option<entities::TenderId>,
    #[serde(flatten)]
    pub fields:    Map<String, Value>,
}

/// An entry placed through the bid form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub tender_id:              entities::TenderId,
    pub tender_name:            String,
    pub bid_in_inr:             f64,
    pub bid_in_eth:             f64,
    pub mobile_number:          String,
    pub address:                String,
    pub salary:                 f64,
    pub occupation:             String,
    pub previous_tenders_count: u32,
    pub status:                 BidStatus,
    pub bidder_wallet:          String,
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

impl From<BidStatus> for entities::BidStatus {
    fn from(status: BidStatus) -> Self {
        match status {
            BidStatus::Pending => entities::BidStatus::Pending,
            BidStatus::Approved => entities::BidStatus::Approved,
            BidStatus::Rejected => entities::BidStatus::Rejected,
        }
    }
}

impl Bid {
    pub fn new_from(bid: entities::Bid) -> Self {
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

    pub fn get_bid_entity(self) -> entities::Bid {
        entities::Bid {
            tender_id:              self.tender_id,
            tender_name:            self.tender_name,
            bid_in_inr:             self.bid_in_inr,
            bid_in_eth:             self.bid_in_eth,
            mobile_number:          self.mobile_number,
            address:                self.address,
            salary:                 self.salary,
            occupation:             self.occupation,
            previous_tenders_count: self.previous_tenders_count,
            status:                 self.status.into(),
            bidder_wallet:          self.bidder_wallet,
        }
    }
}

impl Record {
    pub fn get_bid(&self) -> anyhow::Result<Bid> {
        Ok(serde_json::from_value(serde_json::to_value(self)?)?)
    }
}

impl TryFrom<Bid> for Record {
    type Error = anyhow::Error;

    fn try_from(bid: Bid) -> Result<Self, Self::Error> {
        Ok(serde_json::from_value(serde_json::to_value(bid)?)?)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Storage: Debug + Send + Sync + 'static {
    /// Reads every record. A store that was never written holds no records.
    async fn load(&self) -> anyhow::Result<Vec<Record>>;
    /// Replaces every record.
    async fn save(&self, records: &[Record]) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        serde_json::json,
    };

    fn get_bid() -> Bid {
        Bid {
            tender_id:              entities::TenderId::Number(3),
            tender_name:            "School canteen supplies".to_string(),
            bid_in_inr:             40000.,
            bid_in_eth:             20.,
            mobile_number:          "9000000001".to_string(),
            address:                "4 Lake View, Pune".to_string(),
            salary:                 0.,
            occupation:             "Caterer".to_string(),
            previous_tenders_count: 1,
            status:                 BidStatus::Pending,
            bidder_wallet:          "0xe0B91993111a6C70f3E938438b82eAAe79206b4B".to_string(),
        }
    }

    #[test]
    fn test_record_shape() {
        let record = Record::try_from(get_bid()).unwrap();
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "tender_id": 3,
                "tender_name": "School canteen supplies",
                "bid_in_inr": 40000.0,
                "bid_in_eth": 20.0,
                "mobile_number": "9000000001",
                "address": "4 Lake View, Pune",
                "salary": 0.0,
                "occupation": "Caterer",
                "previous_tenders_count": 1,
                "status": "Pending",
                "bidder_wallet": "0xe0B91993111a6C70f3E938438b82eAAe79206b4B",
            })
        );
        assert_eq!(record.get_bid().unwrap(), get_bid());
    }

    #[test]
    fn test_record_written_elsewhere() {
        let record: Record = serde_json::from_value(json!({
            "tender_id": "TND-1",
            "tender_name": "Street lights",
            "min_bid": 2,
        }))
        .unwrap();
        assert_eq!(
            record.tender_id,
            Some(entities::TenderId::Text("TND-1".to_string()))
        );
        assert!(record.get_bid().is_err());
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"tender_id": "TND-1", "tender_name": "Street lights", "min_bid": 2})
        );
    }

    #[test]
    fn test_record_id_shapes() {
        let record: Record = serde_json::from_value(json!({"tender_id": 4.0})).unwrap();
        assert_eq!(record.tender_id, Some(entities::TenderId::Number(4)));

        let record: Record = serde_json::from_value(json!({"tender_id": null, "min_bid": 1}))
            .unwrap();
        assert_eq!(record.tender_id, None);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"tender_id": null, "min_bid": 1})
        );

        assert!(serde_json::from_value::<Record>(json!({"tender_name": "no id"})).is_err());
    }

    #[test]
    fn test_integer_amounts_are_accepted() {
        let record: Record = serde_json::from_value(json!({
            "tender_id": 3,
            "tender_name": "School canteen supplies",
            "bid_in_inr": 40000,
            "bid_in_eth": 20,
            "mobile_number": "9000000001",
            "address": "4 Lake View, Pune",
            "salary": 0,
            "occupation": "Caterer",
            "previous_tenders_count": 1,
            "status": "Pending",
            "bidder_wallet": "0xe0B91993111a6C70f3E938438b82eAAe79206b4B",
        }))
        .unwrap();
        assert_eq!(record.get_bid().unwrap(), get_bid());
    }
}
