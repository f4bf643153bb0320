pub use tender_api_types::tender::TenderId;

pub const UNNAMED_TENDER: &str = "No tender selected";

/// Tender selection the bidder arrived with. Every field may be missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TenderContext {
    pub tender_id:      Option<TenderId>,
    pub tender_name:    Option<String>,
    pub tender_min_bid: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tender {
    pub id:             TenderId,
    pub name:           String,
    /// Minimum bid denominated in the cryptocurrency.
    pub min_bid_crypto: f64,
}

impl TenderContext {
    /// Returns `None` when no tender was selected. A zero or empty id counts as no selection.
    pub fn resolve(&self) -> Option<Tender> {
        let id = self
            .tender_id
            .clone()
            .filter(|tender_id| !tender_id.is_blank())?;
        Some(Tender {
            id,
            name: self
                .tender_name
                .clone()
                .unwrap_or_else(|| UNNAMED_TENDER.to_string()),
            min_bid_crypto: self.tender_min_bid.unwrap_or(0.),
        })
    }
}
