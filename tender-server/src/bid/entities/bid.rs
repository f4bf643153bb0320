use {
    super::TenderId,
    std::fmt::{
        Display,
        Formatter,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BidStatus {
    Pending,
    Approved,
    Rejected,
}

impl Display for BidStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BidStatus::Pending => write!(f, "Pending"),
            BidStatus::Approved => write!(f, "Approved"),
            BidStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// Bid amount and bidder profile as entered by the bidder, before any validation.
#[derive(Clone, Debug, PartialEq)]
pub struct BidForm {
    pub bid_in_inr:             f64,
    pub mobile_number:          String,
    pub address:                String,
    pub salary:                 Option<f64>,
    pub occupation:             String,
    pub previous_tenders_count: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bid {
    pub tender_id:              TenderId,
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
