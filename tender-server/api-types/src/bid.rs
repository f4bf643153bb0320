use {
    crate::tender::{
        TenderContext,
        TenderId,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    strum::Display,
    utoipa::{
        IntoParams,
        ToResponse,
        ToSchema,
    },
};

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum BidStatus {
    Pending,
    Approved,
    Rejected,
}

/// Bidder profile and bid amount as entered on the bid form. Fields left out of the request
/// are treated as not filled in and rejected by the server with a list of the missing fields.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct BidForm {
    /// Bid amount in INR.
    #[serde(default)]
    #[schema(example = 150000.0)]
    pub bid_in_inr:             f64,
    #[serde(default)]
    #[schema(example = "9876543210")]
    pub mobile_number:          String,
    #[serde(default)]
    #[schema(example = "12 MG Road, Bengaluru")]
    pub address:                String,
    /// Monthly salary of the bidder. Required.
    #[schema(example = 4000.0)]
    pub salary:                 Option<f64>,
    #[serde(default)]
    #[schema(example = "Civil contractor")]
    pub occupation:             String,
    /// Number of tenders the bidder took part in before.
    #[serde(default)]
    #[schema(example = 3)]
    pub previous_tenders_count: u32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct BidCreate {
    #[serde(flatten)]
    pub tender: TenderContext,
    #[serde(flatten)]
    pub form:   BidForm,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct BidQuoteRequest {
    #[serde(flatten)]
    pub tender:     TenderContext,
    /// Bid amount in INR.
    #[serde(default)]
    #[schema(example = 150000.0)]
    pub bid_in_inr: f64,
}

/// Conversion of a bid amount and the tender minimum between INR and ETH.
#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug, PartialEq)]
pub struct BidQuote {
    /// Price of one ETH in INR used for the conversion.
    #[schema(example = 250000.0)]
    pub exchange_rate:      f64,
    /// Tender minimum bid converted to INR.
    #[schema(example = 125000.0)]
    pub minimum_bid_in_inr: f64,
    #[schema(example = 150000.0)]
    pub bid_in_inr:         f64,
    /// Bid amount converted to ETH.
    #[schema(example = 0.6)]
    pub bid_in_eth:         f64,
    /// Set when the bid is below the tender minimum. Such bids are still accepted.
    pub below_minimum:      bool,
}

/// A bid as stored for a tender.
#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug, PartialEq)]
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
    #[schema(example = "0xe0B91993111a6C70f3E938438b82eAAe79206b4B")]
    pub bidder_wallet:          String,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug, PartialEq)]
pub struct BidResult {
    #[schema(example = "OK")]
    pub status: String,
    pub bid:    Bid,
    pub quote:  BidQuote,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug, PartialEq)]
pub struct Bids {
    pub items: Vec<Bid>,
}

#[derive(Serialize, Deserialize, IntoParams, Clone, Debug, Default)]
pub struct GetBidsQueryParams {
    /// Only return bids placed on this tender.
    #[param(example = "42", value_type = Option<String>)]
    pub tender_id: Option<String>,
}
