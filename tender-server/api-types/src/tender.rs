use {
    serde::{
        Deserialize,
        Serialize,
    },
    std::fmt::{
        Display,
        Formatter,
    },
    utoipa::ToSchema,
};

/// Identifier of a tender. Tenders created by different parts of the application use either
/// numeric or textual ids, and a numeric id never equals a textual one. Numeric ids compare by
/// value, so `4` equals `4.0`.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
#[serde(untagged)]
pub enum TenderId {
    Number(i64),
    /// Numeric id that is fractional or does not fit an `i64`.
    Float(f64),
    Text(String),
}

impl TenderId {
    /// Ids that stand for no tender at all: zero and empty text.
    pub fn is_blank(&self) -> bool {
        match self {
            TenderId::Number(id) => *id == 0,
            TenderId::Float(id) => *id == 0.,
            TenderId::Text(id) => id.trim().is_empty(),
        }
    }
}

impl PartialEq for TenderId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TenderId::Number(a), TenderId::Number(b)) => a == b,
            (TenderId::Float(a), TenderId::Float(b)) => a == b,
            (TenderId::Number(a), TenderId::Float(b)) | (TenderId::Float(b), TenderId::Number(a)) => {
                *a as f64 == *b
            }
            (TenderId::Text(a), TenderId::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Display for TenderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TenderId::Number(id) => write!(f, "{}", id),
            TenderId::Float(id) => write!(f, "{}", id),
            TenderId::Text(id) => write!(f, "{}", id),
        }
    }
}

/// The tender the bidder selected before opening the bid form.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default, PartialEq)]
pub struct TenderContext {
    /// Id of the selected tender. Missing when no tender was selected.
    pub tender_id:      Option<TenderId>,
    /// Display name of the selected tender.
    #[schema(example = "Road resurfacing, ward 12")]
    pub tender_name:    Option<String>,
    /// Minimum bid of the tender, denominated in ETH.
    #[schema(example = 0.5)]
    pub tender_min_bid: Option<f64>,
}
