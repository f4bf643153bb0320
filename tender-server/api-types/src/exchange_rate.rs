use {
    serde::{
        Deserialize,
        Serialize,
    },
    utoipa::{
        ToResponse,
        ToSchema,
    },
};

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug, PartialEq)]
pub struct ExchangeRate {
    /// The currency being priced.
    #[schema(example = "ethereum")]
    pub base:  String,
    /// The currency the price is expressed in.
    #[schema(example = "inr")]
    pub quote: String,
    /// Price of one unit of `base` in `quote`.
    #[schema(example = 250000.0)]
    pub rate:  f64,
}
