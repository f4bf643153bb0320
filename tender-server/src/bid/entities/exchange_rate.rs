/// Price of one unit of `base` expressed in `quote`, possibly the configured fallback.
#[derive(Clone, Debug, PartialEq)]
pub struct ExchangeRate {
    pub base:  String,
    pub quote: String,
    pub rate:  f64,
}
