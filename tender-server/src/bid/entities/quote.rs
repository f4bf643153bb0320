/// Conversion of a bid between the local currency and the cryptocurrency.
///
/// Every amount is computed up front, so a bid below the tender minimum still carries its
/// cryptocurrency equivalent.
#[derive(Clone, Debug, PartialEq)]
pub struct BidQuote {
    /// Price of one unit of the cryptocurrency in the local currency.
    pub exchange_rate:      f64,
    pub minimum_bid_in_inr: f64,
    pub bid_in_inr:         f64,
    pub bid_in_eth:         f64,
    pub below_minimum:      bool,
}

impl BidQuote {
    pub fn new(exchange_rate: f64, min_bid_crypto: f64, bid_in_inr: f64) -> Self {
        let minimum_bid_in_inr = min_bid_crypto * exchange_rate;
        Self {
            exchange_rate,
            minimum_bid_in_inr,
            bid_in_inr,
            bid_in_eth: bid_in_inr / exchange_rate,
            below_minimum: bid_in_inr < minimum_bid_in_inr,
        }
    }

    pub fn display_minimum_bid_in_inr(&self) -> String {
        format!("{:.2}", self.minimum_bid_in_inr)
    }

    pub fn display_bid_in_eth(&self) -> String {
        format!("{:.6}", self.bid_in_eth)
    }
}
