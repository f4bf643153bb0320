use {
    super::repository::{
        Repository,
        Storage,
    },
    crate::kernel::exchange_rate::ExchangeRate,
    std::sync::Arc,
};

pub mod get_bids;
pub mod get_exchange_rate;
pub mod quote_bid;
pub mod submit_bid;
mod verification;

pub struct Config {
    /// Currency bids are converted to.
    pub base_currency:  String,
    /// Currency bids are placed in.
    pub quote_currency: String,
    pub bidder_wallet:  String,
}

pub struct Service {
    config:        Config,
    repo:          Arc<Repository>,
    exchange_rate: Arc<dyn ExchangeRate>,
}

impl Service {
    pub fn new(storage: impl Storage, exchange_rate: impl ExchangeRate, config: Config) -> Self {
        Self {
            config,
            repo: Arc::new(Repository::new(storage)),
            exchange_rate: Arc::new(exchange_rate),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use {
        super::*,
        crate::{
            bid::repository::{
                MockStorage,
                Record,
            },
            kernel::exchange_rate::MockExchangeRate,
        },
        serde_json::{
            json,
            Map,
        },
    };

    pub const BIDDER_WALLET: &str = "0xe0B91993111a6C70f3E938438b82eAAe79206b4B";

    pub fn get_config() -> Config {
        Config {
            base_currency:  "ethereum".to_string(),
            quote_currency: "inr".to_string(),
            bidder_wallet:  BIDDER_WALLET.to_string(),
        }
    }

    pub fn get_exchange_rate(rate: f64) -> MockExchangeRate {
        let mut exchange_rate = MockExchangeRate::new();
        exchange_rate
            .expect_get_rate()
            .withf(|base, quote| base.to_string() == "ethereum" && quote.to_string() == "inr")
            .returning(move |_, _| rate);
        exchange_rate
    }

    pub fn get_tender_record(tender_id: serde_json::Value) -> Record {
        let mut fields = Map::new();
        fields.insert("tender_name".to_string(), json!("Bridge repair"));
        fields.insert("min_bid".to_string(), json!(0.5));
        Record {
            tender_id: serde_json::from_value(tender_id).unwrap(),
            fields,
        }
    }

    pub fn get_service(storage: MockStorage, rate: f64) -> Service {
        Service::new(storage, get_exchange_rate(rate), get_config())
    }
}
