use {
    anyhow::Result,
    clap::{
        crate_authors,
        crate_description,
        crate_name,
        crate_version,
        Args,
        Parser,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    std::{
        fs,
        path::PathBuf,
        time::Duration,
    },
};

mod server;

// `Options` is a structup definition to provide clean command-line args for the tender server.
#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub enum Options {
    /// Run the tender bid server.
    Run(RunOptions),
}

#[derive(Args, Clone, Debug)]
pub struct RunOptions {
    /// Server Options
    #[command(flatten)]
    pub server: server::Options,

    #[command(flatten)]
    pub config: ConfigOptions,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Config Options")]
#[group(id = "Config")]
pub struct ConfigOptions {
    /// Path to a configuration file with the bid store and price service settings.
    #[arg(long = "config")]
    #[arg(env = "TENDER_CONFIG")]
    #[arg(default_value = "config.yaml")]
    pub config: String,
}

pub const DEFAULT_STORE_PATH: &str = "all_tenders_applications.json";
pub const DEFAULT_PRICE_SERVICE_URL: &str = "https://api.coingecko.com/api/v3/simple/price";
pub const DEFAULT_FALLBACK_RATE: f64 = 2000.0;
pub const DEFAULT_BIDDER_WALLET: &str = "0xe0B91993111a6C70f3E938438b82eAAe79206b4B";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Path of the JSON file holding the bids of all tenders.
    #[serde(default = "default_store_path")]
    pub store_path:    PathBuf,
    #[serde(default)]
    pub price_service: PriceServiceConfig,
    /// Wallet recorded on every bid. Bids are not submitted on chain.
    #[serde(default = "default_bidder_wallet")]
    pub bidder_wallet: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Config> {
        let yaml_content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&yaml_content)?;
        Ok(config)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PriceServiceConfig {
    /// Url of a price endpoint answering `?ids=<base>&vs_currencies=<quote>`.
    #[serde(default = "default_price_service_url")]
    pub url:           String,
    /// Id of the cryptocurrency bids are converted to.
    #[serde(default = "default_base")]
    pub base:          String,
    /// Id of the local currency bids are placed in.
    #[serde(default = "default_quote")]
    pub quote:         String,
    /// Rate used whenever the price service cannot be reached or answers with garbage.
    #[serde(default = "default_fallback_rate")]
    pub fallback_rate: f64,
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout:       Duration,
}

impl Default for PriceServiceConfig {
    fn default() -> Self {
        Self {
            url:           default_price_service_url(),
            base:          default_base(),
            quote:         default_quote(),
            fallback_rate: default_fallback_rate(),
            timeout:       default_timeout(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

fn default_bidder_wallet() -> String {
    DEFAULT_BIDDER_WALLET.to_string()
}

fn default_price_service_url() -> String {
    DEFAULT_PRICE_SERVICE_URL.to_string()
}

fn default_base() -> String {
    "ethereum".to_string()
}

fn default_quote() -> String {
    "inr".to_string()
}

fn default_fallback_rate() -> f64 {
    DEFAULT_FALLBACK_RATE
}

fn default_timeout() -> Duration {
    Duration::from_secs(5)
}
