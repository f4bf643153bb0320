#[cfg(test)]
use mockall::automock;
use {
    crate::{
        config::PriceServiceConfig,
        tender_metrics::EXCHANGE_RATE_REQUESTS_TOTAL,
    },
    anyhow::{
        anyhow,
        Result,
    },
    axum::async_trait,
    axum_prometheus::metrics,
    serde_json::Value,
    url::Url,
};

/// Source of the price of one unit of a base currency expressed in a quote currency.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ExchangeRate: Send + Sync + 'static {
    /// Never fails: when no live price is available a fixed fallback rate is returned instead.
    async fn get_rate(&self, base: &str, quote: &str) -> f64;
}

/// Client for a price service answering in the CoinGecko "simple price" shape,
/// e.g. `{"ethereum": {"inr": 250000.0}}`.
#[derive(Debug, Clone)]
pub struct PriceClient {
    url:           Url,
    client:        reqwest::Client,
    fallback_rate: f64,
}

impl PriceClient {
    pub fn try_new(config: &PriceServiceConfig) -> Result<Self> {
        let url = Url::parse(config.url.as_str())
            .map_err(|e| anyhow!("Invalid price service url {}: {}", config.url, e))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(anyhow!("Invalid price service url scheme: {}", url.scheme()));
        }
        if !config.fallback_rate.is_finite() || config.fallback_rate <= 0. {
            return Err(anyhow!(
                "Fallback rate must be a positive number, got {}",
                config.fallback_rate
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            url,
            client,
            fallback_rate: config.fallback_rate,
        })
    }

    async fn fetch_rate(&self, base: &str, quote: &str) -> Result<f64> {
        let response = self
            .client
            .get(self.url.clone())
            .query(&[("ids", base), ("vs_currencies", quote)])
            .send()
            .await?
            .error_for_status()?;
        let body: Value = response.json().await?;
        parse_rate(&body, base, quote)
    }
}

pub fn parse_rate(body: &Value, base: &str, quote: &str) -> Result<f64> {
    let rate = body
        .get(base)
        .and_then(|prices| prices.get(quote))
        .and_then(Value::as_f64)
        .ok_or_else(|| anyhow!("Price of {} in {} is missing from response", base, quote))?;
    if !rate.is_finite() || rate <= 0. {
        return Err(anyhow!("Price of {} in {} is not positive: {}", base, quote, rate));
    }
    Ok(rate)
}

#[async_trait]
impl ExchangeRate for PriceClient {
    async fn get_rate(&self, base: &str, quote: &str) -> f64 {
        match self.fetch_rate(base, quote).await {
            Ok(rate) => {
                metrics::counter!(
                    EXCHANGE_RATE_REQUESTS_TOTAL,
                    &[("result", "live".to_string())]
                )
                .increment(1);
                rate
            }
            Err(e) => {
                tracing::warn!(
                    error = e.to_string(),
                    base = base,
                    quote = quote,
                    fallback_rate = self.fallback_rate,
                    "Failed to fetch exchange rate, using fallback"
                );
                metrics::counter!(
                    EXCHANGE_RATE_REQUESTS_TOTAL,
                    &[("result", "fallback".to_string())]
                )
                .increment(1);
                self.fallback_rate
            }
        }
    }
}
