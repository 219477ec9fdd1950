use crate::error::GasboardError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

#[async_trait]
pub trait RateSource: Send + Sync {
    async fn usd_price(&self) -> Result<f64, GasboardError>;
}

// CoinGecko simple-price client. All tracked chains price gas in ETH, so a
// single asset quote covers the board.
pub struct CoinGeckoClient {
    client: reqwest::Client,
    base_url: String,
    asset_id: String,
}

impl CoinGeckoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            asset_id: "ethereum".to_string(),
        }
    }
}

#[async_trait]
impl RateSource for CoinGeckoClient {
    async fn usd_price(&self) -> Result<f64, GasboardError> {
        let url = format!(
            "{}/api/v3/simple/price?ids={}&vs_currencies=usd",
            self.base_url, self.asset_id
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GasboardError::PriceFeed(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(GasboardError::PriceFeed(format!(
                "price API returned {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GasboardError::PriceFeed(format!("failed to read response: {}", e)))?;

        let prices: HashMap<String, HashMap<String, f64>> = serde_json::from_str(&body)
            .map_err(|e| GasboardError::PriceFeed(format!("unexpected response shape: {}", e)))?;

        prices
            .get(&self.asset_id)
            .and_then(|quotes| quotes.get("usd"))
            .copied()
            .ok_or_else(|| {
                GasboardError::PriceFeed(format!("no usd quote for {} in response", self.asset_id))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn price_query() -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("ids".into(), "ethereum".into()),
            Matcher::UrlEncoded("vs_currencies".into(), "usd".into()),
        ])
    }

    #[tokio::test]
    async fn parses_the_simple_price_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v3/simple/price")
            .match_query(price_query())
            .with_body(r#"{"ethereum":{"usd":3000.25}}"#)
            .create_async()
            .await;

        let client = CoinGeckoClient::new(server.url());
        let price = client.usd_price().await.unwrap();

        assert_eq!(price, 3000.25);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn missing_asset_key_is_a_price_feed_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v3/simple/price")
            .match_query(price_query())
            .with_body(r#"{"bitcoin":{"usd":64000.0}}"#)
            .create_async()
            .await;

        let client = CoinGeckoClient::new(server.url());

        assert!(matches!(
            client.usd_price().await.unwrap_err(),
            GasboardError::PriceFeed(_)
        ));
    }

    #[tokio::test]
    async fn malformed_body_is_a_price_feed_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v3/simple/price")
            .match_query(price_query())
            .with_body("upstream maintenance page")
            .create_async()
            .await;

        let client = CoinGeckoClient::new(server.url());

        assert!(matches!(
            client.usd_price().await.unwrap_err(),
            GasboardError::PriceFeed(_)
        ));
    }

    #[tokio::test]
    async fn http_error_status_is_a_price_feed_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v3/simple/price")
            .match_query(price_query())
            .with_status(503)
            .create_async()
            .await;

        let client = CoinGeckoClient::new(server.url());

        assert!(matches!(
            client.usd_price().await.unwrap_err(),
            GasboardError::PriceFeed(_)
        ));
    }
}
