//! Stellar Horizon API client
//!
//! Handles communication with a Horizon server for account balance queries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::domain::result::{Error, Result};
use crate::ports::{LedgerBalance, LedgerProvider};

/// Stellar Horizon API client
#[derive(Debug)]
pub struct HorizonClient {
    client: Client,
    base_url: String,
}

/// Horizon account response (balances only; the rest of the record is ignored)
#[derive(Debug, Deserialize)]
struct AccountResponse {
    #[serde(default)]
    balances: Vec<HorizonBalance>,
}

/// Balance line from a Horizon account record
#[derive(Debug, Deserialize)]
struct HorizonBalance {
    balance: String,
    #[serde(default)]
    asset_type: Option<String>,
    #[serde(default)]
    asset_code: Option<String>,
    #[serde(default)]
    selling_liabilities: Option<String>,
}

impl HorizonClient {
    /// Create a new Horizon client for a base URL
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed =
            Url::parse(base_url).map_err(|_| Error::Config("Invalid Horizon URL".to_string()))?;

        if parsed.scheme() != "https" {
            return Err(Error::Config("Horizon URL must use HTTPS".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::ledger(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Map request errors to user-friendly messages
    fn map_request_error(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::ledger("Horizon request timed out after 30 seconds")
        } else if error.is_connect() {
            Error::ledger("Unable to connect to Horizon")
        } else {
            Error::ledger(format!("Horizon request failed: {}", error))
        }
    }
}

#[async_trait]
impl LedgerProvider for HorizonClient {
    fn name(&self) -> &str {
        "horizon"
    }

    fn chain(&self) -> &str {
        "stellar"
    }

    async fn get_account_balances(&self, address: &str) -> Result<Vec<LedgerBalance>> {
        let url = format!("{}/accounts/{}", self.base_url, address);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        match response.status() {
            StatusCode::OK => {}
            // Unfunded accounts are not on the ledger yet; they hold nothing
            StatusCode::NOT_FOUND => return Ok(Vec::new()),
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(Error::ledger(
                    "Horizon rate limit exceeded. Try again shortly or configure a different Horizon server",
                ))
            }
            status => return Err(Error::ledger(format!("Horizon API error: HTTP {}", status))),
        }

        let data: AccountResponse = response
            .json()
            .await
            .map_err(|e| Error::ledger(format!("Failed to parse Horizon response: {}", e)))?;

        Ok(data
            .balances
            .into_iter()
            .map(|b| LedgerBalance {
                asset_code: b.asset_code,
                asset_type: b.asset_type,
                balance: b.balance,
                locked: b.selling_liabilities,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_url() {
        let client = HorizonClient::new("https://horizon.stellar.org");
        assert!(client.is_ok());
    }

    #[test]
    fn test_trims_trailing_slash() {
        let client = HorizonClient::new("https://horizon.stellar.org/").unwrap();
        assert_eq!(client.base_url, "https://horizon.stellar.org");
    }

    #[test]
    fn test_rejects_http_url() {
        let result = HorizonClient::new("http://horizon.stellar.org");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("HTTPS"));
    }

    #[test]
    fn test_rejects_garbage_url() {
        assert!(HorizonClient::new("not a url").is_err());
    }
}
