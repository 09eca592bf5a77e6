use crate::config::Config;
use crate::core::{MiningRequest, Transaction};
use crate::error::{Result, WalletError};
use log::{debug, info};
use std::time::Duration;

// These are the three wallet endpoints the node serves
pub const BALANCE_PATH: &str = "/api/getBalance";
pub const SEND_TRANSACTION_PATH: &str = "/api/sendTransaction";
pub const MINE_REQUEST_PATH: &str = "/api/mineRequest";

/// HTTP client for a node's wallet API.
///
/// Every call issues exactly one request and hands back the response body
/// verbatim, whatever the status code. There is no retry and no queue;
/// clones share one connection pool and may run calls concurrently.
#[derive(Debug, Clone)]
pub struct NodeClient {
    client: reqwest::Client,
    base_url: String,
}

impl NodeClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<NodeClient> {
        // The timeout covers the whole exchange, so a node that accepts but never answers
        // still ends up as a transport error
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WalletError::Transport(format!("Failed to create HTTP client: {e}")))?;

        // I drop a trailing slash so joining with the endpoint paths never doubles it
        Ok(NodeClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<NodeClient> {
        Self::new(&config.get_node_url(), config.get_request_timeout())
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// `GET /api/getBalance?pk=<public key>`; the key is URL-encoded.
    pub async fn get_balance(&self, public_key: &str) -> Result<String> {
        let url = self.url(BALANCE_PATH);
        debug!("Requesting balance from {url}");
        // reqwest URL-encodes the key, base64 '+', '/' and '=' included
        let response = self
            .client
            .get(&url)
            .query(&[("pk", public_key)])
            .send()
            .await?;
        read_body(response).await
    }

    /// `POST /api/sendTransaction` with the transaction as the JSON body.
    pub async fn send_transaction(&self, transaction: &Transaction) -> Result<String> {
        let url = self.url(SEND_TRANSACTION_PATH);
        info!("Sending transaction {} to {url}", transaction.get_hash());
        // The body is the record's own JSON, field names exactly as the node reads them
        let response = self.client.post(&url).json(transaction).send().await?;
        read_body(response).await
    }

    /// `POST /api/mineRequest` with the mining request as the JSON body.
    pub async fn send_mining_request(&self, request: &MiningRequest) -> Result<String> {
        let url = self.url(MINE_REQUEST_PATH);
        // Only timestamp and sign go out; the public key is not part of this body
        info!("Sending mining request to {url}");
        let response = self.client.post(&url).json(request).send().await?;
        read_body(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// Node-side rejections are part of the body, not transport failures
async fn read_body(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    debug!("Node answered {status}: {body}");
    Ok(body)
}
