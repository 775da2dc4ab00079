use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;

use crate::{core::monitor::Poller, prelude::*};

pub struct Api {
    client: Client,
    url: Url,
}

impl Api {
    /// Build a client for the real-time info endpoint.
    ///
    /// API docs: <https://www.eu.solaxcloud.com/phoebus/resource/files/userGuide/Solax_API.pdf>.
    pub fn new(base_url: Url, token_id: &str, serial_number: &str) -> Result<Self> {
        let mut url = base_url;
        url.query_pairs_mut().append_pair("tokenId", token_id).append_pair("sn", serial_number);
        let client = Client::builder()
            .user_agent("solax-monitor")
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client, url })
    }

    /// Fetch the latest reading: the `result` object of the response, kept opaque.
    #[instrument(skip_all)]
    pub async fn get_real_time_reading(&self) -> Result<Value> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|error| format!("failed to read the body: {error}"));
            bail!("{status_code}, {body}", status_code = status.as_u16());
        }
        let response: RealTimeResponse =
            response.json().await.context("failed to deserialize the response")?;
        Ok(response.result)
    }
}

#[async_trait]
impl Poller for Api {
    async fn poll(&mut self) -> Result<Value> {
        self.get_real_time_reading().await
    }
}

#[derive(Deserialize)]
struct RealTimeResponse {
    result: Value,
}
