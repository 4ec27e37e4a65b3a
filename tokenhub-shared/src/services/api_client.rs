use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use crate::models::balance::{BalanceQuery, BalanceResult, Erc20Balance, NftBalance};
use crate::models::burn::{BurnRequest, BurnResult};
use crate::models::deploy::{DeployRequest, DeployResponse};
use crate::models::errors::{ApiError, MetadataError};
use crate::models::mint::{MintRequest, MintResult};
use crate::models::tokens::{Operation, TokenStandard};
use crate::services::routes::route;
use crate::utilities::config;
use crate::utilities::id_generator::generate_request_id;
use crate::utilities::logging::log_error;
use crate::utilities::responses::extract_server_message;

static SHARED_CLIENT: Lazy<Client> = Lazy::new(|| {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Client::builder()
        .default_headers(headers)
        .build()
        .unwrap_or_default()
});

/// Everything the forms need from the backend.
#[async_trait]
pub trait TokenApi: Send + Sync {
    async fn erc20_balance(&self, query: &BalanceQuery) -> Result<Erc20Balance, ApiError>;

    async fn nft_balance(&self, standard: TokenStandard, query: &BalanceQuery) -> Result<NftBalance, ApiError>;

    async fn deploy(&self, request: &DeployRequest) -> Result<DeployResponse, ApiError>;

    async fn mint(&self, request: &MintRequest) -> Result<MintResult, ApiError>;

    async fn burn(&self, request: &BurnRequest) -> Result<BurnResult, ApiError>;

    /// Fetches the off-chain JSON a `tokenURI` points at.
    async fn token_metadata(&self, token_uri: &str) -> Result<Value, MetadataError>;

    /// Balance lookup whose result shape is chosen by `standard`.
    async fn check_balance(&self, standard: TokenStandard, query: &BalanceQuery) -> Result<BalanceResult, ApiError> {
        match standard {
            TokenStandard::Erc20 => self.erc20_balance(query).await.map(BalanceResult::Erc20),
            _ => self
                .nft_balance(standard, query)
                .await
                .map(|balance| BalanceResult::from_nft(standard, balance)),
        }
    }
}

/// Thin HTTP client for the TokenHub backend. No retries, no timeouts.
#[derive(Debug, Clone)]
pub struct TokenHubClient {
    client: Client,
    base_url: String,
}

impl TokenHubClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: SHARED_CLIENT.clone(),
            base_url,
        }
    }

    pub fn from_env() -> Self {
        Self::new(config::get_api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request_id = generate_request_id();
        log::info!("GET {} ({})", path, request_id);

        let response = self.client
            .get(self.url(path))
            .header("X-Request-Id", &request_id)
            .query(query)
            .send()
            .await;

        read_response(path, response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request_id = generate_request_id();
        log::info!("POST {} ({})", path, request_id);

        let response = self.client
            .post(self.url(path))
            .header("X-Request-Id", &request_id)
            .json(body)
            .send()
            .await;

        read_response(path, response).await
    }
}

async fn read_response<T: DeserializeOwned>(endpoint: &str, response: Result<Response, reqwest::Error>) -> Result<T, ApiError> {
    let resp = match response {
        Ok(resp) => resp,
        Err(e) => {
            log_error(endpoint, &format!("request failed: {:?}", e));
            return Err(ApiError::Transport(e));
        }
    };

    let status = resp.status();
    let body = resp.text().await?;
    log::debug!("{} Response: {}", endpoint, body);

    if !status.is_success() {
        let message = extract_server_message(&body);
        log_error(endpoint, &format!("{} {}", status, message.as_deref().unwrap_or("<no message>")));
        return Err(ApiError::Status { status, message });
    }

    serde_json::from_str(&body).map_err(|e| {
        log_error(endpoint, &format!("JSON parse error: {:?}", e));
        ApiError::InvalidResponse(e)
    })
}

#[async_trait]
impl TokenApi for TokenHubClient {
    async fn erc20_balance(&self, query: &BalanceQuery) -> Result<Erc20Balance, ApiError> {
        self.get_json(route(Operation::Balance, TokenStandard::Erc20), query).await
    }

    async fn nft_balance(&self, standard: TokenStandard, query: &BalanceQuery) -> Result<NftBalance, ApiError> {
        self.get_json(route(Operation::Balance, standard), query).await
    }

    async fn deploy(&self, request: &DeployRequest) -> Result<DeployResponse, ApiError> {
        self.post_json(route(Operation::Deploy, request.standard()), request).await
    }

    async fn mint(&self, request: &MintRequest) -> Result<MintResult, ApiError> {
        self.post_json(route(Operation::Mint, request.standard()), request).await
    }

    async fn burn(&self, request: &BurnRequest) -> Result<BurnResult, ApiError> {
        self.post_json(route(Operation::Burn, request.standard()), request).await
    }

    async fn token_metadata(&self, token_uri: &str) -> Result<Value, MetadataError> {
        let resp = self.client.get(token_uri).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(MetadataError::BadStatus(status));
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
