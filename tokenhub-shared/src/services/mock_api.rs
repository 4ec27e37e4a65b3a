use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use crate::models::balance::{BalanceQuery, Erc20Balance, NftBalance};
use crate::models::burn::{BurnRequest, BurnResult};
use crate::models::deploy::{DeployRequest, DeployResponse};
use crate::models::errors::{ApiError, MetadataError};
use crate::models::mint::{MintRequest, MintResult};
use crate::models::tokens::TokenStandard;
use crate::services::api_client::TokenApi;

/// In-memory backend for form tests. Unconfigured calls answer 500.
#[derive(Default)]
pub struct MockTokenApi {
    pub erc20: Option<Erc20Balance>,
    pub nft: Option<NftBalance>,
    pub deploy: Option<DeployResponse>,
    pub mint: Option<MintResult>,
    pub burn: Option<BurnResult>,
    pub metadata: HashMap<String, Value>,
    pub failure: Option<(StatusCode, Option<String>)>,
    calls: AtomicUsize,
    metadata_calls: AtomicUsize,
    requests: Mutex<Vec<(String, Value)>>,
}

impl MockTokenApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend calls made so far, metadata lookups excluded.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn metadata_calls(&self) -> usize {
        self.metadata_calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<(String, Value)> {
        self.requests.lock().ok().and_then(|r| r.last().cloned())
    }

    fn record<B: Serialize>(&self, route: String, body: &B) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((route, serde_json::to_value(body).unwrap_or(Value::Null)));
        }
    }

    fn answer<T: Clone>(&self, configured: &Option<T>) -> Result<T, ApiError> {
        if let Some((status, message)) = &self.failure {
            return Err(ApiError::Status { status: *status, message: message.clone() });
        }
        configured.clone().ok_or(ApiError::Status { status: StatusCode::INTERNAL_SERVER_ERROR, message: None })
    }
}

#[async_trait]
impl TokenApi for MockTokenApi {
    async fn erc20_balance(&self, query: &BalanceQuery) -> Result<Erc20Balance, ApiError> {
        self.record("balance/erc20".to_string(), query);
        self.answer(&self.erc20)
    }

    async fn nft_balance(&self, standard: TokenStandard, query: &BalanceQuery) -> Result<NftBalance, ApiError> {
        self.record(format!("balance/{}", standard.slug()), query);
        self.answer(&self.nft)
    }

    async fn deploy(&self, request: &DeployRequest) -> Result<DeployResponse, ApiError> {
        self.record(format!("deploy/{}", request.standard().slug()), request);
        self.answer(&self.deploy)
    }

    async fn mint(&self, request: &MintRequest) -> Result<MintResult, ApiError> {
        self.record(format!("mint/{}", request.standard().slug()), request);
        self.answer(&self.mint)
    }

    async fn burn(&self, request: &BurnRequest) -> Result<BurnResult, ApiError> {
        self.record(format!("burn/{}", request.standard().slug()), request);
        self.answer(&self.burn)
    }

    async fn token_metadata(&self, token_uri: &str) -> Result<Value, MetadataError> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        self.metadata
            .get(token_uri)
            .cloned()
            .ok_or(MetadataError::BadStatus(StatusCode::NOT_FOUND))
    }
}
