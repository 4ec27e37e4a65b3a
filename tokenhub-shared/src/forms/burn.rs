use std::fmt;
use std::str::FromStr;
use crate::forms::{failure_message, reject, LoadingFlag};
use crate::models::balance::{BalanceQuery, Erc20Balance, NftItem};
use crate::models::burn::{BurnFungibleRequest, BurnMultiRequest, BurnRequest, BurnResult, BurnUniqueRequest};
use crate::models::errors::{FormError, ValidationError};
use crate::models::tokens::TokenStandard;
use crate::services::api_client::TokenApi;
use crate::services::metadata_services::resolve_images;
use crate::services::notification_services::Notifier;
use crate::utilities::amounts::{exceeds_balance, parse_positive_amount};
use crate::utilities::demo;
use crate::utilities::validation::check_ethereum_address;

const FALLBACK: &str = "Failed to burn token. Please try again.";
const BALANCE_FALLBACK: &str = "Failed to fetch balance. Please try again.";
const NFTS_FALLBACK: &str = "Failed to fetch NFTs. Please try again.";

/// How the token to burn is chosen for NFT standards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BurnMode {
    /// Token id typed in by hand.
    #[default]
    Manual,
    /// Token picked from the NFTs a wallet currently holds.
    Fetch,
}

impl fmt::Display for BurnMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BurnMode::Manual => write!(f, "manual"),
            BurnMode::Fetch => write!(f, "fetch"),
        }
    }
}

impl FromStr for BurnMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" => Ok(BurnMode::Manual),
            "fetch" => Ok(BurnMode::Fetch),
            other => Err(format!("Unknown burn mode: {}", other)),
        }
    }
}

#[derive(Debug, Default)]
pub struct BurnForm {
    standard: TokenStandard,
    mode: BurnMode,
    pub contract_address: String,
    pub wallet_address: String,      // fetch mode only
    pub token_id: String,            // selected or typed token id
    pub amount: String,              // ERC20, ERC1155
    erc20_balance: Option<Erc20Balance>,
    balance_contract: String,        // contract the ERC20 balance was fetched for
    nft_items: Vec<NftItem>,
    result: Option<BurnResult>,
    error: Option<String>,
    loading: LoadingFlag,
    fetching: LoadingFlag,
}

impl BurnForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard(&self) -> TokenStandard {
        self.standard
    }

    pub fn mode(&self) -> BurnMode {
        self.mode
    }

    /// The fetched ERC20 balance, as long as it belongs to the contract
    /// currently entered.
    pub fn erc20_balance(&self) -> Option<&Erc20Balance> {
        self.erc20_balance
            .as_ref()
            .filter(|_| self.balance_contract.eq_ignore_ascii_case(self.contract_address.trim()))
    }

    pub fn nft_items(&self) -> &[NftItem] {
        &self.nft_items
    }

    pub fn result(&self) -> Option<&BurnResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching.is_loading()
    }

    /// Clears every input and anything fetched. The burn mode is kept.
    pub fn switch_standard(&mut self, standard: TokenStandard) {
        *self = Self {
            standard,
            mode: self.mode,
            loading: self.loading.clone(),
            fetching: self.fetching.clone(),
            ..Self::default()
        };
    }

    /// Switching mode drops the fetched NFTs and the current selection.
    pub fn set_mode(&mut self, mode: BurnMode) {
        self.mode = mode;
        self.nft_items.clear();
        self.token_id.clear();
    }

    /// Selects a token from the fetched list. Fails when the id is not in it.
    pub fn select_token(&mut self, token_id: &str) -> Result<&NftItem, ValidationError> {
        let token_id = token_id.trim();
        let item = self
            .nft_items
            .iter()
            .find(|item| item.token_id == token_id)
            .ok_or(ValidationError::NoTokenSelected)?;
        self.token_id = item.token_id.clone();
        Ok(item)
    }

    pub fn use_demo_values(&mut self, deployer_wallet: &str) {
        let demo = demo::burn_inputs(self.standard);
        self.contract_address = demo.contract_address.to_string();

        if self.standard == TokenStandard::Erc20 {
            if let Some(amount) = demo.amount {
                self.amount = amount.to_string();
            }
            self.erc20_balance = None;
            return;
        }
        match self.mode {
            BurnMode::Manual => {
                if let Some(token_id) = demo.token_id {
                    self.token_id = token_id.to_string();
                }
                if let Some(amount) = demo.amount {
                    self.amount = amount.to_string();
                }
            }
            BurnMode::Fetch => self.wallet_address = deployer_wallet.to_string(),
        }
    }

    /// Loads the ERC20 balance held by `deployer_wallet`; burns are checked against it.
    pub async fn fetch_balance(&mut self, api: &dyn TokenApi, notifier: &dyn Notifier, deployer_wallet: &str) -> Result<(), FormError> {
        check_ethereum_address(&self.contract_address, "contract address").map_err(|e| reject(e, notifier))?;

        let _fetching = self.fetching.begin()?;
        let query = BalanceQuery {
            wallet_address: deployer_wallet.to_string(),
            contract_address: self.contract_address.clone(),
        };
        match api.erc20_balance(&query).await {
            Ok(balance) => {
                notifier.success(&format!("Balance loaded: {} {}", balance.balance, balance.token_symbol));
                self.balance_contract = query.contract_address.trim().to_string();
                self.erc20_balance = Some(balance);
                Ok(())
            }
            Err(err) => {
                notifier.error(&failure_message("burn_balance_fetch_failed", &err, BALANCE_FALLBACK));
                self.erc20_balance = None;
                Err(err.into())
            }
        }
    }

    /// Lists the NFTs `wallet_address` holds in the contract, with images
    /// resolved where possible. Returns how many were found.
    pub async fn fetch_nfts(&mut self, api: &dyn TokenApi, notifier: &dyn Notifier) -> Result<usize, FormError> {
        if !self.standard.is_nft() {
            return Ok(0);
        }
        if self.contract_address.trim().is_empty() || self.wallet_address.trim().is_empty() {
            return Err(reject(ValidationError::MissingFetchInputs, notifier));
        }
        check_ethereum_address(&self.contract_address, "contract address").map_err(|e| reject(e, notifier))?;
        check_ethereum_address(&self.wallet_address, "wallet address").map_err(|e| reject(e, notifier))?;

        let _fetching = self.fetching.begin()?;
        let query = BalanceQuery {
            wallet_address: self.wallet_address.clone(),
            contract_address: self.contract_address.clone(),
        };
        match api.nft_balance(self.standard, &query).await {
            Ok(balance) if balance.nft_items.is_empty() => {
                self.nft_items.clear();
                notifier.info("No NFTs found in this wallet for this contract");
                Ok(0)
            }
            Ok(balance) => {
                self.nft_items = resolve_images(api, balance.nft_items).await;
                notifier.success(&format!("Found {} NFT(s) in your wallet!", self.nft_items.len()));
                Ok(self.nft_items.len())
            }
            Err(err) => {
                notifier.error(&failure_message("burn_nft_fetch_failed", &err, NFTS_FALLBACK));
                Err(err.into())
            }
        }
    }

    fn request(&self) -> Result<BurnRequest, ValidationError> {
        check_ethereum_address(&self.contract_address, "contract address")?;
        let contract_address = self.contract_address.clone();

        if self.standard == TokenStandard::Erc20 {
            let balance = self.erc20_balance().ok_or(ValidationError::BalanceNotFetched)?;
            let amount = parse_positive_amount(&self.amount)?;
            if exceeds_balance(amount, &balance.balance) {
                return Err(ValidationError::InsufficientBalance {
                    available: balance.balance.clone(),
                    symbol: balance.token_symbol.clone(),
                });
            }
            return Ok(BurnRequest::Erc20(BurnFungibleRequest {
                contract_address,
                amount: amount.to_string(),
            }));
        }

        if self.mode == BurnMode::Fetch {
            check_ethereum_address(&self.wallet_address, "wallet address")?;
            if self.nft_items.is_empty() {
                return Err(ValidationError::NftsNotFetched);
            }
        }
        let token_id = self.token_id.trim();
        if token_id.is_empty() {
            return Err(ValidationError::NoTokenSelected);
        }
        let selected = match self.mode {
            BurnMode::Fetch => Some(
                self.nft_items
                    .iter()
                    .find(|item| item.token_id == token_id)
                    .ok_or(ValidationError::NoTokenSelected)?,
            ),
            BurnMode::Manual => None,
        };
        if self.standard == TokenStandard::Erc721 {
            return Ok(BurnRequest::Erc721(BurnUniqueRequest {
                contract_address,
                token_id: token_id.to_string(),
            }));
        }

        let amount = parse_positive_amount(&self.amount)?;
        if let Some(held) = selected.and_then(|item| item.amount.as_deref()) {
            if exceeds_balance(amount, held) {
                return Err(ValidationError::InsufficientTokenAmount {
                    available: held.to_string(),
                    token_id: token_id.to_string(),
                });
            }
        }
        Ok(BurnRequest::Erc1155(BurnMultiRequest {
            contract_address,
            token_id: token_id.to_string(),
            amount: amount.to_string(),
        }))
    }

    pub async fn submit(&mut self, api: &dyn TokenApi, notifier: &dyn Notifier) -> Result<(), FormError> {
        let request = self.request().map_err(|e| reject(e, notifier))?;

        let _loading = self.loading.begin()?;
        self.error = None;

        match api.burn(&request).await {
            Ok(result) => {
                notifier.success(success_message(self.standard));
                match &request {
                    BurnRequest::Erc20(_) => self.erc20_balance = None,
                    BurnRequest::Erc721(burned) => {
                        self.nft_items.retain(|item| item.token_id != burned.token_id);
                        self.token_id.clear();
                    }
                    BurnRequest::Erc1155(_) => {}
                }
                self.result = Some(result);
                Ok(())
            }
            Err(err) => {
                let message = failure_message("burn_failed", &err, FALLBACK);
                notifier.error(&message);
                self.error = Some(message);
                Err(err.into())
            }
        }
    }
}

fn success_message(standard: TokenStandard) -> &'static str {
    match standard {
        TokenStandard::Erc20 => "ERC20 tokens burned successfully!",
        TokenStandard::Erc721 => "ERC721 NFT burned successfully!",
        TokenStandard::Erc1155 => "ERC1155 tokens burned successfully!",
    }
}
