use crate::forms::{failure_message, reject, LoadingFlag};
use crate::models::balance::{BalanceQuery, BalanceResult, NftBalance};
use crate::models::errors::FormError;
use crate::models::tokens::TokenStandard;
use crate::services::api_client::TokenApi;
use crate::services::metadata_services::resolve_images;
use crate::services::notification_services::Notifier;
use crate::utilities::demo;
use crate::utilities::validation::check_ethereum_address;

const FALLBACK: &str = "Failed to fetch balance. Please try again.";

#[derive(Debug, Default)]
pub struct BalanceForm {
    standard: TokenStandard,
    pub wallet_address: String,
    pub contract_address: String,
    result: Option<BalanceResult>,
    error: Option<String>,
    loading: LoadingFlag,
}

impl BalanceForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard(&self) -> TokenStandard {
        self.standard
    }

    pub fn result(&self) -> Option<&BalanceResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn switch_standard(&mut self, standard: TokenStandard) {
        *self = Self {
            standard,
            loading: self.loading.clone(),
            ..Self::default()
        };
    }

    pub fn use_demo_values(&mut self) {
        let demo = demo::balance_inputs(self.standard);
        self.wallet_address = demo.wallet.to_string();
        self.contract_address = demo.contract.to_string();
    }

    /// Looks up the balance for the current standard. NFT results come back
    /// with each item's image resolved from its metadata where possible.
    pub async fn submit(&mut self, api: &dyn TokenApi, notifier: &dyn Notifier) -> Result<(), FormError> {
        check_ethereum_address(&self.wallet_address, "wallet address").map_err(|e| reject(e, notifier))?;
        check_ethereum_address(&self.contract_address, "contract address").map_err(|e| reject(e, notifier))?;

        let _loading = self.loading.begin()?;
        self.error = None;

        let query = BalanceQuery {
            wallet_address: self.wallet_address.clone(),
            contract_address: self.contract_address.clone(),
        };
        match api.check_balance(self.standard, &query).await {
            Ok(BalanceResult::Erc20(balance)) => {
                self.result = Some(BalanceResult::Erc20(balance));
                Ok(())
            }
            Ok(BalanceResult::Erc721(balance)) => {
                self.result = Some(BalanceResult::Erc721(with_images(api, balance).await));
                Ok(())
            }
            Ok(BalanceResult::Erc1155(balance)) => {
                self.result = Some(BalanceResult::Erc1155(with_images(api, balance).await));
                Ok(())
            }
            Err(err) => {
                self.error = Some(failure_message("balance_check_failed", &err, FALLBACK));
                self.result = None;
                Err(err.into())
            }
        }
    }
}

async fn with_images(api: &dyn TokenApi, mut balance: NftBalance) -> NftBalance {
    balance.nft_items = resolve_images(api, std::mem::take(&mut balance.nft_items)).await;
    balance
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use serde_json::json;
    use crate::models::balance::{Erc20Balance, NftItem};
    use crate::services::mock_api::MockTokenApi;
    use crate::services::notification_services::RecordingNotifier;

    const WALLET: &str = "0xD54757c19d677b867cFc6A9bb86152B59e61550A";
    const CONTRACT: &str = "0xFD3E110D00435de1C0792D885bFE72d0865f5864";

    fn filled(standard: TokenStandard) -> BalanceForm {
        let mut form = BalanceForm::new();
        form.switch_standard(standard);
        form.wallet_address = WALLET.to_string();
        form.contract_address = CONTRACT.to_string();
        form
    }

    #[tokio::test]
    async fn test_invalid_wallet_sends_nothing() {
        let api = MockTokenApi::new();
        let notifier = RecordingNotifier::new();
        let mut form = filled(TokenStandard::Erc20);
        form.wallet_address = "0x123".to_string();

        let err = form.submit(&api, &notifier).await.unwrap_err();

        assert!(matches!(err, FormError::Validation(_)));
        assert_eq!(api.calls(), 0);
        assert_eq!(
            notifier.errors(),
            vec!["Invalid wallet address. Please enter a valid Ethereum address (0x...)".to_string()]
        );
        assert!(!form.is_loading());
    }

    #[tokio::test]
    async fn test_erc20_balance_is_kept_verbatim() {
        let mut api = MockTokenApi::new();
        api.erc20 = Some(Erc20Balance {
            token_name: "My ERC20 Token".to_string(),
            token_symbol: "MTK".to_string(),
            address: CONTRACT.to_string(),
            balance: "1000000.0".to_string(),
        });
        let notifier = RecordingNotifier::new();
        let mut form = filled(TokenStandard::Erc20);

        form.submit(&api, &notifier).await.unwrap();

        let result = form.result().unwrap();
        assert_eq!(result.token_name(), "My ERC20 Token");
        assert_eq!(result.token_symbol(), "MTK");
        assert_eq!(result.amount(), "1000000.0");
        assert_eq!(api.last_request().unwrap().0, "balance/erc20");
        assert!(form.error().is_none());
    }

    #[tokio::test]
    async fn test_nft_images_resolved_with_failures_isolated() {
        let mut api = MockTokenApi::new();
        api.nft = Some(NftBalance {
            token_name: "Meow".to_string(),
            token_symbol: "MEOW".to_string(),
            address: CONTRACT.to_string(),
            total_tokens: "2".to_string(),
            nft_items: vec![
                NftItem { token_id: "1".to_string(), token_uri: Some("https://meta/1".to_string()), amount: None, image: None },
                NftItem { token_id: "2".to_string(), token_uri: Some("https://meta/broken".to_string()), amount: None, image: None },
            ],
        });
        api.metadata.insert("https://meta/1".to_string(), json!({ "image": "https://img/1.png" }));
        let notifier = RecordingNotifier::new();
        let mut form = filled(TokenStandard::Erc721);

        form.submit(&api, &notifier).await.unwrap();

        let result = form.result().unwrap();
        assert_eq!(result.standard(), TokenStandard::Erc721);
        assert_eq!(result.amount(), "2");
        let items = result.nft_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].image.as_deref(), Some("https://img/1.png"));
        assert_eq!(items[1].image, None);
    }

    #[tokio::test]
    async fn test_failure_stores_server_message() {
        let mut api = MockTokenApi::new();
        api.failure = Some((StatusCode::BAD_REQUEST, Some("Invalid contract".to_string())));
        let notifier = RecordingNotifier::new();
        let mut form = filled(TokenStandard::Erc1155);

        assert!(form.submit(&api, &notifier).await.is_err());
        assert_eq!(form.error(), Some("Invalid contract"));
        assert!(form.result().is_none());

        api.failure = Some((StatusCode::INTERNAL_SERVER_ERROR, None));
        assert!(form.submit(&api, &notifier).await.is_err());
        assert_eq!(form.error(), Some(FALLBACK));
    }

    #[tokio::test]
    async fn test_switch_standard_clears_everything() {
        let mut api = MockTokenApi::new();
        api.failure = Some((StatusCode::BAD_REQUEST, None));
        let mut form = filled(TokenStandard::Erc20);
        let _ = form.submit(&api, &RecordingNotifier::new()).await;
        assert!(form.error().is_some());

        form.switch_standard(TokenStandard::Erc721);

        assert_eq!(form.standard(), TokenStandard::Erc721);
        assert!(form.wallet_address.is_empty());
        assert!(form.contract_address.is_empty());
        assert!(form.result().is_none());
        assert!(form.error().is_none());
    }

    #[tokio::test]
    async fn test_busy_form_refuses_submit() {
        let api = MockTokenApi::new();
        let mut form = filled(TokenStandard::Erc20);
        let _held = form.loading.begin().unwrap();

        let err = form.submit(&api, &RecordingNotifier::new()).await.unwrap_err();

        assert!(matches!(err, FormError::Busy));
        assert_eq!(api.calls(), 0);
    }

    #[test]
    fn test_demo_values() {
        let mut form = BalanceForm::new();
        form.switch_standard(TokenStandard::Erc1155);
        form.use_demo_values();
        assert_eq!(form.contract_address, "0xe762eac66FB748Da41ca1B31448d07D1a15A6D1F");
        assert_eq!(form.wallet_address, WALLET);
    }
}
