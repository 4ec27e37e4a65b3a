use crate::forms::{failure_message, reject, LoadingFlag};
use crate::models::errors::FormError;
use crate::models::mint::{MintFungibleRequest, MintMultiRequest, MintRequest, MintResult, MintUniqueRequest};
use crate::models::tokens::TokenStandard;
use crate::services::api_client::TokenApi;
use crate::services::notification_services::Notifier;
use crate::utilities::amounts::parse_positive_amount;
use crate::utilities::demo;
use crate::utilities::validation::{check_ethereum_address, check_not_blank};

const FALLBACK: &str = "Failed to mint token. Please try again.";

#[derive(Debug, Default)]
pub struct MintForm {
    standard: TokenStandard,
    pub contract_address: String,
    pub recipient_address: String,   // ERC20, ERC1155
    pub token_uri: String,           // ERC721, ERC1155
    pub amount: String,              // ERC20, ERC1155
    result: Option<MintResult>,
    error: Option<String>,
    loading: LoadingFlag,
}

impl MintForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard(&self) -> TokenStandard {
        self.standard
    }

    pub fn result(&self) -> Option<&MintResult> {
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
        let demo = demo::mint_inputs(self.standard);
        self.contract_address = demo.contract_address.to_string();
        if let Some(recipient) = demo.recipient_address {
            self.recipient_address = recipient;
        }
        if let Some(uri) = demo.token_uri {
            self.token_uri = uri.to_string();
        }
        if let Some(amount) = demo.amount {
            self.amount = amount.to_string();
        }
    }

    fn request(&self) -> Result<MintRequest, FormError> {
        check_ethereum_address(&self.contract_address, "contract address")?;
        let contract_address = self.contract_address.clone();

        let request = match self.standard {
            TokenStandard::Erc20 => {
                check_ethereum_address(&self.recipient_address, "recipient address")?;
                let amount = parse_positive_amount(&self.amount)?;
                MintRequest::Erc20(MintFungibleRequest {
                    contract_address,
                    to: self.recipient_address.clone(),
                    amount: amount.to_string(),
                })
            }
            TokenStandard::Erc721 => {
                check_not_blank(&self.token_uri, "token URI")?;
                MintRequest::Erc721(MintUniqueRequest {
                    contract_address,
                    token_uri: self.token_uri.trim().to_string(),
                })
            }
            TokenStandard::Erc1155 => {
                check_ethereum_address(&self.recipient_address, "recipient address")?;
                check_not_blank(&self.token_uri, "token URI")?;
                let amount = parse_positive_amount(&self.amount)?;
                MintRequest::Erc1155(MintMultiRequest {
                    contract_address,
                    to: self.recipient_address.clone(),
                    amount: amount.to_string(),
                    token_uri: self.token_uri.trim().to_string(),
                })
            }
        };
        Ok(request)
    }

    pub async fn submit(&mut self, api: &dyn TokenApi, notifier: &dyn Notifier) -> Result<(), FormError> {
        let request = match self.request() {
            Ok(request) => request,
            Err(FormError::Validation(err)) => return Err(reject(err, notifier)),
            Err(err) => return Err(err),
        };

        let _loading = self.loading.begin()?;
        self.error = None;

        match api.mint(&request).await {
            Ok(result) => {
                self.result = Some(result);
                notifier.success(success_message(self.standard));
                Ok(())
            }
            Err(err) => {
                let message = failure_message("mint_failed", &err, FALLBACK);
                notifier.error(&message);
                self.error = Some(message);
                Err(err.into())
            }
        }
    }
}

fn success_message(standard: TokenStandard) -> &'static str {
    match standard {
        TokenStandard::Erc20 => "ERC20 tokens minted successfully!",
        TokenStandard::Erc721 => "ERC721 NFT minted successfully!",
        TokenStandard::Erc1155 => "ERC1155 tokens minted successfully!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::services::mock_api::MockTokenApi;
    use crate::services::notification_services::RecordingNotifier;

    const CONTRACT: &str = "0x56234F1AD947B4379F75ba63DC5CAD517cDdf8d6";
    const RECIPIENT: &str = "0xD54757c19d677b867cFc6A9bb86152B59e61550A";

    fn minted() -> MintResult {
        MintResult {
            transaction_hash: "0xabc123".to_string(),
            token_id: Some("7".to_string()),
            contract_address: Some(CONTRACT.to_string()),
            recipient: None,
            amount: None,
        }
    }

    #[tokio::test]
    async fn test_erc721_mint_sends_token_uri() {
        let mut api = MockTokenApi::new();
        api.mint = Some(minted());
        let notifier = RecordingNotifier::new();
        let mut form = MintForm::new();
        form.switch_standard(TokenStandard::Erc721);
        form.contract_address = CONTRACT.to_string();
        form.token_uri = " https://meta/7.json ".to_string();

        form.submit(&api, &notifier).await.unwrap();

        let (route, body) = api.last_request().unwrap();
        assert_eq!(route, "mint/erc721");
        assert_eq!(body, json!({ "contractAddress": CONTRACT, "tokenURI": "https://meta/7.json" }));
        assert_eq!(form.result().unwrap().token_id.as_deref(), Some("7"));
        assert_eq!(notifier.last().unwrap().1, "ERC721 NFT minted successfully!");
    }

    #[tokio::test]
    async fn test_erc1155_mint_body() {
        let mut api = MockTokenApi::new();
        api.mint = Some(minted());
        let mut form = MintForm::new();
        form.switch_standard(TokenStandard::Erc1155);
        form.contract_address = CONTRACT.to_string();
        form.recipient_address = RECIPIENT.to_string();
        form.token_uri = "https://meta/1.json".to_string();
        form.amount = "100".to_string();

        form.submit(&api, &RecordingNotifier::new()).await.unwrap();

        let (route, body) = api.last_request().unwrap();
        assert_eq!(route, "mint/erc1155");
        assert_eq!(
            body,
            json!({ "contractAddress": CONTRACT, "to": RECIPIENT, "amount": "100", "tokenURI": "https://meta/1.json" })
        );
    }

    #[tokio::test]
    async fn test_erc20_needs_recipient_and_amount() {
        let api = MockTokenApi::new();
        let notifier = RecordingNotifier::new();
        let mut form = MintForm::new();
        form.contract_address = CONTRACT.to_string();

        let _ = form.submit(&api, &notifier).await;
        form.recipient_address = RECIPIENT.to_string();
        form.amount = "0".to_string();
        let _ = form.submit(&api, &notifier).await;

        assert_eq!(
            notifier.errors(),
            vec![
                "Please enter a recipient address".to_string(),
                "Please enter a valid amount (minimum 1)".to_string(),
            ]
        );
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_contract_sends_nothing() {
        let api = MockTokenApi::new();
        let notifier = RecordingNotifier::new();
        let mut form = MintForm::new();
        form.switch_standard(TokenStandard::Erc721);
        form.contract_address = "0xnotanaddress".to_string();
        form.token_uri = "https://meta/1.json".to_string();

        assert!(form.submit(&api, &notifier).await.is_err());
        assert_eq!(api.calls(), 0);
        assert_eq!(notifier.errors().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_uses_fallback() {
        let api = MockTokenApi::new();
        let notifier = RecordingNotifier::new();
        let mut form = MintForm::new();
        form.use_demo_values();

        assert!(form.submit(&api, &notifier).await.is_err());
        assert_eq!(form.error(), Some(FALLBACK));
        assert_eq!(notifier.errors(), vec![FALLBACK.to_string()]);
    }

    #[test]
    fn test_switch_standard_clears_fields() {
        let mut form = MintForm::new();
        form.switch_standard(TokenStandard::Erc1155);
        form.use_demo_values();
        assert!(!form.token_uri.is_empty());

        form.switch_standard(TokenStandard::Erc20);
        assert!(form.contract_address.is_empty());
        assert!(form.recipient_address.is_empty());
        assert!(form.token_uri.is_empty());
        assert!(form.amount.is_empty());
    }
}
