use crate::forms::{failure_message, reject, LoadingFlag};
use crate::models::deploy::{DeployCollectionRequest, DeployFungibleRequest, DeployRequest, DeployResult};
use crate::models::errors::FormError;
use crate::models::tokens::TokenStandard;
use crate::services::api_client::TokenApi;
use crate::services::notification_services::Notifier;
use crate::utilities::amounts::parse_initial_supply;
use crate::utilities::demo;
use crate::utilities::validation::check_not_blank;

const FALLBACK: &str = "Failed to deploy contract. Please try again.";

#[derive(Debug, Default)]
pub struct DeployForm {
    standard: TokenStandard,
    pub token_name: String,
    pub token_symbol: String,
    pub initial_supply: String,      // ERC20 only
    result: Option<DeployResult>,
    error: Option<String>,
    loading: LoadingFlag,
}

impl DeployForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard(&self) -> TokenStandard {
        self.standard
    }

    pub fn result(&self) -> Option<&DeployResult> {
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
        let demo = demo::deploy_inputs(self.standard);
        self.token_name = demo.token_name.to_string();
        self.token_symbol = demo.token_symbol.to_string();
        if let Some(supply) = demo.total_supply {
            self.initial_supply = supply.to_string();
        }
    }

    fn request(&self) -> Result<DeployRequest, FormError> {
        check_not_blank(&self.token_name, "token name")?;
        check_not_blank(&self.token_symbol, "token symbol")?;

        let token_name = self.token_name.trim().to_string();
        let token_symbol = self.token_symbol.trim().to_string();
        let request = match self.standard {
            TokenStandard::Erc20 => {
                let supply = parse_initial_supply(&self.initial_supply)?;
                DeployRequest::Erc20(DeployFungibleRequest {
                    token_name,
                    token_symbol,
                    initial_supply: supply.to_string(),
                })
            }
            TokenStandard::Erc721 => DeployRequest::Erc721(DeployCollectionRequest { token_name, token_symbol }),
            TokenStandard::Erc1155 => DeployRequest::Erc1155(DeployCollectionRequest { token_name, token_symbol }),
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

        match api.deploy(&request).await {
            Ok(response) => {
                self.result = Some(DeployResult::from_response(self.standard, response));
                notifier.success(success_message(self.standard));
                Ok(())
            }
            Err(err) => {
                let message = failure_message("deploy_failed", &err, FALLBACK);
                notifier.error(&message);
                self.error = Some(message);
                Err(err.into())
            }
        }
    }
}

fn success_message(standard: TokenStandard) -> &'static str {
    match standard {
        TokenStandard::Erc20 => "ERC20 token deployed successfully!",
        TokenStandard::Erc721 => "ERC721 NFT contract deployed successfully!",
        TokenStandard::Erc1155 => "ERC1155 token contract deployed successfully!",
    }
}
