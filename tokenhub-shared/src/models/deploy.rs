use serde::{Deserialize, Serialize};
use crate::models::tokens::TokenStandard;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeployFungibleRequest {
    pub token_name: String,
    pub token_symbol: String,
    pub initial_supply: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeployCollectionRequest {
    pub token_name: String,
    pub token_symbol: String,
}

/// Body of `POST /api/deploy/{standard}`; serialises to the flat body only.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum DeployRequest {
    Erc20(DeployFungibleRequest),
    Erc721(DeployCollectionRequest),
    Erc1155(DeployCollectionRequest),
}

impl DeployRequest {
    pub fn standard(&self) -> TokenStandard {
        match self {
            DeployRequest::Erc20(_) => TokenStandard::Erc20,
            DeployRequest::Erc721(_) => TokenStandard::Erc721,
            DeployRequest::Erc1155(_) => TokenStandard::Erc1155,
        }
    }
}

/// Response body shared by the three deploy routes; only ERC20 carries a supply.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeployResponse {
    pub address: String,
    pub token_name: String,
    pub token_symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_supply: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeployResult {
    pub standard: TokenStandard,
    pub contract_address: String,
    pub token_name: String,
    pub token_symbol: String,
    pub total_supply: Option<String>,
}

impl DeployResult {
    pub fn from_response(standard: TokenStandard, response: DeployResponse) -> Self {
        Self {
            standard,
            contract_address: response.address,
            token_name: response.token_name,
            token_symbol: response.token_symbol,
            total_supply: response.total_supply,
        }
    }
}
