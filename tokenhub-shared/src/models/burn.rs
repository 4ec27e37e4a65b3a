use serde::{Deserialize, Serialize};
use crate::models::tokens::TokenStandard;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BurnFungibleRequest {
    pub contract_address: String,
    pub amount: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BurnUniqueRequest {
    pub contract_address: String,
    pub token_id: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BurnMultiRequest {
    pub contract_address: String,
    pub token_id: String,
    pub amount: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum BurnRequest {
    Erc20(BurnFungibleRequest),
    Erc721(BurnUniqueRequest),
    Erc1155(BurnMultiRequest),
}

impl BurnRequest {
    pub fn standard(&self) -> TokenStandard {
        match self {
            BurnRequest::Erc20(_) => TokenStandard::Erc20,
            BurnRequest::Erc721(_) => TokenStandard::Erc721,
            BurnRequest::Erc1155(_) => TokenStandard::Erc1155,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BurnResult {
    pub transaction_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}
