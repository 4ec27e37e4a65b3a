use serde::{Deserialize, Serialize};
use crate::models::tokens::TokenStandard;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MintFungibleRequest {
    pub contract_address: String,
    pub to: String,
    pub amount: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MintUniqueRequest {
    #[serde(rename = "contractAddress")]
    pub contract_address: String,
    #[serde(rename = "tokenURI")]
    pub token_uri: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MintMultiRequest {
    #[serde(rename = "contractAddress")]
    pub contract_address: String,
    pub to: String,
    pub amount: String,
    #[serde(rename = "tokenURI")]
    pub token_uri: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum MintRequest {
    Erc20(MintFungibleRequest),
    Erc721(MintUniqueRequest),
    Erc1155(MintMultiRequest),
}

impl MintRequest {
    pub fn standard(&self) -> TokenStandard {
        match self {
            MintRequest::Erc20(_) => TokenStandard::Erc20,
            MintRequest::Erc721(_) => TokenStandard::Erc721,
            MintRequest::Erc1155(_) => TokenStandard::Erc1155,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MintResult {
    pub transaction_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}
