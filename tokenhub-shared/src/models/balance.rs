use serde::{Deserialize, Serialize};
use crate::models::tokens::TokenStandard;

/// Query parameters for `GET /api/balance/{standard}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceQuery {
    pub wallet_address: String,
    pub contract_address: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Erc20Balance {
    pub token_name: String,
    pub token_symbol: String,
    pub address: String,
    pub balance: String,            // "1000000.0", as formatted by the backend
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NftItem {
    #[serde(rename = "tokenId")]
    pub token_id: String,
    #[serde(rename = "tokenURI", default, skip_serializing_if = "Option::is_none")]
    pub token_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,     // ERC1155 only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,      // resolved from the tokenURI metadata
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NftBalance {
    pub token_name: String,
    pub token_symbol: String,
    pub address: String,
    pub total_tokens: String,
    #[serde(default)]
    pub nft_items: Vec<NftItem>,
}

/// Balance lookup result, tagged by the standard that was requested.
#[derive(Debug, Clone, PartialEq)]
pub enum BalanceResult {
    Erc20(Erc20Balance),
    Erc721(NftBalance),
    Erc1155(NftBalance),
}

impl BalanceResult {
    pub fn from_nft(standard: TokenStandard, balance: NftBalance) -> Self {
        match standard {
            TokenStandard::Erc1155 => BalanceResult::Erc1155(balance),
            _ => BalanceResult::Erc721(balance),
        }
    }

    pub fn standard(&self) -> TokenStandard {
        match self {
            BalanceResult::Erc20(_) => TokenStandard::Erc20,
            BalanceResult::Erc721(_) => TokenStandard::Erc721,
            BalanceResult::Erc1155(_) => TokenStandard::Erc1155,
        }
    }

    pub fn token_name(&self) -> &str {
        match self {
            BalanceResult::Erc20(b) => &b.token_name,
            BalanceResult::Erc721(b) | BalanceResult::Erc1155(b) => &b.token_name,
        }
    }

    pub fn token_symbol(&self) -> &str {
        match self {
            BalanceResult::Erc20(b) => &b.token_symbol,
            BalanceResult::Erc721(b) | BalanceResult::Erc1155(b) => &b.token_symbol,
        }
    }

    /// The headline figure: the fungible balance or the NFT count.
    pub fn amount(&self) -> &str {
        match self {
            BalanceResult::Erc20(b) => &b.balance,
            BalanceResult::Erc721(b) | BalanceResult::Erc1155(b) => &b.total_tokens,
        }
    }

    pub fn nft_items(&self) -> &[NftItem] {
        match self {
            BalanceResult::Erc20(_) => &[],
            BalanceResult::Erc721(b) | BalanceResult::Erc1155(b) => &b.nft_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nft_balance_without_items() {
        let body = json!({
            "tokenName": "Meow",
            "tokenSymbol": "MEOW",
            "address": "0xD54757c19d677b867cFc6A9bb86152B59e61550A",
            "totalTokens": "0"
        });
        let balance: NftBalance = serde_json::from_value(body).unwrap();
        assert!(balance.nft_items.is_empty());
        assert_eq!(balance.total_tokens, "0");
    }

    #[test]
    fn test_nft_item_uses_backend_field_names() {
        let body = json!({ "tokenId": "7", "tokenURI": "https://example.com/7.json", "amount": "3" });
        let item: NftItem = serde_json::from_value(body).unwrap();
        assert_eq!(item.token_id, "7");
        assert_eq!(item.token_uri.as_deref(), Some("https://example.com/7.json"));
        assert_eq!(item.image, None);
    }

    #[test]
    fn test_balance_result_is_tagged_by_requested_standard() {
        let nft = NftBalance {
            token_name: "Multi".to_string(),
            token_symbol: "MULTI".to_string(),
            address: "0x0".to_string(),
            total_tokens: "2".to_string(),
            nft_items: vec![],
        };
        let result = BalanceResult::from_nft(TokenStandard::Erc1155, nft);
        assert_eq!(result.standard(), TokenStandard::Erc1155);
        assert_eq!(result.amount(), "2");
    }
}
