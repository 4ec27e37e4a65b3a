use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// The contract standards the backend can deploy and operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStandard {
    #[default]
    Erc20,
    Erc721,
    Erc1155,
}

impl TokenStandard {
    pub const ALL: [TokenStandard; 3] = [TokenStandard::Erc20, TokenStandard::Erc721, TokenStandard::Erc1155];

    /// Path segment used by the backend routes, e.g. `erc721`.
    pub fn slug(&self) -> &'static str {
        match self {
            TokenStandard::Erc20 => "erc20",
            TokenStandard::Erc721 => "erc721",
            TokenStandard::Erc1155 => "erc1155",
        }
    }

    pub fn is_nft(&self) -> bool {
        !matches!(self, TokenStandard::Erc20)
    }
}

impl fmt::Display for TokenStandard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TokenStandard::Erc20 => write!(f, "ERC20"),
            TokenStandard::Erc721 => write!(f, "ERC721"),
            TokenStandard::Erc1155 => write!(f, "ERC1155"),
        }
    }
}

impl FromStr for TokenStandard {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "").as_str() {
            "erc20" => Ok(TokenStandard::Erc20),
            "erc721" => Ok(TokenStandard::Erc721),
            "erc1155" => Ok(TokenStandard::Erc1155),
            _ => Err(format!("Invalid token standard: {}", s)),
        }
    }
}

/// The four tools offered for every standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    Balance,
    Deploy,
    Mint,
    Burn,
}

impl Operation {
    pub const ALL: [Operation; 4] = [Operation::Balance, Operation::Deploy, Operation::Mint, Operation::Burn];

    pub fn slug(&self) -> &'static str {
        match self {
            Operation::Balance => "balance",
            Operation::Deploy => "deploy",
            Operation::Mint => "mint",
            Operation::Burn => "burn",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Operation::Balance => "Balance Check",
            Operation::Deploy => "Deploy Tokens",
            Operation::Mint => "Mint Tokens",
            Operation::Burn => "Burn Tokens",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "balance" => Ok(Operation::Balance),
            "deploy" => Ok(Operation::Deploy),
            "mint" => Ok(Operation::Mint),
            "burn" => Ok(Operation::Burn),
            _ => Err(format!("Invalid operation: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_parsing() {
        assert_eq!("erc20".parse::<TokenStandard>().unwrap(), TokenStandard::Erc20);
        assert_eq!("ERC721".parse::<TokenStandard>().unwrap(), TokenStandard::Erc721);
        assert_eq!("erc-1155".parse::<TokenStandard>().unwrap(), TokenStandard::Erc1155);
        assert!("erc777".parse::<TokenStandard>().is_err());
    }

    #[test]
    fn test_standard_display_and_slug() {
        assert_eq!(TokenStandard::Erc1155.to_string(), "ERC1155");
        assert_eq!(TokenStandard::Erc1155.slug(), "erc1155");
        assert!(!TokenStandard::Erc20.is_nft());
        assert!(TokenStandard::Erc721.is_nft());
    }

    #[test]
    fn test_operation_parsing() {
        assert_eq!("Mint".parse::<Operation>().unwrap(), Operation::Mint);
        assert!("transfer".parse::<Operation>().is_err());
    }
}
