use crate::models::tokens::TokenStandard;
use crate::utilities::config;

// Sepolia contracts owned by the default deployer wallet.
const DEMO_WALLET: &str = "0xD54757c19d677b867cFc6A9bb86152B59e61550A";
const DEMO_TOKEN_URI: &str =
    "https://raw.githubusercontent.com/KoKhant02/nft-data/7e506cb7ae15574f69a5c0ce097bf0b2aa1c1ae3/json/Meow/MJ026.json";

#[derive(Debug, Clone, PartialEq)]
pub struct DemoBalance {
    pub wallet: &'static str,
    pub contract: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoDeploy {
    pub token_name: &'static str,
    pub token_symbol: &'static str,
    pub total_supply: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoMint {
    pub contract_address: &'static str,
    pub recipient_address: Option<String>,
    pub token_uri: Option<&'static str>,
    pub amount: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoBurn {
    pub contract_address: &'static str,
    pub token_id: Option<&'static str>,
    pub amount: Option<&'static str>,
}

pub fn balance_inputs(standard: TokenStandard) -> DemoBalance {
    let contract = match standard {
        TokenStandard::Erc20 => "0xFD3E110D00435de1C0792D885bFE72d0865f5864",
        TokenStandard::Erc721 => "0x2163138FAd4Ad344269FB373359AC43e32967a42",
        TokenStandard::Erc1155 => "0xe762eac66FB748Da41ca1B31448d07D1a15A6D1F",
    };
    DemoBalance { wallet: DEMO_WALLET, contract }
}

pub fn deploy_inputs(standard: TokenStandard) -> DemoDeploy {
    match standard {
        TokenStandard::Erc20 => DemoDeploy {
            token_name: "My ERC20 Token",
            token_symbol: "MTK",
            total_supply: Some("1000000"),
        },
        TokenStandard::Erc721 => DemoDeploy {
            token_name: "My NFT Collection",
            token_symbol: "MNFT",
            total_supply: None,
        },
        TokenStandard::Erc1155 => DemoDeploy {
            token_name: "My Multi Token",
            token_symbol: "MULTI",
            total_supply: None,
        },
    }
}

pub fn mint_inputs(standard: TokenStandard) -> DemoMint {
    match standard {
        TokenStandard::Erc20 => DemoMint {
            contract_address: "0x163F62f7D0F4529f49E4E5F26824279eBC1f7900",
            recipient_address: Some(config::get_deployer_wallet()),
            token_uri: None,
            amount: Some("10000"),
        },
        TokenStandard::Erc721 => DemoMint {
            contract_address: "0x56234F1AD947B4379F75ba63DC5CAD517cDdf8d6",
            recipient_address: None,
            token_uri: Some(DEMO_TOKEN_URI),
            amount: None,
        },
        TokenStandard::Erc1155 => DemoMint {
            contract_address: "0xe762eac66FB748Da41ca1B31448d07D1a15A6D1F",
            recipient_address: Some(config::get_deployer_wallet()),
            token_uri: Some(DEMO_TOKEN_URI),
            amount: Some("100"),
        },
    }
}

pub fn burn_inputs(standard: TokenStandard) -> DemoBurn {
    match standard {
        TokenStandard::Erc20 => DemoBurn {
            contract_address: "0x71E1BE970d7d0C5510080A67b684dca5432b8B15",
            token_id: None,
            amount: Some("5000"),
        },
        TokenStandard::Erc721 => DemoBurn {
            contract_address: "0x56234F1AD947B4379F75ba63DC5CAD517cDdf8d6",
            token_id: Some("1"),
            amount: None,
        },
        TokenStandard::Erc1155 => DemoBurn {
            contract_address: "0xe762eac66FB748Da41ca1B31448d07D1a15A6D1F",
            token_id: Some("100"),
            amount: Some("10"),
        },
    }
}
