use crate::models::deploy::DeployResult;
use crate::utilities::explorer::Explorer;
use crate::views::{heading, row};

pub fn render(result: &DeployResult, explorer: &Explorer) -> String {
    let mut out = String::new();
    heading(&mut out, &format!("{} Contract Deployed", result.standard));
    row(&mut out, "Contract Address", &result.contract_address);
    row(&mut out, "Token Name", &result.token_name);
    row(&mut out, "Token Symbol", &result.token_symbol);
    if let Some(supply) = &result.total_supply {
        row(&mut out, "Total Supply", supply);
    }
    row(&mut out, "Explorer", &explorer.address_url(&result.contract_address));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tokens::TokenStandard;

    #[test]
    fn test_render_deploy() {
        let result = DeployResult {
            standard: TokenStandard::Erc721,
            contract_address: "0x56234F1AD947B4379F75ba63DC5CAD517cDdf8d6".to_string(),
            token_name: "My NFT Collection".to_string(),
            token_symbol: "MNFT".to_string(),
            total_supply: None,
        };
        let text = render(&result, &Explorer::new("https://explorer.test/"));

        assert!(text.starts_with("ERC721 Contract Deployed\n"));
        assert!(text.contains("My NFT Collection"));
        assert!(!text.contains("Total Supply"));
        assert!(text.contains("https://explorer.test/address/0x56234F1AD947B4379F75ba63DC5CAD517cDdf8d6"));
    }
}
