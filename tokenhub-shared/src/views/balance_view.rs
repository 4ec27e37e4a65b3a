use std::fmt::Write;
use crate::models::balance::{BalanceResult, NftItem};
use crate::utilities::explorer::Explorer;
use crate::views::{heading, row};

/// Renders a balance lookup. Values are printed exactly as the backend sent them.
pub fn render(result: &BalanceResult, explorer: &Explorer) -> String {
    let mut out = String::new();
    heading(&mut out, &format!("{} Balance", result.standard()));
    row(&mut out, "Token Name", result.token_name());
    row(&mut out, "Token Symbol", result.token_symbol());

    match result {
        BalanceResult::Erc20(balance) => {
            row(&mut out, "Balance", &balance.balance);
            row(&mut out, "Contract", &explorer.address_url(&balance.address));
        }
        BalanceResult::Erc721(balance) | BalanceResult::Erc1155(balance) => {
            row(&mut out, "Total Tokens", &balance.total_tokens);
            row(&mut out, "Contract", &explorer.address_url(&balance.address));
            out.push_str(&render_items(&balance.nft_items));
        }
    }
    out
}

/// The NFT list shared by the balance view and the burn picker.
pub fn render_items(items: &[NftItem]) -> String {
    let mut out = String::new();
    if items.is_empty() {
        let _ = writeln!(out, "  No NFTs found");
        return out;
    }
    let _ = writeln!(out, "  NFTs:");
    for item in items {
        let _ = write!(out, "    Token #{}", item.token_id);
        if let Some(amount) = &item.amount {
            let _ = write!(out, " x{}", amount);
        }
        let _ = writeln!(out);
        if let Some(image) = &item.image {
            let _ = writeln!(out, "      image: {}", image);
        }
        if let Some(uri) = &item.token_uri {
            let _ = writeln!(out, "      uri:   {}", uri);
        }
    }
    out
}
