use crate::models::mint::MintResult;
use crate::models::tokens::TokenStandard;
use crate::utilities::explorer::Explorer;
use crate::views::{heading, row};

pub fn render(standard: TokenStandard, result: &MintResult, explorer: &Explorer) -> String {
    let mut out = String::new();
    heading(&mut out, &format!("{} Mint Complete", standard));
    row(&mut out, "Transaction Hash", &result.transaction_hash);
    if let Some(token_id) = &result.token_id {
        row(&mut out, "Token ID", token_id);
    }
    if let Some(contract) = &result.contract_address {
        row(&mut out, "Contract", &explorer.address_url(contract));
    }
    if let Some(recipient) = &result.recipient {
        row(&mut out, "Recipient", &explorer.address_url(recipient));
    }
    if let Some(amount) = &result.amount {
        row(&mut out, "Amount", amount);
    }
    row(&mut out, "Explorer", &explorer.tx_url(&result.transaction_hash));
    out
}
