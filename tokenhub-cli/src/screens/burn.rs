use tokenhub_shared::forms::burn::{BurnForm, BurnMode};
use tokenhub_shared::models::tokens::{Operation, TokenStandard};
use tokenhub_shared::utilities::explorer::Explorer;
use tokenhub_shared::views::{balance_view, burn_view};
use crate::cli::BurnArgs;
use crate::screens::{field_line, fill, status_lines, Context, Reported};

pub fn describe(form: &BurnForm, explorer: &Explorer) -> String {
    let standard = form.standard();
    let mut out = format!("{} ({})\n", Operation::Burn.title(), standard);
    field_line(&mut out, "Contract Address", &form.contract_address);

    if standard == TokenStandard::Erc20 {
        match form.erc20_balance() {
            Some(balance) => field_line(&mut out, "Balance", &format!("{} {}", balance.balance, balance.token_symbol)),
            None => field_line(&mut out, "Balance", "not fetched"),
        }
    } else {
        field_line(&mut out, "Mode", &form.mode().to_string());
        if form.mode() == BurnMode::Fetch {
            field_line(&mut out, "Wallet Address", &form.wallet_address);
            out.push_str(&balance_view::render_items(form.nft_items()));
        }
        field_line(&mut out, "Token ID", &form.token_id);
    }
    if standard != TokenStandard::Erc721 {
        field_line(&mut out, "Amount", &form.amount);
    }
    status_lines(&mut out, form.is_loading() || form.is_fetching(), form.error());
    if let Some(result) = form.result() {
        out.push('\n');
        out.push_str(&burn_view::render(standard, result, explorer));
    }
    out
}

pub fn apply(form: &mut BurnForm, args: &BurnArgs, deployer_wallet: &str) {
    form.switch_standard(args.standard);
    if args.wallet.is_some() && args.standard.is_nft() {
        form.set_mode(BurnMode::Fetch);
    }
    if args.demo {
        form.use_demo_values(deployer_wallet);
    }
    fill(&mut form.contract_address, &args.contract);
    fill(&mut form.wallet_address, &args.wallet);
    fill(&mut form.amount, &args.amount);
    if form.mode() == BurnMode::Manual {
        fill(&mut form.token_id, &args.token_id);
    }
}

/// ERC20 burns load the deployer's balance first; fetch-mode burns list the
/// wallet's NFTs and only go ahead when `--token-id` names one of them.
pub async fn run(ctx: &Context, args: &BurnArgs) -> anyhow::Result<String> {
    let api = ctx.api.as_ref();
    let notifier = ctx.notifier.as_ref();
    let mut form = BurnForm::new();
    apply(&mut form, args, &ctx.deployer_wallet);

    if form.standard() == TokenStandard::Erc20 {
        form.fetch_balance(api, notifier, &ctx.deployer_wallet)
            .await
            .map_err(|_| Reported)?;
    } else if form.mode() == BurnMode::Fetch {
        form.fetch_nfts(api, notifier).await.map_err(|_| Reported)?;
        match &args.token_id {
            Some(token_id) => {
                if let Err(err) = form.select_token(token_id) {
                    notifier.error(&err.to_string());
                    return Err(Reported.into());
                }
            }
            None => return Ok(describe(&form, &ctx.explorer)),
        }
    }

    form.submit(api, notifier).await.map_err(|_| Reported)?;
    Ok(describe(&form, &ctx.explorer))
}
