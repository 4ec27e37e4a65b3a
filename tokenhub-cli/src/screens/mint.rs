use tokenhub_shared::forms::mint::MintForm;
use tokenhub_shared::models::tokens::{Operation, TokenStandard};
use tokenhub_shared::utilities::explorer::Explorer;
use tokenhub_shared::views::mint_view;
use crate::cli::MintArgs;
use crate::screens::{field_line, fill, status_lines, Context, Reported};

pub fn describe(form: &MintForm, explorer: &Explorer) -> String {
    let standard = form.standard();
    let mut out = format!("{} ({})\n", Operation::Mint.title(), standard);
    field_line(&mut out, "Contract Address", &form.contract_address);
    if standard != TokenStandard::Erc721 {
        field_line(&mut out, "Recipient Address", &form.recipient_address);
    }
    if standard.is_nft() {
        field_line(&mut out, "Token URI", &form.token_uri);
    }
    if standard != TokenStandard::Erc721 {
        field_line(&mut out, "Amount", &form.amount);
    }
    status_lines(&mut out, form.is_loading(), form.error());
    if let Some(result) = form.result() {
        out.push('\n');
        out.push_str(&mint_view::render(standard, result, explorer));
    }
    out
}

pub fn apply(form: &mut MintForm, args: &MintArgs) {
    form.switch_standard(args.standard);
    if args.demo {
        form.use_demo_values();
    }
    fill(&mut form.contract_address, &args.contract);
    fill(&mut form.recipient_address, &args.to);
    fill(&mut form.token_uri, &args.token_uri);
    fill(&mut form.amount, &args.amount);
}

pub async fn run(ctx: &Context, args: &MintArgs) -> anyhow::Result<String> {
    let mut form = MintForm::new();
    apply(&mut form, args);
    form.submit(ctx.api.as_ref(), ctx.notifier.as_ref())
        .await
        .map_err(|_| Reported)?;
    Ok(describe(&form, &ctx.explorer))
}
