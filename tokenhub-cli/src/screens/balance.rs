use tokenhub_shared::forms::balance::BalanceForm;
use tokenhub_shared::models::errors::FormError;
use tokenhub_shared::models::tokens::Operation;
use tokenhub_shared::utilities::explorer::Explorer;
use tokenhub_shared::views::balance_view;
use crate::cli::BalanceArgs;
use crate::screens::{field_line, fill, status_lines, Context, Reported};

pub fn describe(form: &BalanceForm, explorer: &Explorer) -> String {
    let mut out = format!("{} ({})\n", Operation::Balance.title(), form.standard());
    field_line(&mut out, "Wallet Address", &form.wallet_address);
    field_line(&mut out, "Contract Address", &form.contract_address);
    status_lines(&mut out, form.is_loading(), form.error());
    if let Some(result) = form.result() {
        out.push('\n');
        out.push_str(&balance_view::render(result, explorer));
    }
    out
}

pub fn apply(form: &mut BalanceForm, args: &BalanceArgs) {
    form.switch_standard(args.standard);
    if args.demo {
        form.use_demo_values();
    }
    fill(&mut form.wallet_address, &args.wallet);
    fill(&mut form.contract_address, &args.contract);
}

/// Submits the form, telling the user about a failed lookup.
pub async fn submit(form: &mut BalanceForm, ctx: &Context) -> Result<(), Reported> {
    match form.submit(ctx.api.as_ref(), ctx.notifier.as_ref()).await {
        Ok(()) => Ok(()),
        Err(FormError::Api(_)) => {
            if let Some(message) = form.error() {
                ctx.notifier.error(message);
            }
            Err(Reported)
        }
        Err(_) => Err(Reported),
    }
}

pub async fn run(ctx: &Context, args: &BalanceArgs) -> anyhow::Result<String> {
    let mut form = BalanceForm::new();
    apply(&mut form, args);
    submit(&mut form, ctx).await?;
    Ok(describe(&form, &ctx.explorer))
}
