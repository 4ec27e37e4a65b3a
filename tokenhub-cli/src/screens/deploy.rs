use tokenhub_shared::forms::deploy::DeployForm;
use tokenhub_shared::models::tokens::{Operation, TokenStandard};
use tokenhub_shared::utilities::explorer::Explorer;
use tokenhub_shared::views::deploy_view;
use crate::cli::DeployArgs;
use crate::screens::{field_line, fill, status_lines, Context, Reported};

pub fn describe(form: &DeployForm, explorer: &Explorer) -> String {
    let mut out = format!("{} ({})\n", Operation::Deploy.title(), form.standard());
    field_line(&mut out, "Token Name", &form.token_name);
    field_line(&mut out, "Token Symbol", &form.token_symbol);
    if form.standard() == TokenStandard::Erc20 {
        field_line(&mut out, "Initial Supply", &form.initial_supply);
    }
    status_lines(&mut out, form.is_loading(), form.error());
    if let Some(result) = form.result() {
        out.push('\n');
        out.push_str(&deploy_view::render(result, explorer));
    }
    out
}

pub fn apply(form: &mut DeployForm, args: &DeployArgs) {
    form.switch_standard(args.standard);
    if args.demo {
        form.use_demo_values();
    }
    fill(&mut form.token_name, &args.name);
    fill(&mut form.token_symbol, &args.symbol);
    fill(&mut form.initial_supply, &args.supply);
}

pub async fn run(ctx: &Context, args: &DeployArgs) -> anyhow::Result<String> {
    let mut form = DeployForm::new();
    apply(&mut form, args);
    form.submit(ctx.api.as_ref(), ctx.notifier.as_ref())
        .await
        .map_err(|_| Reported)?;
    Ok(describe(&form, &ctx.explorer))
}
