use tokenhub_shared::forms::newsletter::NewsletterForm;
use crate::cli::SubscribeArgs;
use crate::screens::{Context, Reported};

pub fn run(ctx: &Context, args: &SubscribeArgs) -> anyhow::Result<String> {
    let mut form = NewsletterForm { email: args.email.clone() };
    if !form.submit(ctx.notifier.as_ref()) {
        return Err(Reported.into());
    }
    Ok(String::new())
}
