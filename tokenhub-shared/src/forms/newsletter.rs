use crate::services::notification_services::Notifier;
use crate::utilities::logging::log_info;
use crate::utilities::validation::validate_email_with_notice;

/// Email sign-up. Acknowledged locally, nothing is sent anywhere.
#[derive(Debug, Default)]
pub struct NewsletterForm {
    pub email: String,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, notifier: &dyn Notifier) -> bool {
        if !validate_email_with_notice(&self.email, notifier) {
            return false;
        }
        log_info("newsletter_subscribed", "Newsletter sign-up accepted");
        notifier.success("Thank you for subscribing! We'll be in touch soon.");
        self.email.clear();
        true
    }
}
