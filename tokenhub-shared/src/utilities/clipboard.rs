use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use crate::services::notification_services::Notifier;

const COPIED_RESET_AFTER: Duration = Duration::from_secs(2);

/// OSC 52 escape sequence asking the terminal to place `text` on the clipboard.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

/// Copy-to-clipboard helper with a short-lived `copied` flag.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    copied: Arc<AtomicBool>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copied(&self) -> bool {
        self.copied.load(Ordering::SeqCst)
    }

    /// Writes the escape sequence to `out`. The flag resets after two seconds
    /// when a tokio runtime is available to schedule the reset.
    pub fn copy_to<W: Write>(&self, out: &mut W, text: &str, success_message: Option<&str>, notifier: &dyn Notifier) -> bool {
        let written = out
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| out.flush());

        match written {
            Ok(()) => {
                self.copied.store(true, Ordering::SeqCst);
                notifier.success(success_message.unwrap_or("Copied to clipboard!"));
                self.schedule_reset();
                true
            }
            Err(e) => {
                log::error!("Copy failed: {:?}", e);
                notifier.error("Failed to copy to clipboard");
                false
            }
        }
    }

    fn schedule_reset(&self) {
        let copied = self.copied.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(COPIED_RESET_AFTER).await;
                    copied.store(false, Ordering::SeqCst);
                });
            }
            Err(_) => log::debug!("No runtime; copied flag stays set until the next copy"),
        }
    }
}
