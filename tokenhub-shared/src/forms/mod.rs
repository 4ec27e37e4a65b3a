pub mod balance;
pub mod deploy;
pub mod mint;
pub mod burn;
pub mod newsletter;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use crate::models::errors::{ApiError, FormError, ValidationError};
use crate::services::notification_services::Notifier;
use crate::utilities::logging::log_error;

/// The `loading` flag of a form. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the form busy until the returned guard is dropped.
    /// Fails with `FormError::Busy` when a request is already in flight.
    pub fn begin(&self) -> Result<LoadingGuard, FormError> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| FormError::Busy)?;
        Ok(LoadingGuard(Arc::clone(&self.0)))
    }

    pub fn is_loading(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[must_use]
pub struct LoadingGuard(Arc<AtomicBool>);

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Raises the notice for input the form refused to send.
pub(crate) fn reject(err: ValidationError, notifier: &dyn Notifier) -> FormError {
    notifier.error(&err.to_string());
    FormError::Validation(err)
}

/// Logs a failed request and returns the message shown to the user.
pub(crate) fn failure_message(event: &str, err: &ApiError, fallback: &str) -> String {
    log_error(event, &err.to_string());
    err.user_message(fallback)
}
