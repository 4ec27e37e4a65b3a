use serde_json::json;
use log::{info, error, LevelFilter};

/// Logs an informational event in JSON format.
pub fn log_info(event: &str, message: &str) {
    info!("{}", json!({
        "event": event,
        "message": message
    }));
}

/// Logs an error event in JSON format.
pub fn log_error(event: &str, error_message: &str) {
    error!("{}", json!({
        "event": event,
        "error": error_message
    }));
}

/// Caps the global log level for as long as the guard lives, then restores it.
pub struct QuietLogs {
    previous: LevelFilter,
}

impl QuietLogs {
    pub fn install(level: LevelFilter) -> Self {
        let previous = log::max_level();
        if level < previous {
            log::set_max_level(level);
        }
        Self { previous }
    }
}

impl Drop for QuietLogs {
    fn drop(&mut self) {
        log::set_max_level(self.previous);
    }
}
