use dotenv::dotenv;
use std::env;

pub const DEFAULT_API_BASE_URL: &str = "https://token-hub.onrender.com";
pub const DEFAULT_EXPLORER_URL: &str = "https://sepolia.etherscan.io";
pub const DEFAULT_DEPLOYER_WALLET: &str = "0xd54757c19d677b867cfc6a9bb86152b59e61550a";

/// Initialize dotenv (only needs to be called once at startup)
pub fn init() {
    if dotenv().is_ok() {
        log::info!("Loaded .env file");
    } else {
        log::debug!("No .env file found, using process environment");
    }
}

/// Fetch an environment variable, falling back to `default` when unset or blank
pub fn get_env_var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub fn get_api_base_url() -> String {
    get_env_var_or("TOKENHUB_API_BASE_URL", DEFAULT_API_BASE_URL)
}

pub fn get_explorer_url() -> String {
    get_env_var_or("TOKENHUB_EXPLORER_URL", DEFAULT_EXPLORER_URL)
}

/// The backend-controlled wallet that signs and pays for every deployment.
pub fn get_deployer_wallet() -> String {
    get_env_var_or("TOKENHUB_DEPLOYER_WALLET", DEFAULT_DEPLOYER_WALLET)
}
