use crate::utilities::config;

/// Links into a public block explorer (Etherscan-compatible URL layout).
#[derive(Debug, Clone, PartialEq)]
pub struct Explorer {
    base_url: String,
}

impl Explorer {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn from_env() -> Self {
        Self::new(config::get_explorer_url())
    }

    pub fn address_url(&self, address: &str) -> String {
        format!("{}/address/{}", self.base_url, address)
    }

    pub fn tx_url(&self, transaction_hash: &str) -> String {
        format!("{}/tx/{}", self.base_url, transaction_hash)
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new(config::DEFAULT_EXPLORER_URL)
    }
}
