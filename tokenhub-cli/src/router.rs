use std::fmt;
use tokenhub_shared::models::tokens::{Operation, TokenStandard};

/// One page of the path-routed front-end: the home listing or a single tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Tool { operation: Operation, standard: TokenStandard },
}

impl View {
    /// `/erc20-balance` for balance checks, `/{operation}-{standard}` for the rest.
    pub fn path(&self) -> String {
        match self {
            View::Home => "/".to_string(),
            View::Tool { operation: Operation::Balance, standard } => format!("/{}-balance", standard.slug()),
            View::Tool { operation, standard } => format!("/{}-{}", operation.slug(), standard.slug()),
        }
    }

    pub fn title(&self) -> String {
        match self {
            View::Home => "TokenHub".to_string(),
            View::Tool { operation: Operation::Balance, standard } => format!("{} Balance", standard),
            View::Tool { operation: Operation::Deploy, standard } => format!("Deploy {}", standard),
            View::Tool { operation: Operation::Mint, standard } => format!("Mint {}", standard),
            View::Tool { operation: Operation::Burn, standard } => format!("Burn {}", standard),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Every tool page, grouped by operation.
pub fn tool_views() -> Vec<View> {
    Operation::ALL
        .iter()
        .flat_map(|&operation| {
            TokenStandard::ALL
                .iter()
                .map(move |&standard| View::Tool { operation, standard })
        })
        .collect()
}

pub fn resolve(path: &str) -> Option<View> {
    let path = path.trim();
    log::info!("Resolving view for path: {}", path);

    let slug = path.trim_matches('/');
    if slug.is_empty() {
        return Some(View::Home);
    }

    if let Some(standard) = slug.strip_suffix("-balance") {
        let standard = standard.parse::<TokenStandard>().ok()?;
        return Some(View::Tool { operation: Operation::Balance, standard });
    }

    let (operation, standard) = slug.split_once('-')?;
    match operation {
        "deploy" | "mint" | "burn" => Some(View::Tool {
            operation: operation.parse().ok()?,
            standard: standard.parse().ok()?,
        }),
        _ => None,
    }
}
