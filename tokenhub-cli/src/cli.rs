use clap::{Args, Parser, Subcommand};
use tokenhub_shared::models::tokens::TokenStandard;

/// Check balances, deploy, mint and burn ERC20, ERC721 and ERC1155 tokens
/// through the TokenHub API.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(name = "tokenhub")]
pub struct TokenHubCli {
    /// TokenHub API base URL (defaults to TOKENHUB_API_BASE_URL or the public service)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Without a command the interactive shell starts
    #[command(subcommand)]
    pub command: Option<TokenHubCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TokenHubCommand {
    /// Look up a wallet's balance in a token contract
    Balance(BalanceArgs),

    /// Deploy a new token contract
    Deploy(DeployArgs),

    /// Mint tokens into an existing contract
    Mint(MintArgs),

    /// Burn tokens held by the deployer wallet
    Burn(BurnArgs),

    /// Sign up for the newsletter
    Subscribe(SubscribeArgs),

    /// Open a single tool by its page path, e.g. /erc20-balance or /mint-erc721
    Open {
        /// Page path; "/" lists every tool
        path: String,
    },

    /// Tabbed interactive shell
    Shell,
}

#[derive(Args, Debug, Clone, Default)]
pub struct BalanceArgs {
    /// erc20, erc721 or erc1155
    #[arg(short, long, default_value = "erc20")]
    pub standard: TokenStandard,

    #[arg(short, long)]
    pub wallet: Option<String>,

    #[arg(short, long)]
    pub contract: Option<String>,

    /// Prefill every field with the demo values
    #[arg(long)]
    pub demo: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DeployArgs {
    #[arg(short, long, default_value = "erc20")]
    pub standard: TokenStandard,

    #[arg(short, long)]
    pub name: Option<String>,

    #[arg(long)]
    pub symbol: Option<String>,

    /// Initial supply, ERC20 only
    #[arg(long)]
    pub supply: Option<String>,

    #[arg(long)]
    pub demo: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct MintArgs {
    #[arg(short, long, default_value = "erc20")]
    pub standard: TokenStandard,

    #[arg(short, long)]
    pub contract: Option<String>,

    /// Recipient address (ERC20, ERC1155)
    #[arg(long)]
    pub to: Option<String>,

    /// Metadata URI (ERC721, ERC1155)
    #[arg(long)]
    pub token_uri: Option<String>,

    /// Whole number of tokens (ERC20, ERC1155)
    #[arg(short, long)]
    pub amount: Option<String>,

    #[arg(long)]
    pub demo: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct BurnArgs {
    #[arg(short, long, default_value = "erc20")]
    pub standard: TokenStandard,

    #[arg(short, long)]
    pub contract: Option<String>,

    /// Token to burn (ERC721, ERC1155)
    #[arg(short, long)]
    pub token_id: Option<String>,

    /// Whole number of tokens (ERC20, ERC1155)
    #[arg(short, long)]
    pub amount: Option<String>,

    /// Pick the token from the NFTs this wallet holds instead of trusting --token-id
    #[arg(short, long)]
    pub wallet: Option<String>,

    #[arg(long)]
    pub demo: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SubscribeArgs {
    pub email: String,
}
