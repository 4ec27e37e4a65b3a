use std::io::{BufRead, Write};
use log::LevelFilter;
use tokenhub_shared::forms::balance::BalanceForm;
use tokenhub_shared::forms::burn::{BurnForm, BurnMode};
use tokenhub_shared::forms::deploy::DeployForm;
use tokenhub_shared::forms::mint::MintForm;
use tokenhub_shared::forms::newsletter::NewsletterForm;
use tokenhub_shared::models::balance::BalanceResult;
use tokenhub_shared::models::tokens::{Operation, TokenStandard};
use tokenhub_shared::utilities::clipboard::Clipboard;
use tokenhub_shared::utilities::logging::QuietLogs;
use tokenhub_shared::utilities::validation::validate_address_on_blur;
use crate::router::{self, View};
use crate::screens::{self, Context};

/// What one line of shell input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Tab(Operation),
    Standard(TokenStandard),
    Set { field: String, value: String },
    Mode(BurnMode),
    Demo,
    Submit,
    Fetch,
    Select(String),
    Show,
    Copy,
    Subscribe(String),
    Open(String),
    Home,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn parse_command(input: &str) -> ShellCommand {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ShellCommand::Empty;
    }
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match (word.to_ascii_lowercase().as_str(), rest) {
        ("quit" | "exit", _) => ShellCommand::Quit,
        ("help" | "?", _) => ShellCommand::Help,
        ("home", _) => ShellCommand::Home,
        ("show", _) => ShellCommand::Show,
        ("demo", _) => ShellCommand::Demo,
        ("submit", _) => ShellCommand::Submit,
        ("fetch", _) => ShellCommand::Fetch,
        ("copy", _) => ShellCommand::Copy,
        ("tab", name) => match name.parse() {
            Ok(operation) => ShellCommand::Tab(operation),
            Err(e) => ShellCommand::Invalid(e),
        },
        ("balance" | "deploy" | "mint" | "burn", "") => match word.parse() {
            Ok(operation) => ShellCommand::Tab(operation),
            Err(e) => ShellCommand::Invalid(e),
        },
        ("standard" | "std", name) => match name.parse() {
            Ok(standard) => ShellCommand::Standard(standard),
            Err(e) => ShellCommand::Invalid(e),
        },
        ("mode", name) => match name.parse() {
            Ok(mode) => ShellCommand::Mode(mode),
            Err(e) => ShellCommand::Invalid(e),
        },
        ("set", args) => match args.split_once(char::is_whitespace) {
            Some((field, value)) => ShellCommand::Set {
                field: field.to_ascii_lowercase(),
                value: value.trim().to_string(),
            },
            None if !args.is_empty() => ShellCommand::Set { field: args.to_ascii_lowercase(), value: String::new() },
            None => ShellCommand::Invalid("Usage: set <field> <value>".to_string()),
        },
        ("select", "") => ShellCommand::Invalid("Usage: select <token id>".to_string()),
        ("select", token_id) => ShellCommand::Select(token_id.to_string()),
        ("subscribe", email) => ShellCommand::Subscribe(email.to_string()),
        ("open", "") => ShellCommand::Invalid("Usage: open <path>".to_string()),
        ("open", path) => ShellCommand::Open(path.to_string()),
        _ => ShellCommand::Invalid(format!("Unknown command: {}. Type 'help' for the list.", word)),
    }
}

pub fn help_message() -> &'static str {
    "Commands:
  tab <balance|deploy|mint|burn>   switch tool (or just type the tool name)
  standard <erc20|erc721|erc1155>  switch token standard, clears the form
  set <field> <value>              fill a field (see 'show' for the fields)
  demo                             prefill demo values
  submit                           send the form
  mode <manual|fetch>              burn: type a token id or pick from a wallet
  fetch                            burn: load the ERC20 balance or the wallet's NFTs
  select <token id>                burn: pick a fetched NFT
  copy                             copy the contract address or transaction hash
  show                             print the current form
  subscribe <email>                newsletter sign-up
  open <path>                      jump to a page such as /mint-erc721
  home                             list every tool
  help                             this text
  quit                             leave the shell
"
}

/// Fields accepted by `set` on each tab.
fn field_names(tab: Operation) -> &'static str {
    match tab {
        Operation::Balance => "wallet, contract",
        Operation::Deploy => "name, symbol, supply",
        Operation::Mint => "contract, to, uri, amount",
        Operation::Burn => "contract, wallet, token, amount",
    }
}

/// The tabbed interactive front-end: one form per tool, each remembering its
/// own standard and inputs while other tabs are used.
pub struct Shell {
    ctx: Context,
    tab: Operation,
    balance: BalanceForm,
    deploy: DeployForm,
    mint: MintForm,
    burn: BurnForm,
    newsletter: NewsletterForm,
    clipboard: Clipboard,
}

impl Shell {
    pub fn new(ctx: Context) -> Self {
        Self {
            ctx,
            tab: Operation::Balance,
            balance: BalanceForm::new(),
            deploy: DeployForm::new(),
            mint: MintForm::new(),
            burn: BurnForm::new(),
            newsletter: NewsletterForm::new(),
            clipboard: Clipboard::new(),
        }
    }

    pub fn tab(&self) -> Operation {
        self.tab
    }

    pub fn standard(&self) -> TokenStandard {
        match self.tab {
            Operation::Balance => self.balance.standard(),
            Operation::Deploy => self.deploy.standard(),
            Operation::Mint => self.mint.standard(),
            Operation::Burn => self.burn.standard(),
        }
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn prompt(&self) -> String {
        format!("tokenhub:{}/{}> ", self.tab.slug(), self.standard().slug())
    }

    /// Focuses a page. Tool pages select the tab and its standard.
    pub fn open(&mut self, view: View) -> String {
        match view {
            View::Home => screens::home::render(),
            View::Tool { operation, standard } => {
                self.tab = operation;
                if self.standard() != standard {
                    self.switch_standard(standard);
                }
                self.describe()
            }
        }
    }

    fn switch_standard(&mut self, standard: TokenStandard) {
        match self.tab {
            Operation::Balance => self.balance.switch_standard(standard),
            Operation::Deploy => self.deploy.switch_standard(standard),
            Operation::Mint => self.mint.switch_standard(standard),
            Operation::Burn => self.burn.switch_standard(standard),
        }
    }

    pub fn describe(&self) -> String {
        let explorer = &self.ctx.explorer;
        match self.tab {
            Operation::Balance => screens::balance::describe(&self.balance, explorer),
            Operation::Deploy => screens::deploy::describe(&self.deploy, explorer),
            Operation::Mint => screens::mint::describe(&self.mint, explorer),
            Operation::Burn => screens::burn::describe(&self.burn, explorer),
        }
    }

    /// Runs one line of input, writing anything it renders to `out`.
    pub async fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> anyhow::Result<Flow> {
        let command = parse_command(line);
        log::debug!("Shell command: {:?}", command);

        match command {
            ShellCommand::Empty => {}
            ShellCommand::Quit => return Ok(Flow::Quit),
            ShellCommand::Help => write!(out, "{}", help_message())?,
            ShellCommand::Home => write!(out, "{}", screens::home::render())?,
            ShellCommand::Show => write!(out, "{}", self.describe())?,
            ShellCommand::Invalid(message) => writeln!(out, "{}", message)?,
            ShellCommand::Tab(operation) => {
                self.tab = operation;
                write!(out, "{}", self.describe())?;
            }
            ShellCommand::Standard(standard) => {
                self.switch_standard(standard);
                write!(out, "{}", self.describe())?;
            }
            ShellCommand::Open(path) => match router::resolve(&path) {
                Some(view) => write!(out, "{}", self.open(view))?,
                None => writeln!(out, "No page at {}", path)?,
            },
            ShellCommand::Set { field, value } => self.set_field(&field, value, out)?,
            ShellCommand::Demo => {
                match self.tab {
                    Operation::Balance => self.balance.use_demo_values(),
                    Operation::Deploy => self.deploy.use_demo_values(),
                    Operation::Mint => self.mint.use_demo_values(),
                    Operation::Burn => self.burn.use_demo_values(&self.ctx.deployer_wallet),
                }
                write!(out, "{}", self.describe())?;
            }
            ShellCommand::Mode(mode) => {
                if self.tab != Operation::Burn {
                    writeln!(out, "Modes only apply to the burn tab")?;
                } else {
                    self.burn.set_mode(mode);
                    write!(out, "{}", self.describe())?;
                }
            }
            ShellCommand::Submit => {
                self.submit().await;
                write!(out, "{}", self.describe())?;
            }
            ShellCommand::Fetch => {
                if self.tab != Operation::Burn {
                    writeln!(out, "Nothing to fetch on the {} tab", self.tab)?;
                } else {
                    self.fetch().await;
                    write!(out, "{}", self.describe())?;
                }
            }
            ShellCommand::Select(token_id) => {
                if self.tab != Operation::Burn {
                    writeln!(out, "Token selection only applies to the burn tab")?;
                } else {
                    match self.burn.select_token(&token_id).map(|_| ()) {
                        Ok(()) => write!(out, "{}", self.describe())?,
                        Err(err) => self.ctx.notifier.error(&err.to_string()),
                    }
                }
            }
            ShellCommand::Copy => self.copy(out),
            ShellCommand::Subscribe(email) => {
                self.newsletter.email = email;
                self.newsletter.submit(self.ctx.notifier.as_ref());
            }
        }
        Ok(Flow::Continue)
    }

    fn set_field<W: Write>(&mut self, field: &str, value: String, out: &mut W) -> anyhow::Result<()> {
        let notifier = self.ctx.notifier.as_ref();
        // Fetch mode only takes tokens from the fetched list.
        if self.tab == Operation::Burn && field == "token" && self.burn.mode() == BurnMode::Fetch && self.burn.standard().is_nft() {
            if let Err(err) = self.burn.select_token(&value).map(|_| ()) {
                notifier.error(&err.to_string());
            }
            return Ok(());
        }
        let slot = match (self.tab, field) {
            (Operation::Balance, "wallet") => Some((&mut self.balance.wallet_address, Some("wallet address"))),
            (Operation::Balance, "contract") => Some((&mut self.balance.contract_address, Some("contract address"))),
            (Operation::Deploy, "name") => Some((&mut self.deploy.token_name, None)),
            (Operation::Deploy, "symbol") => Some((&mut self.deploy.token_symbol, None)),
            (Operation::Deploy, "supply") => Some((&mut self.deploy.initial_supply, None)),
            (Operation::Mint, "contract") => Some((&mut self.mint.contract_address, Some("contract address"))),
            (Operation::Mint, "to") => Some((&mut self.mint.recipient_address, Some("recipient address"))),
            (Operation::Mint, "uri") => Some((&mut self.mint.token_uri, None)),
            (Operation::Mint, "amount") => Some((&mut self.mint.amount, None)),
            (Operation::Burn, "contract") => Some((&mut self.burn.contract_address, Some("contract address"))),
            (Operation::Burn, "wallet") => Some((&mut self.burn.wallet_address, Some("wallet address"))),
            (Operation::Burn, "token") => Some((&mut self.burn.token_id, None)),
            (Operation::Burn, "amount") => Some((&mut self.burn.amount, None)),
            _ => None,
        };

        match slot {
            Some((slot, address_field)) => {
                if let Some(name) = address_field {
                    validate_address_on_blur(&value, name, notifier);
                }
                *slot = value;
            }
            None => writeln!(out, "Unknown field '{}'. Fields here: {}", field, field_names(self.tab))?,
        }
        Ok(())
    }

    async fn submit(&mut self) {
        let api = self.ctx.api.as_ref();
        let notifier = self.ctx.notifier.as_ref();
        // Failures are already on screen through the notifier or the form's error line.
        let _ = match self.tab {
            Operation::Balance => screens::balance::submit(&mut self.balance, &self.ctx).await.map_err(|_| ()),
            Operation::Deploy => self.deploy.submit(api, notifier).await.map_err(|_| ()),
            Operation::Mint => self.mint.submit(api, notifier).await.map_err(|_| ()),
            Operation::Burn => self.burn.submit(api, notifier).await.map_err(|_| ()),
        };
    }

    async fn fetch(&mut self) {
        let api = self.ctx.api.as_ref();
        let notifier = self.ctx.notifier.as_ref();
        if self.burn.standard() == TokenStandard::Erc20 {
            let _ = self.burn.fetch_balance(api, notifier, &self.ctx.deployer_wallet).await;
        } else {
            if self.burn.mode() == BurnMode::Manual {
                self.burn.set_mode(BurnMode::Fetch);
            }
            let _ = self.burn.fetch_nfts(api, notifier).await;
        }
    }

    /// The value worth copying on the current tab, with its notice text.
    fn copy_target(&self) -> Option<(String, Option<&'static str>)> {
        match self.tab {
            Operation::Balance => self.balance.result().map(|r| {
                let address = match r {
                    BalanceResult::Erc20(b) => b.address.clone(),
                    BalanceResult::Erc721(b) | BalanceResult::Erc1155(b) => b.address.clone(),
                };
                (address, None)
            }),
            Operation::Deploy => self
                .deploy
                .result()
                .map(|r| (r.contract_address.clone(), Some("Address copied to clipboard!"))),
            Operation::Mint => self.mint.result().map(|r| (r.transaction_hash.clone(), None)),
            Operation::Burn => self.burn.result().map(|r| (r.transaction_hash.clone(), None)),
        }
    }

    fn copy<W: Write>(&self, out: &mut W) {
        match self.copy_target() {
            Some((text, message)) => {
                self.clipboard.copy_to(out, &text, message, self.ctx.notifier.as_ref());
            }
            None => self.ctx.notifier.info("Nothing to copy yet"),
        }
    }

    /// Reads commands until `quit` or end of input. Log output is capped at
    /// `warn` while the shell owns the terminal.
    pub async fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> anyhow::Result<()> {
        let _quiet = QuietLogs::install(LevelFilter::Warn);
        write!(out, "{}", help_message())?;
        writeln!(out)?;
        write!(out, "{}", self.describe())?;

        let mut lines = input.lines();
        loop {
            write!(out, "{}", self.prompt())?;
            out.flush()?;
            let Some(line) = lines.next() else { break };
            if self.execute(&line?, &mut out).await? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }
}
