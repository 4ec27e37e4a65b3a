use std::sync::Arc;
use serde_json::json;
use tokenhub_cli::cli::{BurnArgs, DeployArgs, MintArgs, SubscribeArgs, TokenHubCli, TokenHubCommand};
use tokenhub_cli::screens::{self, Context, Reported};
use tokenhub_shared::models::tokens::TokenStandard;
use tokenhub_shared::services::api_client::TokenHubClient;
use tokenhub_shared::services::notification_services::{NoticeLevel, RecordingNotifier};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CONTRACT: &str = "0xe762eac66FB748Da41ca1B31448d07D1a15A6D1F";
const WALLET: &str = "0xD54757c19d677b867cFc6A9bb86152B59e61550A";

fn context(server: &MockServer) -> (Context, Arc<RecordingNotifier>) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let notifier = Arc::new(RecordingNotifier::new());
    let ctx = Context::new(Arc::new(TokenHubClient::new(server.uri())), notifier.clone());
    (ctx, notifier)
}

#[tokio::test]
async fn test_deploy_demo_erc20() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/deploy/erc20"))
        .and(body_json(json!({ "tokenName": "My ERC20 Token", "tokenSymbol": "MTK", "initialSupply": "1000000" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "address": "0x163F62f7D0F4529f49E4E5F26824279eBC1f7900",
            "tokenName": "My ERC20 Token",
            "tokenSymbol": "MTK",
            "totalSupply": "1000000"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (ctx, notifier) = context(&server);
    let args = DeployArgs { demo: true, ..DeployArgs::default() };
    let output = screens::deploy::run(&ctx, &args).await?;

    assert!(output.contains("ERC20 Contract Deployed"));
    assert!(output.contains("Total Supply:      1000000"));
    assert_eq!(notifier.last(), Some((NoticeLevel::Success, "ERC20 token deployed successfully!".to_string())));
    Ok(())
}

#[tokio::test]
async fn test_mint_validation_failure_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (ctx, notifier) = context(&server);
    let args = MintArgs {
        standard: TokenStandard::Erc1155,
        contract: Some(CONTRACT.to_string()),
        to: Some(WALLET.to_string()),
        amount: Some("5".to_string()),
        ..MintArgs::default()
    };
    let err = screens::mint::run(&ctx, &args).await.unwrap_err();

    assert!(err.downcast_ref::<Reported>().is_some());
    assert_eq!(notifier.errors(), vec!["Please enter a token URI".to_string()]);
}

#[tokio::test]
async fn test_mint_server_error_uses_message_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/mint/erc721"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "execution reverted" })))
        .mount(&server)
        .await;

    let (ctx, notifier) = context(&server);
    let args = MintArgs { standard: TokenStandard::Erc721, demo: true, ..MintArgs::default() };

    assert!(screens::mint::run(&ctx, &args).await.is_err());
    assert_eq!(notifier.errors(), vec!["execution reverted".to_string()]);
}

#[tokio::test]
async fn test_burn_erc1155_fetch_mode_lists_without_token_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/balance/erc1155"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tokenName": "My Multi Token",
            "tokenSymbol": "MULTI",
            "address": CONTRACT,
            "totalTokens": "1",
            "nftItems": [{ "tokenId": "100", "amount": "10" }]
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/burn/erc1155"))
        .and(body_json(json!({ "contractAddress": CONTRACT, "tokenId": "100", "amount": "3" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "transactionHash": "0x1155" })))
        .expect(1)
        .mount(&server)
        .await;

    let (ctx, _) = context(&server);
    let mut args = BurnArgs {
        standard: TokenStandard::Erc1155,
        contract: Some(CONTRACT.to_string()),
        wallet: Some(WALLET.to_string()),
        amount: Some("3".to_string()),
        ..BurnArgs::default()
    };
    let listing = screens::burn::run(&ctx, &args).await.unwrap();
    assert!(listing.contains("Token #100 x10"));
    assert!(!listing.contains("Burn Complete"));

    args.token_id = Some("100".to_string());
    let output = screens::burn::run(&ctx, &args).await.unwrap();
    assert!(output.contains("ERC1155 Burn Complete"));
    assert!(output.contains("0x1155"));
}

#[tokio::test]
async fn test_burn_erc1155_over_held_amount() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/balance/erc1155"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tokenName": "My Multi Token",
            "tokenSymbol": "MULTI",
            "address": CONTRACT,
            "totalTokens": "1",
            "nftItems": [{ "tokenId": "100", "amount": "10" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (ctx, notifier) = context(&server);
    let args = BurnArgs {
        standard: TokenStandard::Erc1155,
        contract: Some(CONTRACT.to_string()),
        wallet: Some(WALLET.to_string()),
        token_id: Some("100".to_string()),
        amount: Some("11".to_string()),
        ..BurnArgs::default()
    };

    assert!(screens::burn::run(&ctx, &args).await.is_err());
    assert_eq!(
        notifier.last().map(|(_, m)| m),
        Some("Insufficient balance. You have 10 tokens available for Token #100.".to_string())
    );
}

#[tokio::test]
async fn test_subscribe_and_unknown_page() {
    let server = MockServer::start().await;
    let (ctx, notifier) = context(&server);

    let err = screens::newsletter::run(&ctx, &SubscribeArgs { email: "nobody".to_string() }).unwrap_err();
    assert!(err.downcast_ref::<Reported>().is_some());
    assert_eq!(notifier.errors(), vec!["Please enter a valid email address".to_string()]);

    let cli = TokenHubCli { api_url: None, command: Some(TokenHubCommand::Open { path: "/swap-erc20".to_string() }) };
    let err = tokenhub_cli::run(cli, ctx).await.unwrap_err();
    assert!(err.to_string().contains("No page at /swap-erc20"));
}
