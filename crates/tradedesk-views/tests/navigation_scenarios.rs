//! End-to-end navigation scenarios through the shell with the default
//! route table and page registry.
//!
//! Each test navigates to an address-bar path and checks the rendered
//! `Screen`: selected page, captured params, chrome and content.

use tradedesk_models::config::{ChromeMode, ShadowPolicy, ShellConfig};
use tradedesk_models::{Block, PageId};
use tradedesk_views::{NavigationShell, PageRegistry, ViewError};

fn shell_with(config: ShellConfig) -> NavigationShell {
    NavigationShell::from_config(&config, PageRegistry::with_defaults()).unwrap()
}

fn default_shell() -> NavigationShell {
    shell_with(ShellConfig::default())
}

#[test]
fn market_renders_order_form_without_chrome() {
    let mut shell = default_shell();
    let screen = shell.navigate("/market");

    assert_eq!(screen.page, Some(PageId::StockTableWithOrderForm));
    assert_eq!(screen.pattern.as_deref(), Some("/market"));
    assert!(screen.params.is_empty());
    assert!(!screen.has_chrome());
}

#[test]
fn transaction_details_receive_transaction_id() {
    let mut shell = default_shell();
    let screen = shell.navigate("/transaction-history/tx-9182/details");

    assert_eq!(screen.page, Some(PageId::TransactionDetails));
    assert_eq!(screen.params.get("transactionId"), Some("tx-9182"));
    assert!(screen
        .content
        .unwrap()
        .plain_text()
        .contains("Transaction tx-9182"));
}

#[test]
fn portfolio_receives_account_id() {
    let mut shell = default_shell();
    let screen = shell.navigate("/acct-42/portfolio");

    assert_eq!(screen.page, Some(PageId::Portfolio));
    assert_eq!(screen.params.get("accountId"), Some("acct-42"));
    assert!(!screen.has_chrome());
}

#[test]
fn portfolio_shadows_static_names() {
    let shell = default_shell();
    let screen = shell.render("/market/portfolio");
    assert_eq!(screen.page, Some(PageId::Portfolio));
    assert_eq!(screen.params.get("accountId"), Some("market"));
}

#[test]
fn order_history_is_static_placeholder() {
    let mut shell = default_shell();
    let screen = shell.navigate("/order-history");

    assert_eq!(screen.page, Some(PageId::OrderHistory));
    assert!(screen.params.is_empty());
    assert!(!screen.has_chrome());

    let content = screen.content.unwrap();
    assert_eq!(content.title, "Order History");
    assert!(content.blocks.contains(&Block::Notice {
        text: "Order history functionality is coming soon!".to_string()
    }));
}

#[test]
fn unknown_path_renders_not_found() {
    let mut shell = default_shell();
    let screen = shell.navigate("/unknown-page");

    assert!(!screen.is_matched());
    assert_eq!(screen.page, Some(PageId::NotFound));
    assert!(screen.content.unwrap().plain_text().contains("/unknown-page"));
}

#[test]
fn login_at_root() {
    let screen = default_shell().render("/");
    assert_eq!(screen.page, Some(PageId::Login));
}

#[test]
fn chrome_is_exact_match_on_pathname() {
    let config = ShellConfig {
        routing: tradedesk_models::RoutingConfig {
            backlog: vec!["wallet".to_string()],
            ..Default::default()
        },
        ..Default::default()
    };
    let shell = shell_with(config);

    let wallet = shell.render("/wallet");
    assert_eq!(wallet.page, Some(PageId::Wallet));
    assert!(wallet.has_chrome());
    let chrome = wallet.chrome.unwrap();
    assert!(chrome
        .side_nav
        .iter()
        .any(|link| link.href == "/wallet" && link.active));

    assert!(!shell.render("/wallet/").has_chrome());
    assert!(!shell.render("/Wallet").has_chrome());
    assert!(shell.render("/wallet?tab=cards").has_chrome());
}

/// Chrome follows the allow-list even when no route matches the path.
#[test]
fn chrome_independent_of_route_match() {
    let shell = default_shell();
    let screen = shell.render("/support");
    assert_eq!(screen.page, Some(PageId::NotFound));
    assert!(screen.has_chrome());
}

#[test]
fn never_mode_hides_chrome_on_allow_listed_paths() {
    let mut config = ShellConfig::default();
    config.chrome.mode = ChromeMode::Never;
    assert!(!shell_with(config).render("/wallet").has_chrome());
}

#[test]
fn backlog_route_shadowed_under_reject_policy_fails() {
    let mut config = ShellConfig::default();
    config.routing.shadowing = ShadowPolicy::Reject;
    config.routing.backlog = vec!["home".to_string(), "home".to_string()];

    let result = NavigationShell::from_config(&config, PageRegistry::with_defaults());
    assert!(matches!(result, Err(ViewError::Router(_))));
}

#[test]
fn screen_serializes_to_json() {
    let screen = default_shell().render("/acct-42/portfolio");
    let json = serde_json::to_value(&screen).unwrap();
    assert_eq!(json["page"], "portfolio");
    assert_eq!(json["params"]["accountId"], "acct-42");
    assert_eq!(json["chrome"], serde_json::Value::Null);
    assert_eq!(json["content"]["title"], "Portfolio");
}
