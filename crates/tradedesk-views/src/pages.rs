//! Active pages.
//!
//! Data fetching and business rules live outside the shell, so these render
//! the structural skeleton of each page. Pages that read a path parameter
//! treat it as untrusted: a missing or blank value degrades to a notice.

use tradedesk_models::{Block, PageContent, PageId};

use crate::view::{PageView, ViewContext};

fn heading(page: PageId) -> PageContent {
    PageContent::new(page.title()).with(Block::Heading {
        text: page.title().to_string(),
    })
}

fn fields(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LoginPage;

impl PageView for LoginPage {
    fn page(&self) -> PageId {
        PageId::Login
    }

    fn render(&self, ctx: &ViewContext<'_>) -> PageContent {
        heading(PageId::Login)
            .with(Block::Text {
                text: format!("Sign in to {}.", ctx.app.app_title),
            })
            .with(Block::Form {
                name: "login".to_string(),
                fields: fields(&["username", "password"]),
            })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TransactionHistoryPage;

impl PageView for TransactionHistoryPage {
    fn page(&self) -> PageId {
        PageId::TransactionHistory
    }

    fn render(&self, _ctx: &ViewContext<'_>) -> PageContent {
        heading(PageId::TransactionHistory).with(Block::Table {
            name: "transactions".to_string(),
            columns: fields(&["date", "type", "symbol", "quantity", "amount", "status"]),
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TransactionDetailsPage;

impl PageView for TransactionDetailsPage {
    fn page(&self) -> PageId {
        PageId::TransactionDetails
    }

    fn render(&self, ctx: &ViewContext<'_>) -> PageContent {
        let content = heading(PageId::TransactionDetails);
        match ctx.params.non_blank("transactionId") {
            Some(id) => content
                .with(Block::Text {
                    text: format!("Transaction {id}"),
                })
                .with(Block::Table {
                    name: "transaction".to_string(),
                    columns: fields(&["field", "value"]),
                }),
            None => content.with(Block::Notice {
                text: "No transaction was specified.".to_string(),
            }),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PortfolioPage;

impl PageView for PortfolioPage {
    fn page(&self) -> PageId {
        PageId::Portfolio
    }

    fn render(&self, ctx: &ViewContext<'_>) -> PageContent {
        let content = heading(PageId::Portfolio);
        match ctx.params.non_blank("accountId") {
            Some(account) => content
                .with(Block::Text {
                    text: format!("Account {account}"),
                })
                .with(Block::Table {
                    name: "holdings".to_string(),
                    columns: fields(&["symbol", "quantity", "average_price", "market_value"]),
                }),
            None => content.with(Block::Notice {
                text: "No account was specified.".to_string(),
            }),
        }
    }
}

/// Market table combined with an order-entry form.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarketPage;

impl PageView for MarketPage {
    fn page(&self) -> PageId {
        PageId::StockTableWithOrderForm
    }

    fn render(&self, _ctx: &ViewContext<'_>) -> PageContent {
        heading(PageId::StockTableWithOrderForm)
            .with(Block::Table {
                name: "stocks".to_string(),
                columns: fields(&["symbol", "name", "price", "change"]),
            })
            .with(Block::Form {
                name: "order".to_string(),
                fields: fields(&["symbol", "side", "quantity", "price"]),
            })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NotFoundPage;

impl PageView for NotFoundPage {
    fn page(&self) -> PageId {
        PageId::NotFound
    }

    fn render(&self, ctx: &ViewContext<'_>) -> PageContent {
        heading(PageId::NotFound).with(Block::Text {
            text: format!("No page exists at {}.", ctx.pathname),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradedesk_models::config::ContextConfig;
    use tradedesk_models::{AppContext, PathParams};

    fn render_with(view: &dyn PageView, pathname: &str, params: &[(&str, &str)]) -> PageContent {
        let app = AppContext::from_config(&ContextConfig::default());
        let mut captured = PathParams::new();
        for (k, v) in params {
            captured.insert(*k, *v);
        }
        view.render(&ViewContext {
            pathname,
            params: &captured,
            app: &app,
        })
    }

    #[test]
    fn login_has_form() {
        let content = render_with(&LoginPage, "/", &[]);
        assert_eq!(content.title, "Login");
        assert!(content.blocks.iter().any(|b| matches!(
            b,
            Block::Form { name, .. } if name == "login"
        )));
        assert!(content.plain_text().contains("TradeDesk"));
    }

    #[test]
    fn transaction_details_shows_id_verbatim() {
        let content = render_with(
            &TransactionDetailsPage,
            "/transaction-history/TX-9182/details",
            &[("transactionId", "TX-9182")],
        );
        assert!(content.plain_text().contains("Transaction TX-9182"));
    }

    #[test]
    fn transaction_details_degrades_without_id() {
        let content = render_with(&TransactionDetailsPage, "/", &[]);
        assert!(content.blocks.contains(&Block::Notice {
            text: "No transaction was specified.".to_string()
        }));

        let content = render_with(&TransactionDetailsPage, "/", &[("transactionId", " ")]);
        assert!(content.plain_text().contains("No transaction was specified."));
    }

    #[test]
    fn portfolio_shows_account() {
        let content = render_with(&PortfolioPage, "/acct-42/portfolio", &[("accountId", "acct-42")]);
        assert!(content.plain_text().contains("Account acct-42"));

        let content = render_with(&PortfolioPage, "/", &[]);
        assert!(content.plain_text().contains("No account was specified."));
    }

    #[test]
    fn market_has_table_and_order_form() {
        let content = render_with(&MarketPage, "/market", &[]);
        assert_eq!(content.title, "Market");
        let names: Vec<&str> = content
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Form { name, .. } | Block::Table { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["stocks", "order"]);
    }

    #[test]
    fn not_found_names_the_path() {
        let content = render_with(&NotFoundPage, "/unknown-page", &[]);
        assert_eq!(content.title, "Page Not Found");
        assert!(content.plain_text().contains("/unknown-page"));
    }
}
