use serde::{Deserialize, Serialize};

use crate::page::PageId;

/// A route declaration: a path template bound to a page.
///
/// Templates are `/`-separated. A segment written as `:name` captures one
/// non-empty path segment under `name`; any other segment must match literally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: String,
    pub page: PageId,
}

impl RouteEntry {
    pub fn new(pattern: impl Into<String>, page: PageId) -> Self {
        Self {
            pattern: pattern.into(),
            page,
        }
    }
}

/// A dormant route that is only registered when enabled by key in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BacklogRoute {
    pub key: &'static str,
    pub pattern: &'static str,
    pub page: PageId,
}

/// The active route table, in match order.
///
/// Order is significant: `/:accountId/portfolio` captures any
/// `/<segment>/portfolio`, so a static two-segment route ending in
/// `portfolio` registered after it can never be reached.
pub const ACTIVE_ROUTES: [(&str, PageId); 6] = [
    ("/", PageId::Login),
    ("/transaction-history", PageId::TransactionHistory),
    (
        "/transaction-history/:transactionId/details",
        PageId::TransactionDetails,
    ),
    ("/:accountId/portfolio", PageId::Portfolio),
    ("/market", PageId::StockTableWithOrderForm),
    ("/order-history", PageId::OrderHistory),
];

/// Planned destinations that are not wired into the active table.
pub const BACKLOG_ROUTES: [BacklogRoute; 19] = [
    BacklogRoute { key: "register", pattern: "/register", page: PageId::Register },
    BacklogRoute { key: "forget-password", pattern: "/forget-password", page: PageId::ForgetPassword },
    BacklogRoute { key: "reset-password", pattern: "/reset-password", page: PageId::ResetPassword },
    BacklogRoute { key: "home", pattern: "/home", page: PageId::Home },
    BacklogRoute {
        key: "withdraw-choose-payment-method",
        pattern: "/:accountId/withdraw/choose-payment-method",
        page: PageId::WithdrawChoosePaymentMethod,
    },
    BacklogRoute {
        key: "withdraw",
        pattern: "/:accountId/withdraw/:paymentMethodId",
        page: PageId::Withdraw,
    },
    BacklogRoute {
        key: "deposit-choose-payment-method",
        pattern: "/:accountId/deposit/choose-payment-method",
        page: PageId::DepositChoosePaymentMethod,
    },
    BacklogRoute {
        key: "deposit",
        pattern: "/:accountId/deposit/:paymentMethodId",
        page: PageId::Deposit,
    },
    BacklogRoute { key: "wallet", pattern: "/wallet", page: PageId::Wallet },
    BacklogRoute { key: "support", pattern: "/support", page: PageId::Support },
    BacklogRoute { key: "setting", pattern: "/setting", page: PageId::Setting },
    BacklogRoute {
        key: "two-factor-settings",
        pattern: "/setting/2fa-settings",
        page: PageId::TwoFactorSettings,
    },
    BacklogRoute {
        key: "change-password",
        pattern: "/setting/change-password",
        page: PageId::ChangePassword,
    },
    BacklogRoute {
        key: "generate-recovery-keys",
        pattern: "/setting/generate-recovery-keys",
        page: PageId::GenerateRecoveryKeys,
    },
    BacklogRoute { key: "payment-methods", pattern: "/payment-methods", page: PageId::PaymentMethods },
    BacklogRoute { key: "two-factor-auth", pattern: "/two-factor-auth", page: PageId::EnableTwoFactor },
    BacklogRoute {
        key: "two-factor-verify",
        pattern: "/2fa-verify",
        page: PageId::TwoFactorVerification,
    },
    BacklogRoute {
        key: "update-phone",
        pattern: "/profile/update-phone",
        page: PageId::UpdatePhoneNumber,
    },
    BacklogRoute {
        key: "disable-two-factor",
        pattern: "/profile/disable2FA",
        page: PageId::DisableTwoFactor,
    },
];

/// The active table as owned entries.
pub fn active_routes() -> Vec<RouteEntry> {
    ACTIVE_ROUTES
        .iter()
        .map(|(pattern, page)| RouteEntry::new(*pattern, *page))
        .collect()
}

/// Look up a backlog route by its config key.
pub fn backlog_route(key: &str) -> Option<&'static BacklogRoute> {
    BACKLOG_ROUTES.iter().find(|r| r.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_routes_keep_declaration_order() {
        let routes = active_routes();
        let patterns: Vec<&str> = routes.iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(
            patterns,
            vec![
                "/",
                "/transaction-history",
                "/transaction-history/:transactionId/details",
                "/:accountId/portfolio",
                "/market",
                "/order-history",
            ]
        );
    }

    #[test]
    fn backlog_pages_are_all_backlog_ids() {
        assert_eq!(BACKLOG_ROUTES.len(), PageId::BACKLOG.len());
        for route in &BACKLOG_ROUTES {
            assert!(route.page.is_backlog(), "{} is not a backlog page", route.key);
        }
    }

    #[test]
    fn backlog_lookup_by_key() {
        let wallet = backlog_route("wallet").unwrap();
        assert_eq!(wallet.pattern, "/wallet");
        assert_eq!(wallet.page, PageId::Wallet);
        assert!(backlog_route("crypto").is_none());
    }
}
