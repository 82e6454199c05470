use serde::{Deserialize, Serialize};

/// Every page the shell knows how to render.
///
/// Active pages are wired into the default route table. Backlog pages are
/// dormant destinations that only become reachable when enabled in config.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    Login,
    TransactionHistory,
    TransactionDetails,
    Portfolio,
    StockTableWithOrderForm,
    OrderHistory,
    NotFound,

    Register,
    ForgetPassword,
    ResetPassword,
    Home,
    WithdrawChoosePaymentMethod,
    Withdraw,
    DepositChoosePaymentMethod,
    Deposit,
    Wallet,
    Support,
    Setting,
    TwoFactorSettings,
    ChangePassword,
    GenerateRecoveryKeys,
    PaymentMethods,
    EnableTwoFactor,
    TwoFactorVerification,
    UpdatePhoneNumber,
    DisableTwoFactor,
}

impl PageId {
    pub const ACTIVE: [PageId; 6] = [
        PageId::Login,
        PageId::TransactionHistory,
        PageId::TransactionDetails,
        PageId::Portfolio,
        PageId::StockTableWithOrderForm,
        PageId::OrderHistory,
    ];

    pub const BACKLOG: [PageId; 19] = [
        PageId::Register,
        PageId::ForgetPassword,
        PageId::ResetPassword,
        PageId::Home,
        PageId::WithdrawChoosePaymentMethod,
        PageId::Withdraw,
        PageId::DepositChoosePaymentMethod,
        PageId::Deposit,
        PageId::Wallet,
        PageId::Support,
        PageId::Setting,
        PageId::TwoFactorSettings,
        PageId::ChangePassword,
        PageId::GenerateRecoveryKeys,
        PageId::PaymentMethods,
        PageId::EnableTwoFactor,
        PageId::TwoFactorVerification,
        PageId::UpdatePhoneNumber,
        PageId::DisableTwoFactor,
    ];

    /// Human-readable page title, used by page headings and the chrome header.
    pub fn title(&self) -> &'static str {
        match self {
            PageId::Login => "Login",
            PageId::TransactionHistory => "Transaction History",
            PageId::TransactionDetails => "Transaction Details",
            PageId::Portfolio => "Portfolio",
            PageId::StockTableWithOrderForm => "Market",
            PageId::OrderHistory => "Order History",
            PageId::NotFound => "Page Not Found",
            PageId::Register => "Register",
            PageId::ForgetPassword => "Forgot Password",
            PageId::ResetPassword => "Reset Password",
            PageId::Home => "Home",
            PageId::WithdrawChoosePaymentMethod => "Withdraw: Choose Payment Method",
            PageId::Withdraw => "Withdraw",
            PageId::DepositChoosePaymentMethod => "Deposit: Choose Payment Method",
            PageId::Deposit => "Deposit",
            PageId::Wallet => "Wallet",
            PageId::Support => "Support",
            PageId::Setting => "Settings",
            PageId::TwoFactorSettings => "Two-Factor Settings",
            PageId::ChangePassword => "Change Password",
            PageId::GenerateRecoveryKeys => "Generate Recovery Keys",
            PageId::PaymentMethods => "Payment Methods",
            PageId::EnableTwoFactor => "Enable Two-Factor Authentication",
            PageId::TwoFactorVerification => "Two-Factor Verification",
            PageId::UpdatePhoneNumber => "Update Phone Number",
            PageId::DisableTwoFactor => "Disable Two-Factor Authentication",
        }
    }

    pub fn is_backlog(&self) -> bool {
        Self::BACKLOG.contains(self)
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_id_serialization() {
        assert_eq!(
            serde_json::to_string(&PageId::StockTableWithOrderForm).unwrap(),
            "\"stock_table_with_order_form\""
        );
        let parsed: PageId = serde_json::from_str("\"order_history\"").unwrap();
        assert_eq!(parsed, PageId::OrderHistory);
    }

    #[test]
    fn active_and_backlog_are_disjoint() {
        assert!(PageId::ACTIVE.iter().all(|p| !p.is_backlog()));
        assert!(PageId::BACKLOG.iter().all(|p| p.is_backlog()));
        assert!(!PageId::NotFound.is_backlog());
    }
}
