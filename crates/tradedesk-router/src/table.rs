use tracing::{debug, warn};
use tradedesk_models::config::{RoutingConfig, ShadowPolicy};
use tradedesk_models::route_schema::{active_routes, backlog_route, RouteEntry};
use tradedesk_models::{PageId, PathParams};

use crate::error::RouterError;
use crate::pattern::PathPattern;

/// A registered route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub pattern: PathPattern,
    pub page: PageId,
}

/// A successful resolution: the route that matched and what it captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: PathParams,
}

/// Ordered route table. The first route whose pattern matches wins.
///
/// Registration checks each new route against every earlier one. A route that
/// an earlier route fully covers can never be selected; depending on the
/// [`ShadowPolicy`] it is kept with a warning or refused.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
    policy: ShadowPolicy,
}

impl RouteTable {
    pub fn new(policy: ShadowPolicy) -> Self {
        Self {
            routes: Vec::new(),
            policy,
        }
    }

    /// Build the shell's table: active routes, then enabled backlog routes in
    /// the order they are listed in config.
    pub fn from_config(config: &RoutingConfig) -> Result<Self, RouterError> {
        let mut table = Self::new(config.shadowing);
        for entry in active_routes() {
            table.register(&entry.pattern, entry.page)?;
        }
        for key in &config.backlog {
            let backlog =
                backlog_route(key).ok_or_else(|| RouterError::UnknownBacklogRoute(key.clone()))?;
            table.register(backlog.pattern, backlog.page)?;
        }
        debug!(
            routes = table.len(),
            backlog = config.backlog.len(),
            "Route table built"
        );
        Ok(table)
    }

    pub fn from_entries(entries: &[RouteEntry], policy: ShadowPolicy) -> Result<Self, RouterError> {
        let mut table = Self::new(policy);
        for entry in entries {
            table.register(&entry.pattern, entry.page)?;
        }
        Ok(table)
    }

    /// Append a route to the end of the table.
    pub fn register(&mut self, pattern: &str, page: PageId) -> Result<(), RouterError> {
        let pattern = PathPattern::parse(pattern)?;

        if let Some(earlier) = self.routes.iter().find(|r| r.pattern.covers(&pattern)) {
            match self.policy {
                ShadowPolicy::Reject => {
                    return Err(RouterError::Shadowed {
                        pattern: pattern.to_string(),
                        shadowed_by: earlier.pattern.to_string(),
                    });
                }
                ShadowPolicy::Warn => {
                    warn!(
                        pattern = %pattern,
                        shadowed_by = %earlier.pattern,
                        page = ?page,
                        "Route is unreachable: an earlier route matches every path it matches"
                    );
                }
            }
        } else {
            for earlier in self.routes.iter().filter(|r| r.pattern.overlaps(&pattern)) {
                debug!(
                    pattern = %pattern,
                    earlier = %earlier.pattern,
                    "Route partially overlaps an earlier route; the earlier one wins on shared paths"
                );
            }
        }

        self.routes.push(Route { pattern, page });
        Ok(())
    }

    /// Resolve a pathname. Query string and fragment must already be stripped.
    pub fn resolve(&self, pathname: &str) -> Option<RouteMatch<'_>> {
        self.routes.iter().find_map(|route| {
            route
                .pattern
                .matches(pathname)
                .map(|params| RouteMatch { route, params })
        })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Registered routes as plain entries, in match order.
    pub fn entries(&self) -> Vec<RouteEntry> {
        self.routes
            .iter()
            .map(|r| RouteEntry::new(r.pattern.as_str(), r.page))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_table() -> RouteTable {
        RouteTable::from_config(&RoutingConfig::default()).unwrap()
    }

    fn page_for(table: &RouteTable, path: &str) -> Option<PageId> {
        table.resolve(path).map(|m| m.route.page)
    }

    #[test]
    fn default_table_has_active_routes() {
        let table = default_table();
        assert_eq!(table.len(), 6);
        assert_eq!(page_for(&table, "/"), Some(PageId::Login));
        assert_eq!(page_for(&table, "/transaction-history"), Some(PageId::TransactionHistory));
        assert_eq!(page_for(&table, "/market"), Some(PageId::StockTableWithOrderForm));
        assert_eq!(page_for(&table, "/order-history"), Some(PageId::OrderHistory));
    }

    #[test]
    fn unmatched_path_resolves_to_none() {
        let table = default_table();
        assert!(table.resolve("/unknown-page").is_none());
        assert!(table.resolve("/wallet").is_none());
    }

    #[test]
    fn first_match_wins() {
        let mut table = RouteTable::new(ShadowPolicy::Warn);
        table.register("/:accountId/portfolio", PageId::Portfolio).unwrap();
        table.register("/market/portfolio", PageId::StockTableWithOrderForm).unwrap();

        let m = table.resolve("/market/portfolio").unwrap();
        assert_eq!(m.route.page, PageId::Portfolio);
        assert_eq!(m.params.get("accountId"), Some("market"));
    }

    #[test]
    fn reject_policy_refuses_shadowed_route() {
        let mut table = RouteTable::new(ShadowPolicy::Reject);
        table.register("/:accountId/portfolio", PageId::Portfolio).unwrap();
        let err = table
            .register("/market/portfolio", PageId::StockTableWithOrderForm)
            .unwrap_err();
        assert_eq!(
            err,
            RouterError::Shadowed {
                pattern: "/market/portfolio".to_string(),
                shadowed_by: "/:accountId/portfolio".to_string(),
            }
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn reject_policy_refuses_duplicate_pattern() {
        let mut table = RouteTable::new(ShadowPolicy::Reject);
        table.register("/market", PageId::StockTableWithOrderForm).unwrap();
        assert!(table.register("/market", PageId::OrderHistory).is_err());
    }

    #[test]
    fn specific_before_general_is_not_shadowed() {
        let mut table = RouteTable::new(ShadowPolicy::Reject);
        table.register("/market/portfolio", PageId::StockTableWithOrderForm).unwrap();
        table.register("/:accountId/portfolio", PageId::Portfolio).unwrap();
        assert_eq!(
            page_for(&table, "/market/portfolio"),
            Some(PageId::StockTableWithOrderForm)
        );
        assert_eq!(page_for(&table, "/acct-1/portfolio"), Some(PageId::Portfolio));
    }

    #[test]
    fn backlog_routes_are_appended_in_config_order() {
        let config = RoutingConfig {
            backlog: vec!["wallet".to_string(), "home".to_string()],
            ..RoutingConfig::default()
        };
        let table = RouteTable::from_config(&config).unwrap();
        assert_eq!(table.len(), 8);
        assert_eq!(table.routes()[6].page, PageId::Wallet);
        assert_eq!(table.routes()[7].page, PageId::Home);
        assert_eq!(page_for(&table, "/wallet"), Some(PageId::Wallet));
    }

    #[test]
    fn unknown_backlog_key_is_an_error() {
        let config = RoutingConfig {
            backlog: vec!["crypto".to_string()],
            ..RoutingConfig::default()
        };
        assert_eq!(
            RouteTable::from_config(&config).unwrap_err(),
            RouterError::UnknownBacklogRoute("crypto".to_string())
        );
    }

    #[test]
    fn whole_backlog_registers_under_reject_policy() {
        let config = RoutingConfig {
            shadowing: ShadowPolicy::Reject,
            backlog: tradedesk_models::route_schema::BACKLOG_ROUTES
                .iter()
                .map(|r| r.key.to_string())
                .collect(),
            ..RoutingConfig::default()
        };
        let table = RouteTable::from_config(&config).unwrap();
        assert_eq!(table.len(), 25);
        assert_eq!(
            page_for(&table, "/acct-1/withdraw/choose-payment-method"),
            Some(PageId::WithdrawChoosePaymentMethod)
        );
        assert_eq!(page_for(&table, "/acct-1/withdraw/card-9"), Some(PageId::Withdraw));
    }

    #[test]
    fn entries_reflect_registration_order() {
        let table = default_table();
        let entries = table.entries();
        assert_eq!(entries[3], RouteEntry::new("/:accountId/portfolio", PageId::Portfolio));
    }
}
