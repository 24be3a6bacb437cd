use crate::rule::{LiteralMap, MatchAnchor, RewriteRule, RuleKind};

/// Calls against the generic `api` object that belong on category-specific
/// service objects (or, for the dashboard stats, a literal endpoint call).
const PAIRS: &[(&str, &str)] = &[
    ("api.login", "authService.login"),
    ("api.getCurrentUser", "authService.getCurrentUser"),
    ("api.getExperiments", "experimentService.getExperiments"),
    ("api.getDevices", "deviceService.getDevices"),
    ("api.getTemplates", "templateService.getTemplates"),
    ("api.getResources", "resourceService.getResources"),
    ("api.getDashboardStats", "api.get('/dashboard/stats')"),
    ("api.getRecentExperiments", "experimentService.getExperiments"),
    ("apiService.post", "api.post"),
    ("apiService.get", "api.get"),
    ("apiService.put", "api.put"),
    ("apiService.delete", "api.delete"),
];

pub(crate) fn rule() -> anyhow::Result<RewriteRule> {
    Ok(RewriteRule {
        name: "service-calls",
        kind: RuleKind::LiteralMap(LiteralMap::new(MatchAnchor::Token, PAIRS)?),
    })
}

#[cfg(test)]
mod tests {
    use super::rule;
    use pretty_assertions::assert_eq;

    #[test]
    fn routes_auth_calls_to_auth_service() {
        let rule = rule().expect("rule");
        assert_eq!(
            rule.apply("const user = await api.login(creds);"),
            "const user = await authService.login(creds);"
        );
        assert_eq!(
            rule.apply("api.getCurrentUser()"),
            "authService.getCurrentUser()"
        );
    }

    #[test]
    fn rewrites_dashboard_stats_to_endpoint_call() {
        let rule = rule().expect("rule");
        assert_eq!(
            rule.apply("const stats = await api.getDashboardStats();"),
            "const stats = await api.get('/dashboard/stats')();"
        );
    }

    #[test]
    fn collapses_api_service_wrapper_onto_api() {
        let rule = rule().expect("rule");
        assert_eq!(rule.apply("apiService.post(url, body)"), "api.post(url, body)");
        assert_eq!(rule.apply("apiService.delete(url)"), "api.delete(url)");
    }

    #[test]
    fn refuses_matches_inside_longer_receivers() {
        let rule = rule().expect("rule");
        assert_eq!(rule.apply("myapi.login(creds)"), "myapi.login(creds)");
        assert_eq!(rule.apply("api.loginAttempts"), "api.loginAttempts");
    }
}
