use crate::rule::RewriteRule;

mod box_wrapper;
mod callback_params;
mod chart_members;
mod icon_names;
mod import_paths;
mod member_names;
mod service_calls;
mod style_props;

/// The fixed catalog, in required order.
///
/// Order is significant: later categories operate on text produced by
/// earlier ones (the import-path fixes run after the syntax fixes that can
/// alter surrounding text).
pub fn builtin_rules() -> anyhow::Result<Vec<RewriteRule>> {
    Ok(vec![
        box_wrapper::rule()?,
        icon_names::rule()?,
        service_calls::rule()?,
        member_names::rule()?,
        style_props::rule()?,
        callback_params::rule()?,
        import_paths::rule()?,
        chart_members::rule()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::builtin_rules;

    #[test]
    fn catalog_order_is_fixed() {
        let rules = builtin_rules().expect("catalog");
        let names: Vec<_> = rules.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "box-wrapper",
                "icon-names",
                "service-calls",
                "member-names",
                "style-props",
                "callback-params",
                "import-paths",
                "chart-members",
            ]
        );
    }

    #[test]
    fn every_rule_is_a_noop_on_plain_text() {
        let text = "const total = rows.length;\n";
        for rule in builtin_rules().expect("catalog") {
            assert_eq!(rule.apply(text), text, "rule {} must not touch plain text", rule.name);
        }
    }
}
