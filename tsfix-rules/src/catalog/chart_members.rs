use crate::rule::{RewriteRule, RuleKind, Step};

/// Within a `chart.js` import, the lowercase `title` member is a typo for
/// the `Title` plugin export.
pub(crate) fn rule() -> anyhow::Result<RewriteRule> {
    Ok(RewriteRule {
        name: "chart-members",
        kind: RuleKind::PatternRewrite(vec![Step::replace(
            r#"import\s*\{([^}]*)\btitle\b([^}]*)\}\s*from\s*['"]chart\.js['"]"#,
            "import {${1}Title${2}} from 'chart.js'",
        )?]),
    })
}
