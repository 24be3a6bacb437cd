use crate::rule::{RewriteRule, RuleKind, Step};

/// Rewrites component-prop styling into the equivalent inline style object.
/// `mb` is on the 8px spacing scale, hence the `* 8`.
pub(crate) fn rule() -> anyhow::Result<RewriteRule> {
    Ok(RewriteRule {
        name: "style-props",
        kind: RuleKind::PatternRewrite(vec![
            Step::replace(r#"textAlign="center""#, r#"style={{textAlign: "center"}}"#)?,
            Step::replace(r#"display="flex""#, r#"style={{display: "flex"}}"#)?,
            Step::replace(
                r#"justifyContent="([^"]*)""#,
                r#"style={{justifyContent: "${1}"}}"#,
            )?,
            Step::replace(
                r#"alignItems="([^"]*)""#,
                r#"style={{alignItems: "${1}"}}"#,
            )?,
            Step::replace(r"gap=\{(\d+)\}", "style={{gap: ${1}}}")?,
            Step::replace(r"mb=\{(\d+)\}", "style={{marginBottom: ${1} * 8}}")?,
        ]),
    })
}
