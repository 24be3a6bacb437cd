use crate::rule::{RewriteRule, RuleKind, Step};

/// Annotates the untyped single parameter of the three most common callback
/// sites with an explicit `any`, and collapses a re-export line that is
/// immediately repeated verbatim.
pub(crate) fn rule() -> anyhow::Result<RewriteRule> {
    Ok(RewriteRule {
        name: "callback-params",
        kind: RuleKind::PatternRewrite(vec![
            Step::replace(r"\.map\((\w+)\s*=>", ".map((${1}: any) =>")?,
            Step::replace(r"\.filter\((\w+)\s*=>", ".filter((${1}: any) =>")?,
            Step::replace(r"\.find\((\w+)\s*=>", ".find((${1}: any) =>")?,
            Step::collapse_repeat(r"^export\s*\{\s*default\s+as\s+\w+\s*\}.*;$")?,
        ]),
    })
}
