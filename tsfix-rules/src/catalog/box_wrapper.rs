use crate::rule::{ConditionalInsert, RewriteRule, RuleKind, Step};
use regex::Regex;

/// Rewrites `<div sx={...}` to the styled `Box` container and makes sure
/// `Box` is importable: appended to an existing `@mui/material` aggregated
/// import, or added as a fresh import line after the first import statement.
pub(crate) fn rule() -> anyhow::Result<RewriteRule> {
    Ok(RewriteRule {
        name: "box-wrapper",
        kind: RuleKind::ConditionalInsert(ConditionalInsert {
            steps: vec![Step::replace(r"<div\s+sx=\{([^}]+)\}", "<Box sx={${1}}")?],
            trigger: Regex::new("<Box")?,
            present: Regex::new(r"(?m)^import[^\n]*\bBox\b")?,
            amend_find: Regex::new(
                r#"import\s*\{\s*([^}]*?)\s*\}\s*from\s*['"]@mui/material['"]"#,
            )?,
            amend_replace: "import { ${1}, Box } from '@mui/material'".to_string(),
            insert_after: Regex::new(r"(?m)^import\b[^\n]*$")?,
            insert_line: "import { Box } from '@mui/material';".to_string(),
        }),
    })
}
