use crate::rule::{LiteralMap, MatchAnchor, RewriteRule, RuleKind};

/// Import targets that lost their relative prefix. Matched as whole quoted
/// strings, so `ExperimentCreate` never touches `ExperimentCreateV2`.
const PAIRS: &[(&str, &str)] = &[
    ("ExperimentResultsNew", "./ExperimentResultsNew"),
    ("ExperimentDataPanel", "./components/ExperimentDataPanel"),
    ("ExperimentCreateV2", "./ExperimentCreateV2"),
    ("ExperimentCreate", "./ExperimentCreate"),
];

pub(crate) fn rule() -> anyhow::Result<RewriteRule> {
    Ok(RewriteRule {
        name: "import-paths",
        kind: RuleKind::LiteralMap(LiteralMap::new(MatchAnchor::ImportTarget, PAIRS)?),
    })
}
