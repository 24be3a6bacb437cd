use crate::rule::{LiteralMap, MatchAnchor, RewriteRule, RuleKind, Step};

/// Icon identifier drift observed in the tree: lowercase names that should
/// be `*Icon` exports, and `*Icon` names that should be the bare export.
const PAIRS: &[(&str, &str)] = &[
    ("visibility", "VisibilityIcon"),
    ("email", "EmailIcon"),
    ("devices", "DevicesIcon"),
    ("analytics", "AnalyticsIcon"),
    ("settings", "SettingsIcon"),
    ("share", "ShareIcon"),
    ("ScienceIcon", "Science"),
    ("logout", "LogoutIcon"),
    ("sort", "SortIcon"),
    ("restore", "RestoreIcon"),
    ("Event", "EventIcon"),
    ("HelpIcon", "HelpOutlineIcon"),
    ("FiberManualRecordIcon", "FiberManualRecord"),
    ("ArrowDownwardIcon", "ArrowDownward"),
    ("FormatSizeIcon", "FormatSize"),
    ("DragIndicatorIcon", "DragIndicator"),
    ("ArticleIcon", "Article"),
    ("AutoGraphIcon", "AutoGraph"),
    ("LightbulbIcon", "Lightbulb"),
    ("MenuBookIcon", "MenuBook"),
    ("DataObjectIcon", "DataObject"),
    ("FavoriteIcon", "Favorite"),
    ("FavoriteBorderIcon", "FavoriteBorder"),
];

/// Corrects icon symbol names as whole tokens, then normalizes the two
/// known `utils/icons` import paths to their canonical single-quoted form.
pub(crate) fn rule() -> anyhow::Result<RewriteRule> {
    let map = LiteralMap::new(MatchAnchor::Token, PAIRS)?.with_followups(vec![
        Step::replace(
            r#"from\s*['"]\.\./\.\./utils/icons['"]"#,
            "from '../../utils/icons'",
        )?,
        Step::replace(
            r#"from\s*['"]\.\./utils/icons['"]"#,
            "from '../utils/icons'",
        )?,
    ]);
    Ok(RewriteRule {
        name: "icon-names",
        kind: RuleKind::LiteralMap(map),
    })
}
