use crate::rule::{LiteralMap, MatchAnchor, RewriteRule, RuleKind};

/// Property names that picked up an `Icon` suffix they never had. Matched
/// only in member-access position so the icon components themselves are
/// left alone.
const PAIRS: &[(&str, &str)] = &[
    ("EmailIcon", "email"),
    ("SettingsIcon", "settings"),
    ("BackupIconInterval", "backupInterval"),
    ("CloudSyncIcon", "cloudSync"),
    ("autoBackupIcon", "autoBackup"),
    ("CategoryIcon", "category"),
];

pub(crate) fn rule() -> anyhow::Result<RewriteRule> {
    Ok(RewriteRule {
        name: "member-names",
        kind: RuleKind::LiteralMap(LiteralMap::new(MatchAnchor::MemberAccess, PAIRS)?),
    })
}

#[cfg(test)]
mod tests {
    use super::rule;
    use pretty_assertions::assert_eq;

    #[test]
    fn rewrites_only_in_member_access_position() {
        let rule = rule().expect("rule");
        assert_eq!(rule.apply("profile.EmailIcon"), "profile.email");
        assert_eq!(rule.apply("config.BackupIconInterval"), "config.backupInterval");
        assert_eq!(rule.apply("<EmailIcon />"), "<EmailIcon />");
        assert_eq!(rule.apply("{ SettingsIcon }"), "{ SettingsIcon }");
    }

    #[test]
    fn refuses_longer_member_names() {
        let rule = rule().expect("rule");
        assert_eq!(rule.apply("x.EmailIconButton"), "x.EmailIconButton");
    }
}
