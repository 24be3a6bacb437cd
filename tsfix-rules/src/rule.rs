//! The rule model: tagged-variant rewrite categories and their application.
//!
//! Every category is a pure text-to-text function over whole-file content.
//! Matching policies:
//! - [`RuleKind::LiteralMap`]: ordered exact find/replace pairs, anchored so
//!   a key never matches inside a longer identifier.
//! - [`RuleKind::PatternRewrite`]: regex matchers with capture groups and
//!   replacement templates.
//! - [`RuleKind::ConditionalInsert`]: a rewrite followed by a guarded
//!   one-shot patch that must not duplicate itself on re-runs.

use anyhow::Context;
use regex::Regex;
use std::borrow::Cow;

/// One self-contained rewrite category in the fixed pipeline.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pub name: &'static str,
    pub kind: RuleKind,
}

impl RewriteRule {
    /// Apply this category to whole-file text.
    ///
    /// Absence of a match is a legitimate no-op, never an error.
    pub fn apply(&self, text: &str) -> String {
        match &self.kind {
            RuleKind::LiteralMap(map) => map.apply(text),
            RuleKind::PatternRewrite(steps) => apply_steps(steps, text),
            RuleKind::ConditionalInsert(insert) => insert.apply(text),
        }
    }
}

/// Matching policy variants. Each category is exactly one of these.
#[derive(Debug, Clone)]
pub enum RuleKind {
    LiteralMap(LiteralMap),
    PatternRewrite(Vec<Step>),
    ConditionalInsert(ConditionalInsert),
}

/// One compiled transformation step.
#[derive(Debug, Clone)]
pub enum Step {
    /// Replace every match of `find`; `replace` may reference capture groups.
    Replace { find: Regex, replace: String },
    /// Collapse a line immediately repeated verbatim into one occurrence.
    /// Only lines matching `line` (after trimming) are considered.
    CollapseRepeat { line: Regex },
}

impl Step {
    pub fn replace(pattern: &str, template: &str) -> anyhow::Result<Self> {
        let find = Regex::new(pattern).with_context(|| format!("compile pattern {pattern}"))?;
        Ok(Step::Replace {
            find,
            replace: template.to_string(),
        })
    }

    pub fn collapse_repeat(pattern: &str) -> anyhow::Result<Self> {
        let line = Regex::new(pattern).with_context(|| format!("compile pattern {pattern}"))?;
        Ok(Step::CollapseRepeat { line })
    }

    fn apply(&self, text: &str) -> String {
        match self {
            Step::Replace { find, replace } => find.replace_all(text, replace.as_str()).into_owned(),
            Step::CollapseRepeat { line } => collapse_repeat(line, text),
        }
    }
}

fn apply_steps(steps: &[Step], text: &str) -> String {
    steps.iter().fold(text.to_string(), |acc, s| s.apply(&acc))
}

fn collapse_repeat(line: &Regex, text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for current in text.split('\n') {
        if let Some(prev) = kept.last()
            && prev.trim() == current.trim()
            && line.is_match(current.trim())
        {
            continue;
        }
        kept.push(current);
    }
    kept.join("\n")
}

/// Where a literal-map key is allowed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAnchor {
    /// Standalone tokens only; never a substring of a longer identifier.
    Token,
    /// Only immediately after a member-access dot.
    MemberAccess,
    /// Only as a quoted import target: `from '<s>'` or `from "<s>"`, each
    /// quote style matched and rewritten independently.
    ImportTarget,
}

/// Ordered exact find/replace pairs compiled against a position anchor.
#[derive(Debug, Clone)]
pub struct LiteralMap {
    steps: Vec<Step>,
    followups: Vec<Step>,
}

impl LiteralMap {
    pub fn new(anchor: MatchAnchor, pairs: &[(&str, &str)]) -> anyhow::Result<Self> {
        let mut steps = Vec::new();
        for &(from, to) in pairs {
            compile_pair(anchor, from, to, &mut steps)?;
        }
        Ok(Self {
            steps,
            followups: Vec::new(),
        })
    }

    /// Normalization steps run after the pairs, as part of the same category.
    pub fn with_followups(mut self, steps: Vec<Step>) -> Self {
        self.followups = steps;
        self
    }

    fn apply(&self, text: &str) -> String {
        let mapped = apply_steps(&self.steps, text);
        apply_steps(&self.followups, &mapped)
    }
}

fn compile_pair(
    anchor: MatchAnchor,
    from: &str,
    to: &str,
    out: &mut Vec<Step>,
) -> anyhow::Result<()> {
    match anchor {
        MatchAnchor::Token => {
            out.push(Step::replace(&token_pattern(from), &literal_template(to))?);
        }
        MatchAnchor::MemberAccess => {
            let pattern = format!(r"\.{}\b", regex::escape(from));
            let template = format!(".{}", literal_template(to));
            out.push(Step::replace(&pattern, &template)?);
        }
        MatchAnchor::ImportTarget => {
            for quote in ['\'', '"'] {
                let pattern = regex::escape(&format!("from {quote}{from}{quote}"));
                let template = literal_template(&format!("from {quote}{to}{quote}"));
                out.push(Step::replace(&pattern, &template)?);
            }
        }
    }
    Ok(())
}

/// Word boundaries on whichever ends of the key are word-like, so keys such
/// as `api.login` still anchor at both edges.
fn token_pattern(literal: &str) -> String {
    let mut pattern = String::new();
    if literal.chars().next().is_some_and(is_word) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(literal));
    if literal.chars().last().is_some_and(is_word) {
        pattern.push_str(r"\b");
    }
    pattern
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Escape `$` so replacement text is taken literally, not as a group ref.
fn literal_template(s: &str) -> String {
    s.replace('$', "$$")
}

/// A rewrite plus a guarded insertion.
///
/// After `steps` run, when `trigger` matches the result and `present` does
/// not: the first `amend_find` match is rewritten with `amend_replace`; if
/// nothing matched, `insert_line` is inserted on a new line after the first
/// `insert_after` match. A file without any `insert_after` match is left
/// without the insertion.
#[derive(Debug, Clone)]
pub struct ConditionalInsert {
    pub steps: Vec<Step>,
    pub trigger: Regex,
    pub present: Regex,
    pub amend_find: Regex,
    pub amend_replace: String,
    pub insert_after: Regex,
    pub insert_line: String,
}

impl ConditionalInsert {
    fn apply(&self, text: &str) -> String {
        let mut out = apply_steps(&self.steps, text);
        if !self.trigger.is_match(&out) || self.present.is_match(&out) {
            return out;
        }

        let amended = match self.amend_find.replace(&out, self.amend_replace.as_str()) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        match amended {
            Some(s) => out = s,
            None => {
                if let Some(m) = self.insert_after.find(&out) {
                    out.insert_str(m.end(), &format!("\n{}", self.insert_line));
                }
            }
        }
        out
    }
}
