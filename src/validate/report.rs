//! Collected violations and their terminal rendering.

use serde::Serialize;

use super::{Violation, ViolationKind};
use crate::log;
use crate::utils::plural_count;

/// Every violation found by one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// True when the tree was accepted without any violation.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }

    /// Violations of one kind, in report order.
    pub fn of_kind(&self, kind: ViolationKind) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.kind() == kind)
    }

    pub fn count(&self, kind: ViolationKind) -> usize {
        self.of_kind(kind).count()
    }

    /// One-line summary, e.g. `2 duplicate paths, 1 malformed segments`.
    pub fn summary(&self) -> String {
        if self.is_clean() {
            return "no violations".to_string();
        }
        ViolationKind::ALL
            .into_iter()
            .filter_map(|kind| match self.count(kind) {
                0 => None,
                n => Some(format!("{n} {}", kind.label())),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Print violations grouped by kind using the standard log format.
    ///
    /// Output format:
    /// ```text
    /// [error] 3 violations
    ///
    /// [duplicate paths] 1
    ///   - duplicate path `/guide/overview` claimed by 2 nodes
    ///       Guide > Overview
    ///       Guide > overview
    /// ```
    pub fn print(&self) {
        if self.is_clean() {
            return;
        }

        log!("error"; "{}", plural_count(self.len(), "violation"));
        for kind in ViolationKind::ALL {
            let count = self.count(kind);
            if count == 0 {
                continue;
            }
            eprintln!();
            log!(kind.label(); "{count}");
            for violation in self.of_kind(kind) {
                eprintln!("{}", format_violation(violation));
            }
        }
    }

    /// Format every violation as a string (for error messages and watch mode).
    pub fn format(&self) -> String {
        self.violations
            .iter()
            .map(format_violation)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl IntoIterator for ValidationReport {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// Format a single violation with the nodes it names.
fn format_violation(violation: &Violation) -> String {
    let nodes = violation.nodes();
    let mut lines = vec![format!("  - {violation}")];
    if nodes.len() > 1 {
        for node in nodes {
            lines.push(format!("      {} ({})", node.trail, node.id));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ContentId, NodeId, RoutePath};
    use crate::validate::NodeRef;

    fn node(index: usize, trail: &str) -> NodeRef {
        NodeRef {
            id: NodeId::new(index),
            trail: trail.to_string(),
        }
    }

    fn sample() -> ValidationReport {
        ValidationReport::new(vec![
            Violation::DuplicatePath {
                path: RoutePath::new("guide/overview"),
                nodes: vec![node(2, "Guide > Overview"), node(3, "Guide > overview")],
            },
            Violation::DuplicateContentId {
                id: ContentId(62),
                nodes: vec![node(5, "A"), node(9, "B")],
            },
            Violation::Normalization {
                at: "C > md".into(),
                reason: "content id must be numeric".into(),
            },
        ])
    }

    #[test]
    fn test_counts_and_summary() {
        let report = sample();
        assert!(!report.is_clean());
        assert_eq!(report.len(), 3);
        assert_eq!(report.count(ViolationKind::DuplicatePath), 1);
        assert_eq!(report.count(ViolationKind::MalformedSegment), 0);
        assert_eq!(
            report.summary(),
            "1 malformed entries, 1 duplicate paths, 1 duplicate content ids"
        );
        assert_eq!(ValidationReport::default().summary(), "no violations");
    }

    #[test]
    fn test_format_lists_nodes() {
        let formatted = sample().format();
        assert!(formatted.contains("/guide/overview"));
        assert!(formatted.contains("Guide > Overview"));
        assert!(formatted.contains("Guide > overview"));
        assert!(formatted.contains("C > md"));
    }
}
