//! Count command implementation

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::path::Path;

use apib_ast::visitor::dispatch;
use apib_ast::{ApiNode, AstArena, Context, NodeKind, VisitResult, Visitor};
use miette::{IntoDiagnostic, Result};
use tracing::debug;

use crate::config::{OutputFormat, VisitConfig};
use crate::load::read_ast;

use super::decorate_file;

/// Final tallies, per node kind, in schema order.
pub type CountReport = BTreeMap<NodeKind, usize>;

/// Counts the nodes of selected kinds.
///
/// Totals are only published once the walk completes.
pub struct CountVisitor {
    kinds: Vec<NodeKind>,
    counts: CountReport,
    report: Option<CountReport>,
}

impl CountVisitor {
    pub fn new(kinds: &[NodeKind]) -> Self {
        Self {
            kinds: kinds.to_vec(),
            counts: CountReport::new(),
            report: None,
        }
    }

    /// Returns the report, if a full walk has completed.
    pub fn report(&self) -> Option<&CountReport> {
        self.report.as_ref()
    }
}

impl<'a> Visitor<'a> for CountVisitor {
    type Error = Infallible;

    fn visit(
        &mut self,
        node: &'a ApiNode<'a>,
        ctx: Option<&Context<'a>>,
    ) -> VisitResult<Infallible> {
        if self.kinds.contains(&node.kind) {
            *self.counts.entry(node.kind).or_default() += 1;
        }
        dispatch(self, node, ctx)
    }

    fn post_visit(&mut self) -> VisitResult<Infallible> {
        let report = self
            .kinds
            .iter()
            .map(|kind| (*kind, self.counts.get(kind).copied().unwrap_or(0)))
            .collect();
        self.report = Some(report);
        Ok(())
    }
}

pub fn run_count(ast: &Path, config: &VisitConfig) -> Result<()> {
    let raw = read_ast(ast)?;
    let arena = AstArena::new();
    let root = decorate_file(&arena, &raw, ast)?;

    let mut visitor = CountVisitor::new(&config.kinds);
    let Ok(()) = root.accept(&mut visitor);

    let report = visitor
        .report()
        .ok_or_else(|| miette::miette!("Walk of {} did not complete", ast.display()))?;
    debug!("Counted {:?}", report);

    match config.format {
        OutputFormat::Text => print!("{}", format_text(report)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).into_diagnostic()?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn format_text(report: &CountReport) -> String {
    report
        .iter()
        .map(|(kind, count)| format!("{}: {}\n", kind, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn resource(uri: &str) -> serde_json::Value {
        json!({
            "uriTemplate": uri,
            "actions": [{
                "method": "GET",
                "examples": [{
                    "requests": [{ "name": "a" }, { "name": "b" }],
                    "responses": [{ "name": "200" }]
                }]
            }]
        })
    }

    fn notes() -> serde_json::Value {
        json!({
            "resourceGroups": [{
                "name": "Notes",
                "resources": [resource("/a"), resource("/b")]
            }]
        })
    }

    #[test]
    fn test_counts_default_kinds() {
        let raw = notes();
        let arena = AstArena::new();
        let root = apib_ast::decorate(&arena, &raw).unwrap();

        let mut visitor = CountVisitor::new(&VisitConfig::new().kinds);
        assert!(visitor.report().is_none());
        root.accept(&mut visitor).unwrap();

        let report = visitor.report().unwrap();
        assert_eq!(
            report,
            &CountReport::from([
                (NodeKind::Resource, 2),
                (NodeKind::Request, 4),
                (NodeKind::Response, 2),
            ])
        );
        assert_eq!(format_text(report), "Resource: 2\nRequest: 4\nResponse: 2\n");
    }

    #[test]
    fn test_absent_kinds_are_reported_as_zero() {
        let raw = json!({ "resourceGroups": [] });
        let arena = AstArena::new();
        let root = apib_ast::decorate(&arena, &raw).unwrap();

        let mut visitor = CountVisitor::new(&[NodeKind::Root, NodeKind::Group]);
        root.accept(&mut visitor).unwrap();

        assert_eq!(
            visitor.report(),
            Some(&CountReport::from([(NodeKind::Root, 1), (NodeKind::Group, 0)]))
        );
    }

    #[test]
    fn test_group_walk_publishes_no_report() {
        let raw = notes();
        let arena = AstArena::new();
        let root = apib_ast::decorate(&arena, &raw).unwrap();

        let mut visitor = CountVisitor::new(&[NodeKind::Resource]);
        root.children[0].accept(&mut visitor).unwrap();

        assert!(visitor.report().is_none());
    }

    #[test]
    fn test_json_report_shape() {
        let report = CountReport::from([(NodeKind::Resource, 2), (NodeKind::Response, 1)]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json, json!({ "Resource": 2, "Response": 1 }));
    }
}
