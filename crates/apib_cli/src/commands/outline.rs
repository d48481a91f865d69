//! Outline command implementation

use std::convert::Infallible;
use std::path::Path;

use apib_ast::{ApiNode, AstArena, Context, VisitResult, Visitor};
use miette::Result;

use crate::load::read_ast;

use super::decorate_file;

/// Builds an indented outline of a document, one line per node.
///
/// Indentation follows the depth of the context, so it relies on every
/// ancestor being recorded there.
#[derive(Default)]
pub struct OutlineVisitor {
    lines: Vec<String>,
}

impl OutlineVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn push(&mut self, ctx: &Context<'_>, text: String) {
        self.lines
            .push(format!("{}{}", "  ".repeat(ctx.len()), text));
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

impl<'a> Visitor<'a> for OutlineVisitor {
    type Error = Infallible;

    fn visit_root(&mut self, node: &'a ApiNode<'a>) -> VisitResult<Infallible> {
        let name = non_empty(node.name()).unwrap_or("(untitled)");
        self.lines.push(name.to_string());
        Ok(())
    }

    fn visit_group(
        &mut self,
        _node: &'a ApiNode<'a>,
        ctx: &Context<'a>,
    ) -> VisitResult<Infallible> {
        let name = non_empty(ctx.group_name()).unwrap_or("(unnamed)");
        self.push(ctx, format!("Group {}", name));
        Ok(())
    }

    fn visit_resource(
        &mut self,
        node: &'a ApiNode<'a>,
        ctx: &Context<'a>,
    ) -> VisitResult<Infallible> {
        let uri = node.uri_template().unwrap_or_default();
        self.push(ctx, format!("Resource {}", uri));
        Ok(())
    }

    fn visit_action(
        &mut self,
        node: &'a ApiNode<'a>,
        ctx: &Context<'a>,
    ) -> VisitResult<Infallible> {
        let uri = ctx
            .resource()
            .and_then(|resource| resource.uri_template())
            .unwrap_or_default();
        self.push(ctx, format!("{} {}", node.method().unwrap_or("?"), uri));
        Ok(())
    }

    fn visit_example(
        &mut self,
        node: &'a ApiNode<'a>,
        ctx: &Context<'a>,
    ) -> VisitResult<Infallible> {
        match non_empty(node.name()) {
            Some(name) => self.push(ctx, format!("Example {}", name)),
            None => self.push(ctx, "Example".to_string()),
        }
        Ok(())
    }

    fn visit_request(
        &mut self,
        node: &'a ApiNode<'a>,
        ctx: &Context<'a>,
    ) -> VisitResult<Infallible> {
        match non_empty(node.name()) {
            Some(name) => self.push(ctx, format!("Request {}", name)),
            None => self.push(ctx, "Request".to_string()),
        }
        Ok(())
    }

    fn visit_response(
        &mut self,
        node: &'a ApiNode<'a>,
        ctx: &Context<'a>,
    ) -> VisitResult<Infallible> {
        let status = match node.status_code() {
            Some(code) => code.to_string(),
            None => node.name().unwrap_or("?").to_string(),
        };
        self.push(ctx, format!("Response {}", status));
        Ok(())
    }
}

pub fn run_outline(ast: &Path) -> Result<()> {
    let raw = read_ast(ast)?;
    let arena = AstArena::new();
    let root = decorate_file(&arena, &raw, ast)?;

    let mut visitor = OutlineVisitor::new();
    let Ok(()) = root.accept(&mut visitor);

    for line in visitor.lines() {
        println!("{}", line);
    }
    Ok(())
}
