//! Textual rendering of expression trees.
//!
//! Like evaluation, rendering is bottom-up: children are rendered first and
//! their strings are passed to the parent's hook.

use std::collections::HashMap;
use std::fmt::Display;

use super::{Expr, TemporalRelation};
use crate::Id;

/// Display names keyed by interval variable id.
pub type SymbolMap = HashMap<Id, String>;

/// Options controlling how an expression is rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions<'a> {
    /// Renders combinators in function form, e.g. `and(a, b)`.
    pub verbose: bool,
    /// Overrides the label of time points whose interval id is present.
    pub symbol_map: Option<&'a SymbolMap>,
}

impl<'a> RenderOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_symbol_map(mut self, symbol_map: &'a SymbolMap) -> Self {
        self.symbol_map = Some(symbol_map);
        self
    }
}

impl Expr {
    pub fn to_string_with(&self, options: &RenderOptions) -> String {
        match self {
            Expr::Constant(value) => value.to_string(),
            Expr::TimePoint(point) => match options
                .symbol_map
                .and_then(|map| map.get(point.interval()))
            {
                Some(name) => point.render_as(name),
                None => point.to_string(),
            },
            Expr::Relation(relation) => relation.render(options),
            Expr::Not(child) => {
                let inner = child.to_string_with(options);
                if options.verbose {
                    format!("not({inner})")
                } else {
                    format!("~{}", parenthesize(child, inner))
                }
            }
            Expr::And(children) => render_combinator("and", children, options),
            Expr::Or(children) => render_combinator("or", children, options),
        }
    }

    /// Constants and time points never need parentheses.
    pub const fn is_atomic(&self) -> bool {
        matches!(self, Expr::Constant(_) | Expr::TimePoint(_))
    }
}

impl TemporalRelation {
    /// Renders both children, then this relation over them.
    ///
    /// Relations ignore `verbose`.
    pub fn render(&self, options: &RenderOptions) -> String {
        let [first, second] = self.args();
        let first = first.to_string_with(options);
        let second = second.to_string_with(options);
        self.to_string_with([first.as_str(), second.as_str()])
    }
}

fn render_combinator(op: &str, children: &[Expr], options: &RenderOptions) -> String {
    let rendered = children.iter().map(|child| child.to_string_with(options));
    if options.verbose {
        format!("{op}({})", rendered.collect::<Vec<_>>().join(", "))
    } else {
        rendered
            .zip(children)
            .map(|(s, child)| parenthesize(child, s))
            .collect::<Vec<_>>()
            .join(&format!(" {op} "))
    }
}

fn parenthesize(child: &Expr, rendered: String) -> String {
    if child.is_atomic() {
        rendered
    } else {
        format!("({rendered})")
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_with(&RenderOptions::default()))
    }
}

impl Display for TemporalRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(&RenderOptions::default()))
    }
}
