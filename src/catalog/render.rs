//! Text templates for catalog previews.
//!
//! Catalog components render text templates using `${...}` syntax:
//!
//! - `${name}` - a merged parameter
//! - `${name.path}` - a field of an object parameter
//! - `${loaded.loader}` / `${loaded.loader.path}` - a cached loader result
//! - `$${escaped}` - literal `${escaped}` in output
//!
//! Variables that do not resolve are left in place, so a missing fixture is
//! visible in the preview instead of failing it.

use serde_json::Value;

use crate::design::{decorator, Component, Decorated, Decorator};
use crate::prepare::SubContext;

/// A segment of a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Variable reference: ${name}
    Variable(String),
}

/// Parse a template into segments.
pub fn parse_template(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut chars = input.chars().peekable();
    let mut literal = String::new();

    while let Some(c) = chars.next() {
        if c != '$' {
            literal.push(c);
            continue;
        }

        match chars.peek() {
            Some('$') => {
                chars.next();
                literal.push('$');
                if chars.peek() == Some(&'{') {
                    // $${...} -> literal ${...}
                    for c in chars.by_ref() {
                        literal.push(c);
                        if c == '}' {
                            break;
                        }
                    }
                }
            }
            Some('{') => {
                chars.next();
                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if !closed {
                    // Unterminated: keep the text as written.
                    literal.push_str("${");
                    literal.push_str(&name);
                    continue;
                }
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Variable(name.trim().to_string()));
            }
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    segments
}

/// Follow a dotted path into a JSON value.
fn walk<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| match current {
        Value::Object(map) => map.get(*key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Resolve one variable against a variant's context.
pub fn lookup<V>(name: &str, context: &SubContext<V>) -> Option<String> {
    let parts: Vec<&str> = name.split('.').collect();
    match parts.as_slice() {
        ["loaded", loader, rest @ ..] => {
            let value = context.loaded().value(loader)?;
            walk(&value, rest).map(display)
        }
        [first, rest @ ..] => {
            let value = context.parameter(first)?;
            walk(value, rest).map(display)
        }
        [] => None,
    }
}

/// Render a template, leaving unresolved variables in place.
pub fn render_template<V>(template: &str, context: &SubContext<V>) -> String {
    parse_template(template)
        .into_iter()
        .map(|segment| match segment {
            Segment::Literal(text) => text,
            Segment::Variable(name) => {
                lookup(&name, context).unwrap_or_else(|| format!("${{{}}}", name))
            }
        })
        .collect()
}

/// Decorator that renders the wrapped component's output as a template.
///
/// Returns a concrete element: the text is rendered once, when the variant
/// is prepared, so loader results cached by then are visible.
pub fn interpolate() -> Decorator<String> {
    decorator(|inner: Component<String>, context: &SubContext<String>| {
        Decorated::Concrete(render_template(&inner.render(), context))
    })
}
