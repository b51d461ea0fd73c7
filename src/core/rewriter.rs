//! Call-site rewriting.
//!
//! Visits every call expression of a parsed file and schedules a rewrite for
//! each string-literal argument that is a placeholder whose text differs from
//! the call's actual location. tree-sitter-go parses conversions and some
//! generic calls (`[]byte(x)`, `f[int](x)`) as type conversions; those count
//! as calls with a single argument. Literals that are not direct call
//! arguments (assignments, composite literals, parenthesised arguments) are
//! never touched, and already-correct literals produce no rewrite.

use tree_sitter::{Node, TreeCursor};

use super::{
    marker::PlaceholderMatcher,
    position::{CallSite, resolve},
    source_file::{Rewrite, SourceFile},
};

const CALL_EXPRESSION: &str = "call_expression";
const TYPE_CONVERSION_EXPRESSION: &str = "type_conversion_expression";
const VARIADIC_ARGUMENT: &str = "variadic_argument";
const STRING_LITERALS: [&str; 2] = ["interpreted_string_literal", "raw_string_literal"];

/// Record rewrites for every stale placeholder in `file`.
///
/// Returns true if at least one rewrite was recorded.
pub fn rewrite(file: &mut SourceFile, matcher: &PlaceholderMatcher) -> bool {
    let found = find_rewrites(file, matcher);
    let modified = !found.is_empty();
    file.extend_rewrites(found);
    modified
}

fn find_rewrites(file: &SourceFile, matcher: &PlaceholderMatcher) -> Vec<Rewrite> {
    let source = file.source();
    let mut rewrites = Vec::new();

    let root = file.tree().root_node();
    let mut cursor = root.walk();
    walk_calls(&mut cursor, &mut |call| {
        for arg in call_arguments(call) {
            let Some(arg) = string_literal(arg) else {
                continue;
            };
            let Ok(raw) = arg.utf8_text(source.as_bytes()) else {
                continue;
            };
            if !matcher.matches(raw) {
                continue;
            }

            let site = resolve(call, file.display_path());
            let replacement = replacement_for(matcher, &site);
            if raw == replacement {
                continue;
            }

            let start = arg.start_position();
            rewrites.push(Rewrite {
                range: arg.byte_range(),
                line: start.row + 1,
                col: start.column + 1,
                call_line: site.line,
                original: raw.to_string(),
                replacement,
                source_line: source.lines().nth(start.row).unwrap_or("").to_string(),
            });
        }
    });

    rewrites
}

/// Argument expressions of a call, in source order.
fn call_arguments<'tree>(call: Node<'tree>) -> Vec<Node<'tree>> {
    if call.kind() == TYPE_CONVERSION_EXPRESSION {
        return call.child_by_field_name("operand").into_iter().collect();
    }

    let Some(arguments) = call.child_by_field_name("arguments") else {
        return Vec::new();
    };
    let mut cursor = arguments.walk();
    let args: Vec<Node<'tree>> = arguments.named_children(&mut cursor).collect();
    args
}

/// The string literal an argument consists of, looking through a trailing
/// `...` spread.
fn string_literal(arg: Node<'_>) -> Option<Node<'_>> {
    let node = if arg.kind() == VARIADIC_ARGUMENT {
        arg.named_child(0)?
    } else {
        arg
    };
    STRING_LITERALS.contains(&node.kind()).then_some(node)
}

fn replacement_for(matcher: &PlaceholderMatcher, site: &CallSite) -> String {
    matcher.grammar().format(&site.path, site.line)
}

/// Pre-order walk calling `visit` for every call expression and type
/// conversion under the cursor.
pub(crate) fn walk_calls<'tree>(
    cursor: &mut TreeCursor<'tree>,
    visit: &mut impl FnMut(Node<'tree>),
) {
    loop {
        let node = cursor.node();
        if matches!(node.kind(), CALL_EXPRESSION | TYPE_CONVERSION_EXPRESSION) {
            visit(node);
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}
