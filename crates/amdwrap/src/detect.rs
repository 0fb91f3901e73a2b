//! Recognise modules that already call the loader's define.

use oxc_ast::ast::{Expression, Program, Statement};

/// Does `expr` spell out the dotted `path` (`sap.ui.define`)?
pub fn is_dotted_path(expr: &Expression<'_>, path: &str) -> bool {
    match (expr, path.rsplit_once('.')) {
        (Expression::Identifier(ident), None) => ident.name.as_str() == path,
        (Expression::StaticMemberExpression(member), Some((object, property))) => {
            member.property.name.as_str() == property && is_dotted_path(&member.object, object)
        }
        (Expression::ParenthesizedExpression(paren), _) => is_dotted_path(&paren.expression, path),
        _ => false,
    }
}

/// True when a top-level statement calls `define`.
///
/// Only statements of the program body count, plus the body of an
/// immediately invoked function there. A define call nested in an ordinary
/// function does not make the file an AMD module.
pub fn calls_define(program: &Program<'_>, define: &str) -> bool {
    statements_call_define(&program.body, define)
}

fn statements_call_define(statements: &[Statement<'_>], define: &str) -> bool {
    statements.iter().any(|statement| match statement {
        Statement::ExpressionStatement(statement) => expression_calls_define(&statement.expression, define),
        _ => false,
    })
}

fn expression_calls_define(expr: &Expression<'_>, define: &str) -> bool {
    match expr {
        Expression::ParenthesizedExpression(paren) => expression_calls_define(&paren.expression, define),
        Expression::SequenceExpression(sequence) => sequence
            .expressions
            .iter()
            .any(|expr| expression_calls_define(expr, define)),
        // `!function () { ... }()`
        Expression::UnaryExpression(unary) => expression_calls_define(&unary.argument, define),
        Expression::CallExpression(call) => {
            is_dotted_path(&call.callee, define) || iife_calls_define(&call.callee, define)
        }
        _ => false,
    }
}

fn iife_calls_define(callee: &Expression<'_>, define: &str) -> bool {
    match callee {
        Expression::ParenthesizedExpression(paren) => iife_calls_define(&paren.expression, define),
        Expression::FunctionExpression(function) => function
            .body
            .as_ref()
            .is_some_and(|body| statements_call_define(&body.statements, define)),
        Expression::ArrowFunctionExpression(arrow) => statements_call_define(&arrow.body.statements, define),
        _ => false,
    }
}
