//! Behavioural tests for the module pipeline.
//!
//! Output is checked by parsing it again and reading the define call apart,
//! so assertions do not depend on printer whitespace.

mod scenario_tests;
mod skip_tests;

use amdwrap_gen::{Allocator, ParseOptions, parse};
use oxc_ast::ast::{
    Argument, ArrayExpressionElement, BindingPatternKind, Expression, ObjectPropertyKind,
    PropertyKey, Statement,
};
use oxc_span::GetSpan;

use crate::{TransformOptions, TransformOutput, transform};

/// Transform with default options, panicking on error.
pub(crate) fn run(source: &str) -> TransformOutput {
    run_as(source, "Main.js")
}

pub(crate) fn run_as(source: &str, filename: &str) -> TransformOutput {
    transform(source, filename, &TransformOptions::default()).expect("transform failed")
}

/// The pieces of a printed define call.
#[derive(Debug)]
pub(crate) struct DefineCall {
    pub callee: String,
    pub dependencies: Vec<String>,
    pub parameters: Vec<String>,
    pub directives: Vec<String>,
    /// Source text of each factory body statement
    pub body: Vec<String>,
    /// Source text of the trailing flag argument
    pub global_export: Option<String>,
    /// Properties of the trailing `Object.assign(module.exports, {...})`,
    /// in order, as (key, value source)
    pub exports: Vec<(String, String)>,
}

impl DefineCall {
    pub fn last(&self) -> &str {
        self.body.last().map(String::as_str).unwrap_or_default()
    }

    /// Value source of an export property.
    pub fn export(&self, key: &str) -> Option<&str> {
        self.exports
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn export_keys(&self) -> Vec<&str> {
        self.exports.iter().map(|(name, _)| name.as_str()).collect()
    }
}

/// Read the properties of an `Object.assign(target, {...})` statement,
/// printed shorthand or not.
fn export_properties(statement: &Statement<'_>, code: &str) -> Vec<(String, String)> {
    let Statement::ExpressionStatement(statement) = statement else {
        return Vec::new();
    };
    let Expression::CallExpression(call) = &statement.expression else {
        return Vec::new();
    };
    if !call.callee.span().source_text(code).ends_with("Object.assign") {
        return Vec::new();
    }
    let Some(Argument::ObjectExpression(object)) = call.arguments.get(1) else {
        return Vec::new();
    };
    object
        .properties
        .iter()
        .filter_map(|property| match property {
            ObjectPropertyKind::ObjectProperty(property) => {
                let key = match &property.key {
                    PropertyKey::StaticIdentifier(id) => id.name.to_string(),
                    PropertyKey::StringLiteral(literal) => literal.value.to_string(),
                    other => other.span().source_text(code).to_string(),
                };
                let value = property.value.span().source_text(code).to_string();
                Some((key, value))
            }
            ObjectPropertyKind::SpreadProperty(_) => None,
        })
        .collect()
}

/// Parse a single `Object.assign(...)` statement, as the assembler prints it.
pub(crate) fn export_object(code: &str) -> Vec<(String, String)> {
    let allocator = Allocator::default();
    let parsed = parse(&allocator, code, "Main.js", ParseOptions::default())
        .expect("output must parse");
    parsed
        .ast()
        .body
        .first()
        .map(|statement| export_properties(statement, code))
        .unwrap_or_default()
}

/// Parse `code` and take its single top-level define call apart.
pub(crate) fn inspect(code: &str, filename: &str) -> DefineCall {
    let allocator = Allocator::default();
    let parsed = parse(&allocator, code, filename, ParseOptions::from_path(filename))
        .expect("output must parse");
    let program = parsed.ast();
    assert_eq!(program.body.len(), 1, "expected a single statement:\n{code}");

    let Statement::ExpressionStatement(statement) = &program.body[0] else {
        panic!("expected an expression statement:\n{code}");
    };
    let Expression::CallExpression(call) = &statement.expression else {
        panic!("expected a call:\n{code}");
    };

    let Some(Argument::ArrayExpression(array)) = call.arguments.first() else {
        panic!("first argument must be the dependency array:\n{code}");
    };
    let dependencies = array
        .elements
        .iter()
        .map(|element| match element {
            ArrayExpressionElement::StringLiteral(path) => path.value.to_string(),
            _ => panic!("dependencies must be string literals:\n{code}"),
        })
        .collect();

    let Some(Argument::FunctionExpression(factory)) = call.arguments.get(1) else {
        panic!("second argument must be the factory:\n{code}");
    };
    let parameters = factory
        .params
        .items
        .iter()
        .map(|param| match &param.pattern.kind {
            BindingPatternKind::BindingIdentifier(id) => id.name.to_string(),
            _ => panic!("parameters must be plain identifiers:\n{code}"),
        })
        .collect();
    let factory_body = factory.body.as_ref().expect("factory has a body");
    let directives = factory_body
        .directives
        .iter()
        .map(|directive| directive.directive.to_string())
        .collect();
    let body = factory_body
        .statements
        .iter()
        .map(|statement| statement.span().source_text(code).to_string())
        .collect();
    let exports = factory_body
        .statements
        .last()
        .map(|statement| export_properties(statement, code))
        .unwrap_or_default();

    DefineCall {
        callee: call.callee.span().source_text(code).to_string(),
        dependencies,
        parameters,
        directives,
        body,
        global_export: call
            .arguments
            .get(2)
            .map(|flag| flag.span().source_text(code).to_string()),
        exports,
    }
}

/// `["module", "exports", "require", ...rest]`
pub(crate) fn with_loader(rest: &[&str]) -> Vec<String> {
    ["module", "exports", "require"]
        .iter()
        .chain(rest)
        .map(|s| s.to_string())
        .collect()
}
