//! Expression and statement builders over OXC's `AstBuilder`
//!
//! Every helper returns an owned AST node allocated in the builder's arena,
//! so results can be spliced directly into a parsed [`Program`].

use crate::error::{GenError, Result};
use crate::format::FormatOptions;
use oxc_allocator::Allocator;
use oxc_ast::ast::*;
use oxc_ast::{AstBuilder, NONE};
use oxc_codegen::Codegen;
use oxc_parser::Parser;
use oxc_span::{SPAN, SourceType};

/// Check whether `name` is usable as a plain JavaScript identifier.
///
/// Reserved words are not rejected: they are valid as property names, which
/// is the only place this check is used for member access.
pub fn is_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '$' || c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '$' || c == '_' || c.is_alphanumeric())
}

/// Validate a dotted callee path such as `sap.ui.define`.
pub fn validate_dotted_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GenError::invalid_identifier_with_suggestion(
            path,
            "expected a dotted path like `sap.ui.define`",
        ));
    }
    for segment in path.split('.') {
        if !is_identifier_name(segment) {
            return Err(GenError::invalid_identifier_with_suggestion(
                path,
                format!("segment '{}' is not a valid identifier", segment),
            ));
        }
    }
    Ok(())
}

/// JavaScript node builder
///
/// Thin, copyable wrapper around [`AstBuilder`] with method names that mirror
/// the JavaScript being produced.
#[derive(Clone, Copy)]
pub struct JsBuilder<'a> {
    ast: AstBuilder<'a>,
}

impl<'a> JsBuilder<'a> {
    /// Create a new builder allocating into `allocator`
    pub fn new(allocator: &'a Allocator) -> Self {
        Self {
            ast: AstBuilder::new(allocator),
        }
    }

    /// Get the underlying AST builder
    pub fn ast(&self) -> AstBuilder<'a> {
        self.ast
    }

    /// Get the arena this builder allocates into
    pub fn allocator(&self) -> &'a Allocator {
        self.ast.allocator
    }

    /// Copy a string into the arena
    pub fn atom(&self, value: &str) -> Atom<'a> {
        self.ast.atom(value)
    }

    // ---- primitives --------------------------------------------------------

    /// Identifier reference: `name`
    pub fn ident(&self, name: &str) -> Expression<'a> {
        self.ast.expression_identifier(SPAN, self.atom(name))
    }

    /// String literal: `"value"`
    pub fn string(&self, value: &str) -> Expression<'a> {
        self.ast.expression_string_literal(SPAN, self.atom(value), None)
    }

    /// Boolean literal
    pub fn bool(&self, value: bool) -> Expression<'a> {
        self.ast.expression_boolean_literal(SPAN, value)
    }

    /// `null`
    pub fn null(&self) -> Expression<'a> {
        self.ast.expression_null_literal(SPAN)
    }

    /// Parse a standalone expression, e.g. a JSON value carried in a comment.
    pub fn parse_expression(&self, text: &str) -> Result<Expression<'a>> {
        let source = self.allocator().alloc_str(text);
        Parser::new(self.allocator(), source, SourceType::mjs())
            .parse_expression()
            .map_err(|errors| {
                GenError::codegen_failed_with_reason(
                    format!("Invalid expression `{}`", text),
                    errors
                        .iter()
                        .map(|e| e.to_string())
                        .collect::<Vec<_>>()
                        .join(", "),
                )
            })
    }

    // ---- member access -----------------------------------------------------

    /// Member read: `object.property`, or `object["property"]` when the
    /// name is not an identifier.
    pub fn member(&self, object: Expression<'a>, property: &str) -> Expression<'a> {
        Expression::from(self.member_expression(object, property))
    }

    fn member_expression(&self, object: Expression<'a>, property: &str) -> MemberExpression<'a> {
        if is_identifier_name(property) {
            self.ast.member_expression_static(
                SPAN,
                object,
                self.ast.identifier_name(SPAN, self.atom(property)),
                false,
            )
        } else {
            self.ast
                .member_expression_computed(SPAN, object, self.string(property), false)
        }
    }

    /// Dotted path: `sap.ui.define`
    ///
    /// The path is not validated here; see [`validate_dotted_path`].
    pub fn dotted(&self, path: &str) -> Expression<'a> {
        let mut segments = path.split('.');
        let head = segments.next().unwrap_or_default();
        segments.fold(self.ident(head), |object, segment| self.member(object, segment))
    }

    // ---- calls and operators -----------------------------------------------

    /// Call expression: `callee(args...)`
    pub fn call(&self, callee: Expression<'a>, args: Vec<Argument<'a>>) -> Expression<'a> {
        self.ast
            .expression_call(SPAN, callee, NONE, self.ast.vec_from_iter(args), false)
    }

    /// Wrap an expression as a call argument
    pub fn arg(&self, expr: Expression<'a>) -> Argument<'a> {
        Argument::from(expr)
    }

    /// `typeof argument`
    pub fn type_of(&self, argument: Expression<'a>) -> Expression<'a> {
        self.ast
            .expression_unary(SPAN, UnaryOperator::Typeof, argument)
    }

    /// Binary expression: `left op right`
    pub fn binary(
        &self,
        left: Expression<'a>,
        op: BinaryOperator,
        right: Expression<'a>,
    ) -> Expression<'a> {
        self.ast.expression_binary(SPAN, left, op, right)
    }

    /// Logical expression: `left op right`
    pub fn logical(
        &self,
        left: Expression<'a>,
        op: LogicalOperator,
        right: Expression<'a>,
    ) -> Expression<'a> {
        self.ast.expression_logical(SPAN, left, op, right)
    }

    /// Conditional: `test ? consequent : alternate`
    pub fn conditional(
        &self,
        test: Expression<'a>,
        consequent: Expression<'a>,
        alternate: Expression<'a>,
    ) -> Expression<'a> {
        self.ast
            .expression_conditional(SPAN, test, consequent, alternate)
    }

    /// Assignment to a member: `object.property = value`
    pub fn assign_member(
        &self,
        object: Expression<'a>,
        property: &str,
        value: Expression<'a>,
    ) -> Expression<'a> {
        let target = SimpleAssignmentTarget::from(self.member_expression(object, property));
        self.ast.expression_assignment(
            SPAN,
            AssignmentOperator::Assign,
            AssignmentTarget::from(target),
            value,
        )
    }

    // ---- literals with children --------------------------------------------

    /// Array literal: `[a, b, c]`
    pub fn array(&self, elements: Vec<Expression<'a>>) -> Expression<'a> {
        self.ast.expression_array(
            SPAN,
            self.ast
                .vec_from_iter(elements.into_iter().map(ArrayExpressionElement::from)),
        )
    }

    /// Object literal: `{ a: 1, b: 2 }`
    pub fn object(&self, properties: Vec<ObjectPropertyKind<'a>>) -> Expression<'a> {
        self.ast
            .expression_object(SPAN, self.ast.vec_from_iter(properties))
    }

    /// Object property `key: value`; keys that are not identifiers are quoted.
    pub fn prop(&self, key: &str, value: Expression<'a>) -> ObjectPropertyKind<'a> {
        let key = if is_identifier_name(key) {
            self.ast.property_key_static_identifier(SPAN, self.atom(key))
        } else {
            PropertyKey::from(self.string(key))
        };
        self.ast.object_property_kind_object_property(
            SPAN,
            PropertyKind::Init,
            key,
            value,
            false,
            false,
            false,
        )
    }

    // ---- functions ---------------------------------------------------------

    /// Anonymous function expression: `function(params) { body }`
    pub fn function_expr(
        &self,
        params: &[String],
        directives: oxc_allocator::Vec<'a, Directive<'a>>,
        body: Vec<Statement<'a>>,
    ) -> Expression<'a> {
        let items = self.ast.vec_from_iter(params.iter().map(|name| {
            self.ast.formal_parameter(
                SPAN,
                self.ast.vec(),
                self.binding(name),
                None,
                false,
                false,
            )
        }));
        let params = self.ast.alloc_formal_parameters(
            SPAN,
            FormalParameterKind::FormalParameter,
            items,
            NONE,
        );
        let body = self
            .ast
            .alloc_function_body(SPAN, directives, self.ast.vec_from_iter(body));
        self.ast.expression_function(
            SPAN,
            FunctionType::FunctionExpression,
            None,
            false,
            false,
            false,
            NONE,
            NONE,
            params,
            NONE,
            Some(body),
        )
    }

    fn binding(&self, name: &str) -> BindingPattern<'a> {
        self.ast.binding_pattern(
            self.ast
                .binding_pattern_kind_binding_identifier(SPAN, self.atom(name)),
            NONE,
            false,
        )
    }

    // ---- statements --------------------------------------------------------

    /// Expression statement: `expr;`
    pub fn expr_stmt(&self, expr: Expression<'a>) -> Statement<'a> {
        self.ast.statement_expression(SPAN, expr)
    }

    /// `var name = init;`
    pub fn var_decl(&self, name: &str, init: Expression<'a>) -> Statement<'a> {
        let declarator = self.ast.variable_declarator(
            SPAN,
            VariableDeclarationKind::Var,
            self.binding(name),
            Some(init),
            false,
        );
        Statement::VariableDeclaration(self.ast.alloc_variable_declaration(
            SPAN,
            VariableDeclarationKind::Var,
            self.ast.vec1(declarator),
            false,
        ))
    }

    // ---- printing ----------------------------------------------------------

    /// Print a list of statements as a standalone program
    pub fn program(&self, statements: Vec<Statement<'a>>) -> Result<String> {
        let program = self.ast.program(
            SPAN,
            SourceType::mjs(),
            "",
            self.ast.vec(), // comments
            None,           // hashbang
            self.ast.vec(), // directives
            self.ast.vec_from_iter(statements),
        );
        Ok(print(&program, &FormatOptions::default()))
    }
}

/// Print a program (parsed or built) with the given formatting options
pub fn print(program: &Program<'_>, opts: &FormatOptions) -> String {
    Codegen::new()
        .with_options(opts.to_codegen_options())
        .build(program)
        .code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_names() {
        assert!(is_identifier_name("foo"));
        assert!(is_identifier_name("_private"));
        assert!(is_identifier_name("$jquery"));
        assert!(is_identifier_name("lib123"));
        assert!(!is_identifier_name("123lib"));
        assert!(!is_identifier_name("my-lib"));
        assert!(!is_identifier_name(""));
    }

    #[test]
    fn test_dotted_path_validation() {
        assert!(validate_dotted_path("sap.ui.define").is_ok());
        assert!(validate_dotted_path("define").is_ok());
        assert!(validate_dotted_path("").is_err());
        assert!(validate_dotted_path("sap..define").is_err());
        assert!(validate_dotted_path("sap.ui.").is_err());
        assert!(validate_dotted_path("sap.ui-5.define").is_err());
    }
}
