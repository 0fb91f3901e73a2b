//! Public API tests: host-provided trees and output options.

use amdwrap::{
    ModuleStatus, ModuleTransformer, SkipReason, TransformOptions, TransformWarning, transform,
};
use amdwrap_gen::{Allocator, FormatOptions, JsBuilder, ParseOptions, QuoteStyle, parse, print};

#[test]
fn test_process_host_tree() {
    let allocator = Allocator::default();
    let js = JsBuilder::new(&allocator);
    let options = TransformOptions::default();
    let transformer = ModuleTransformer::new(js, &options).unwrap();

    let source = r#"import a from "a"; import { b } from "b"; export default a + b;"#;
    let mut parsed = parse(&allocator, source, "Main.js", ParseOptions::default()).unwrap();
    let report = transformer.process(parsed.ast_mut()).unwrap();

    assert_eq!(report.status, ModuleStatus::Wrapped);
    assert_eq!(
        report.dependencies,
        vec!["module", "exports", "require", "a", "b"]
    );
    assert_eq!(
        report.parameters,
        vec![
            "module",
            "exports",
            "require",
            "__defaultImport0",
            "__destructureImport1"
        ]
    );
    assert_eq!(report.dynamic_imports, 0);
    assert!(report.is_modified());

    let code = print(parsed.ast(), &FormatOptions::default());
    assert!(code.starts_with("sap.ui.define("));
    assert!(code.contains("module.exports = a + b"));
}

#[test]
fn test_one_transformer_many_modules() {
    let allocator = Allocator::default();
    let js = JsBuilder::new(&allocator);
    let options = TransformOptions::default();
    let transformer = ModuleTransformer::new(js, &options).unwrap();

    let mut first = parse(
        &allocator,
        "import x from \"x\"; export default x; export const y = 1;",
        "First.js",
        ParseOptions::default(),
    )
    .unwrap();
    let first_report = transformer.process(first.ast_mut()).unwrap();
    assert_eq!(first_report.warnings, vec![TransformWarning::MixedExports]);

    // Nothing from the first module leaks into the second
    let mut second = parse(&allocator, "const z = 1;", "Second.js", ParseOptions::default()).unwrap();
    let second_report = transformer.process(second.ast_mut()).unwrap();
    assert_eq!(
        second_report.status,
        ModuleStatus::Skipped(SkipReason::NoModuleSyntax)
    );
    assert!(second_report.warnings.is_empty());
    assert!(second_report.dependencies.is_empty());
    assert!(!second_report.is_modified());
}

#[test]
fn test_single_quote_output() {
    let options = TransformOptions {
        format: FormatOptions {
            quote_style: QuoteStyle::Single,
            ..FormatOptions::default()
        },
        ..TransformOptions::default()
    };
    let out = transform(r#"import a from "a"; export default a;"#, "Main.js", &options).unwrap();
    for dependency in ["'module'", "'exports'", "'require'", "'a'"] {
        assert!(out.code.contains(dependency), "missing {dependency} in {}", out.code);
    }
    assert!(!out.code.contains("\"a\""));
}

#[test]
fn test_options_from_json() {
    let options: TransformOptions = serde_json::from_str(
        r#"{ "loader": { "define": "define", "require": "require" }, "noWarnings": true }"#,
    )
    .unwrap();
    let out = transform("export default 1; export const a = 1;", "Main.js", &options).unwrap();
    assert!(out.code.starts_with("define(["));
    assert!(out.warnings.is_empty());
}

#[test]
fn test_typescript_source_type_from_extension() {
    let out = transform(
        "import { value } from \"./v\";\nexport const typed: number = value;",
        "Main.ts",
        &TransformOptions::default(),
    )
    .unwrap();
    assert_eq!(out.status, ModuleStatus::Wrapped);
    assert!(out.code.contains("const typed: number = value"));
}
