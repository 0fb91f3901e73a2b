//! Modules that must come out unchanged.

use super::run;
use crate::{ModuleStatus, SkipReason};

#[test]
fn test_already_wrapped_is_untouched() {
    let source = r#"sap.ui.define(["sap/m/Button"], function (Button) {
    "use strict";
    return Button.extend("my.Button", {});
});
"#;
    let out = run(source);
    assert_eq!(out.status, ModuleStatus::Skipped(SkipReason::AlreadyWrapped));
    assert_eq!(out.code, source);
}

#[test]
fn test_already_wrapped_keeps_dynamic_imports() {
    let source = "sap.ui.define([], function () { return import(\"./x\"); });\n";
    let out = run(source);
    assert_eq!(out.code, source);
}

#[test]
fn test_dont_change_is_verbatim() {
    let source = r#"/* {"dontChange": true} */
import   foo from "a";
export   default foo;
export { foo as bar };
"#;
    let out = run(source);
    assert_eq!(out.status, ModuleStatus::Skipped(SkipReason::DontChange));
    assert_eq!(out.code, source);
    assert!(out.dependencies.is_empty());
}

#[test]
fn test_not_a_module_is_verbatim() {
    let source = "/* {\"isModule\": false} */\nimport a from \"a\";\nexport default a;\n";
    let out = run(source);
    assert_eq!(out.status, ModuleStatus::Skipped(SkipReason::NotAModule));
    assert_eq!(out.code, source);
}

#[test]
fn test_plain_script_is_verbatim() {
    let source = "var counter = 0;\nfunction tick() {   counter++; }\n";
    let out = run(source);
    assert_eq!(out.status, ModuleStatus::Skipped(SkipReason::NoModuleSyntax));
    assert_eq!(out.code, source);
}

#[test]
fn test_plain_script_dynamic_import_is_rewritten() {
    let out = run("const load = () => import(\"./lazy\");");
    assert_eq!(out.status, ModuleStatus::Skipped(SkipReason::NoModuleSyntax));
    assert!(out.code.contains("sap.ui.require(\"./lazy\")"));
    assert!(!out.code.contains("sap.ui.define"));
}

#[test]
fn test_plain_script_dynamic_import_is_reprinted() {
    let source = "var   spaced = 1;\nconst load = () =>   import(\"./lazy\");\n";
    let out = run(source);
    assert_eq!(out.status, ModuleStatus::Skipped(SkipReason::NoModuleSyntax));
    assert_ne!(out.code, source);
    assert!(out.code.contains("var spaced = 1;"));
    assert!(!out.code.contains("var   spaced"));
}

#[test]
fn test_config_after_unrelated_comments() {
    let source = "// helpers\n/* {\"dontChange\": true} */\nimport a from \"a\";\n";
    let out = run(source);
    assert_eq!(out.code, source);
}

#[test]
fn test_first_json_comment_wins_even_if_not_object() {
    let out = run("/* 42 */\n/* {\"dontChange\": true} */\nimport a from \"a\";\nexport default a;");
    assert_eq!(out.status, ModuleStatus::Wrapped);
}

#[test]
fn test_empty_export_list_is_not_module_syntax() {
    let out = run("const a = 1;\nexport {};\n");
    assert_eq!(out.status, ModuleStatus::Skipped(SkipReason::NoModuleSyntax));
}
