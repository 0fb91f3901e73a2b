//! End-to-end scenarios for the common module shapes.

use super::{inspect, run, with_loader};
use crate::{ModuleStatus, SkipReason, TransformWarning};

#[test]
fn test_default_import_default_export() {
    let out = run(r#"import foo from "a"; export default foo;"#);
    assert_eq!(out.status, ModuleStatus::Wrapped);

    let define = inspect(&out.code, "Main.js");
    assert_eq!(define.callee, "sap.ui.define");
    assert_eq!(define.dependencies, with_loader(&["a"]));
    assert_eq!(
        define.parameters,
        with_loader(&["__defaultImport0"])
    );
    assert_eq!(define.body.len(), 2);
    assert!(define.body[0].starts_with(
        r#"var foo = typeof __defaultImport0 === "object" && __defaultImport0.__esModule ? __defaultImport0.default : __defaultImport0"#
    ));
    assert_eq!(define.last(), "module.exports = foo;");
    assert!(!out.code.contains("__esModule: true"));
    assert!(out.warnings.is_empty());
}

#[test]
fn test_named_imports_named_export() {
    let out = run(r#"import {a,b} from "x"; export {a};"#);
    let define = inspect(&out.code, "Main.js");

    assert_eq!(define.dependencies, with_loader(&["x"]));
    assert_eq!(define.parameters, with_loader(&["__destructureImport0"]));
    assert_eq!(define.body[0], "var a = __destructureImport0.a;");
    assert_eq!(define.body[1], "var b = __destructureImport0.b;");

    assert!(define.last().starts_with("Object.assign(module.exports, {"));
    assert_eq!(define.export("a"), Some("a"));
    assert_eq!(define.export("__esModule"), Some("true"));
    assert_eq!(define.export("b"), None);
}

#[test]
fn test_reexport_from_source() {
    let out = run(r#"export { x as y } from "mod";"#);
    let define = inspect(&out.code, "Main.js");

    assert_eq!(define.dependencies, with_loader(&["mod"]));
    assert_eq!(define.parameters, with_loader(&["__destructureImport0"]));
    assert_eq!(define.body.len(), 1);
    assert!(define.body[0].contains("y: __destructureImport0.x"));
    assert!(!define.body[0].contains("var "));
}

#[test]
fn test_body_order_is_prelude_body_exports() {
    let out = run(
        r#"
import { helper } from "./util";
const value = helper(1);
export { value };
console.log(value);
"#,
    );
    let define = inspect(&out.code, "Main.js");
    assert_eq!(define.body.len(), 4);
    assert_eq!(define.body[0], "var helper = __destructureImport0.helper;");
    assert_eq!(define.body[1], "const value = helper(1);");
    assert_eq!(define.body[2], "console.log(value);");
    assert!(define.body[3].starts_with("Object.assign(module.exports"));
}

#[test]
fn test_mixed_default_and_named_warns() {
    let out = run("export default 1; export const a = 2;");
    assert_eq!(out.warnings, vec![TransformWarning::MixedExports]);

    let define = inspect(&out.code, "Main.js");
    assert_eq!(define.export_keys(), ["default", "a", "__esModule"]);
    assert_eq!(define.export("default"), Some("1"));
    assert_eq!(define.export("a"), Some("a"));
    assert_eq!(define.export("__esModule"), Some("true"));
}

#[test]
fn test_no_warnings_option_suppresses() {
    let opts = crate::TransformOptions {
        no_warnings: true,
        ..Default::default()
    };
    let out = crate::transform("export default 1; export const a = 2;", "Main.js", &opts).unwrap();
    assert_eq!(out.status, ModuleStatus::Wrapped);
    assert!(out.warnings.is_empty());
}

#[test]
fn test_idempotent() {
    let source = r#"
import foo from "a";
import { b } from "b";
export const c = foo(b);
export default c;
"#;
    let first = run(source);
    assert_eq!(first.status, ModuleStatus::Wrapped);

    let second = run(&first.code);
    assert_eq!(second.status, ModuleStatus::Skipped(SkipReason::AlreadyWrapped));
    assert_eq!(second.code, first.code);
}

#[test]
fn test_forced_module_without_syntax() {
    let out = run("/* {\"isModule\": true} */\nconst x = 1;");
    assert_eq!(out.status, ModuleStatus::Wrapped);

    let define = inspect(&out.code, "Main.js");
    assert_eq!(define.dependencies, with_loader(&[]));
    assert_eq!(define.parameters, with_loader(&[]));
    assert_eq!(define.body, vec!["const x = 1;".to_string()]);
}

#[test]
fn test_global_export_flag() {
    let out = run("/* {\"globalExport\": true} */\nexport default 1;");
    let define = inspect(&out.code, "Main.js");
    assert_eq!(define.global_export.as_deref(), Some("true"));

    let out = run("export default 1;");
    assert_eq!(inspect(&out.code, "Main.js").global_export, None);
}

#[test]
fn test_global_export_string() {
    let out = run("// {\"globalExport\": \"my.lib\"}\nexport default 1;");
    let define = inspect(&out.code, "Main.js");
    assert_eq!(define.global_export.as_deref(), Some("\"my.lib\""));
}

#[test]
fn test_directives_move_into_factory() {
    let out = run("\"use strict\";\nimport a from \"a\";\nexport default a;");
    let define = inspect(&out.code, "Main.js");
    assert_eq!(define.directives, vec!["use strict".to_string()]);
}

#[test]
fn test_dynamic_import_inside_module() {
    let out = run(r#"import a from "a"; export default () => import("./lazy");"#);
    assert!(out.code.contains(r#"sap.ui.require("./lazy")"#));
    // `import()` does not add a dependency
    assert_eq!(out.dependencies, with_loader(&["a"]));
}

#[test]
fn test_custom_loader_names() {
    let opts = crate::TransformOptions {
        loader: crate::LoaderNames {
            define: "define".to_string(),
            require: "require".to_string(),
        },
        ..Default::default()
    };
    let out = crate::transform(
        r#"import a from "a"; export default () => import("b");"#,
        "Main.js",
        &opts,
    )
    .unwrap();
    let define = inspect(&out.code, "Main.js");
    assert_eq!(define.callee, "define");
    assert!(out.code.contains(r#"require("b")"#));
    assert!(!out.code.contains("sap.ui"));
}

#[test]
fn test_invalid_loader_is_rejected() {
    let opts = crate::TransformOptions {
        loader: crate::LoaderNames {
            define: "sap..define".to_string(),
            require: crate::DEFAULT_REQUIRE.to_string(),
        },
        ..Default::default()
    };
    let err = crate::transform("export default 1;", "Main.js", &opts).unwrap_err();
    assert!(matches!(err, crate::TransformError::InvalidOptions(_)));
}

#[test]
fn test_parse_error_is_reported() {
    let err = crate::transform("import {", "Broken.js", &Default::default()).unwrap_err();
    assert!(matches!(err, crate::TransformError::Parse(_)));
    assert!(err.to_string().contains("Broken.js"));
}

#[test]
fn test_define_call_inside_function_still_wraps() {
    let out = run(
        r#"import a from "a";
export default a;
function later() { sap.ui.define([], function () {}); }
"#,
    );
    assert_eq!(out.status, ModuleStatus::Wrapped);

    let define = inspect(&out.code, "Main.js");
    assert_eq!(define.callee, "sap.ui.define");
    assert_eq!(define.dependencies, with_loader(&["a"]));
    assert!(define.body.iter().any(|s| s.starts_with("function later()")));
    assert_eq!(define.last(), "module.exports = a;");
}
