//! End-to-end tests for the doclink binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const DOCS: &str = r#"{
  "timestamp": "2020-05-13T00:00:00Z",
  "nodes": [
    { "kind": "import", "name": "fs", "location": { "filename": "mod.ts", "line": 1, "col": 0 },
      "importDef": { "src": "https://deno.land/std/fs/mod.ts" } },
    { "kind": "function", "name": "open", "location": { "filename": "mod.ts", "line": 3, "col": 0 },
      "functionDef": {
        "params": [],
        "returnType": { "repr": "Promise<io.File>", "kind": "typeRef",
          "typeRef": { "typeName": "Promise", "typeParams": [
            { "repr": "io.File", "kind": "typeRef", "typeRef": { "typeName": "io.File" } }
          ] } }
      } },
    { "kind": "namespace", "name": "io", "location": { "filename": "mod.ts", "line": 10, "col": 0 },
      "namespaceDef": { "elements": [
        { "kind": "class", "name": "Base", "location": { "filename": "mod.ts", "line": 11, "col": 2 },
          "classDef": {
            "methods": [
              { "name": "close", "location": { "filename": "mod.ts", "line": 12, "col": 4 }, "kind": "method", "functionDef": {} },
              { "name": "secret", "location": { "filename": "mod.ts", "line": 13, "col": 4 }, "kind": "method",
                "accessibility": "private", "functionDef": {} }
            ] } },
        { "kind": "class", "name": "File", "location": { "filename": "mod.ts", "line": 20, "col": 2 },
          "classDef": {
            "extends": "Base",
            "properties": [
              { "name": "rid", "location": { "filename": "mod.ts", "line": 21, "col": 4 },
                "tsType": { "repr": "Rid", "kind": "typeRef", "typeRef": { "typeName": "Rid" } } }
            ] } }
      ] } }
  ]
}"#;

const CYCLE: &str = r#"[
  { "kind": "class", "name": "C", "location": { "filename": "a.ts", "line": 1, "col": 0 }, "classDef": { "extends": "D" } },
  { "kind": "class", "name": "D", "location": { "filename": "a.ts", "line": 2, "col": 0 }, "classDef": { "extends": "C" } }
]"#;

const BUILTINS: &str = r#"[
  { "kind": "namespace", "name": "Deno", "location": { "filename": "lib.deno.d.ts", "line": 1, "col": 0 },
    "namespaceDef": { "elements": [
      { "kind": "class", "name": "Buffer", "location": { "filename": "lib.deno.d.ts", "line": 2, "col": 2 }, "classDef": {} }
    ] } }
]"#;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Binary running inside `dir` with no ambient config or env overrides.
fn doclink(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("doclink").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("DOCLINK_BUILTINS")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn list_prints_canonical_sections() {
    let temp = TempDir::new().unwrap();
    let docs = write(temp.path(), "docs.json", DOCS);

    doclink(temp.path())
        .arg("list")
        .arg(&docs)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Functions:\n  open\n\nClasses:\n  io.Base\n  io.File\n\nNamespaces:\n  io\n",
        ))
        .stdout(predicate::str::contains("fs").not());
}

#[test]
fn list_json_renders_grouped_index() {
    let temp = TempDir::new().unwrap();
    let docs = write(temp.path(), "docs.json", DOCS);

    let output = doclink(temp.path())
        .args(["list", "--json"])
        .arg(&docs)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["nodes"]["classes"][1]["name"], "File");
    assert_eq!(value["nodes"]["classes"][1]["scope"][0], "io");
    assert!(value["generatedAt"].is_string());
}

#[test]
fn resolve_local_from_nested_scope() {
    let temp = TempDir::new().unwrap();
    let docs = write(temp.path(), "docs.json", DOCS);

    doclink(temp.path())
        .arg("resolve")
        .arg(&docs)
        .args(["Base", "--scope", "io", "--must-be", "class"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type": "local""#))
        .stdout(predicate::str::contains(r##""href": "#io.Base""##));
}

#[test]
fn resolve_through_namespace_import() {
    let temp = TempDir::new().unwrap();
    let docs = write(temp.path(), "docs.json", DOCS);

    doclink(temp.path())
        .arg("resolve")
        .arg(&docs)
        .arg("fs.readFile")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type": "remote""#))
        .stdout(predicate::str::contains(r#""exportedName": "readFile""#));
}

#[test]
fn resolve_builtin_with_configured_href_base() {
    let temp = TempDir::new().unwrap();
    let docs = write(temp.path(), "docs.json", DOCS);
    write(temp.path(), "lib.deno.json", BUILTINS);
    write(
        temp.path(),
        "doclink.toml",
        "builtins = \"lib.deno.json\"\nbuiltin_href_base = \"https://doc.deno.land/builtin/stable\"\n",
    );

    doclink(temp.path())
        .arg("resolve")
        .arg(&docs)
        .args(["Deno.Buffer", "--must-be", "type"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type": "builtin""#))
        .stdout(predicate::str::contains(
            "https://doc.deno.land/builtin/stable#Deno.Buffer",
        ));
}

#[test]
fn resolve_unknown_name_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    let docs = write(temp.path(), "docs.json", DOCS);

    doclink(temp.path())
        .arg("resolve")
        .arg(&docs)
        .arg("Nope")
        .assert()
        .success()
        .stdout(predicate::str::diff("unresolved\n"));
}

#[test]
fn members_hide_private_unless_all() {
    let temp = TempDir::new().unwrap();
    let docs = write(temp.path(), "docs.json", DOCS);

    doclink(temp.path())
        .arg("members")
        .arg(&docs)
        .arg("io.File")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("io > io.File\n\n"))
        .stdout(predicate::str::contains("rid\n"))
        .stdout(predicate::str::contains("close (inherited)"))
        .stdout(predicate::str::contains("secret").not());

    doclink(temp.path())
        .arg("members")
        .arg(&docs)
        .args(["File", "--scope", "io", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("secret (inherited)"));
}

#[test]
fn members_reports_cyclic_inheritance() {
    let temp = TempDir::new().unwrap();
    let docs = write(temp.path(), "cycle.json", CYCLE);

    doclink(temp.path())
        .arg("members")
        .arg(&docs)
        .arg("C")
        .assert()
        .failure()
        .stderr(predicate::str::contains("C -> D -> C"));
}

#[test]
fn check_lists_unresolved_references() {
    let temp = TempDir::new().unwrap();
    let docs = write(temp.path(), "docs.json", DOCS);

    doclink(temp.path())
        .arg("check")
        .arg(&docs)
        .assert()
        .success()
        .stdout(predicate::str::contains("Classes: 2"))
        .stdout(predicate::str::contains("io.File -> Rid (mod.ts#L20)"))
        .stdout(predicate::str::contains("-> Promise").not());
}

#[test]
fn malformed_document_fails() {
    let temp = TempDir::new().unwrap();
    let docs = write(
        temp.path(),
        "bad.json",
        r#"[{ "kind": "module", "name": "m", "location": { "filename": "a.ts", "line": 1, "col": 0 } }]"#,
    );

    doclink(temp.path())
        .arg("check")
        .arg(&docs)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed documentation"));
}

#[test]
fn missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    let docs = write(temp.path(), "docs.json", DOCS);

    doclink(temp.path())
        .args(["--config", "absent.toml", "list"])
        .arg(&docs)
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.toml"));
}

#[test]
fn invalid_config_value_fails() {
    let temp = TempDir::new().unwrap();
    let docs = write(temp.path(), "docs.json", DOCS);
    write(temp.path(), "doclink.toml", "builtin_href_base = \"builtin\"\n");

    doclink(temp.path())
        .arg("list")
        .arg(&docs)
        .assert()
        .failure()
        .stderr(predicate::str::contains("builtin_href_base"));
}
