use std::io::Write;

use doclink_core::{DocNodeKind, DocsError, Documentation, MustBe};
use tempfile::NamedTempFile;

const SAMPLE: &str = r#"[
  {
    "kind": "function",
    "name": "open",
    "location": { "filename": "mod.ts", "line": 3, "col": 0 },
    "jsDoc": "Opens a file.",
    "functionDef": {
      "params": [
        { "kind": "identifier", "name": "path", "optional": false,
          "tsType": { "repr": "string", "kind": "keyword", "keyword": "string" } }
      ],
      "returnType": {
        "repr": "Promise<File>", "kind": "typeRef",
        "typeRef": { "typeName": "Promise", "typeParams": [
          { "repr": "File", "kind": "typeRef", "typeRef": { "typeName": "File" } }
        ] }
      },
      "isAsync": true,
      "isGenerator": false,
      "typeParams": []
    }
  },
  {
    "kind": "namespace",
    "name": "io",
    "location": { "filename": "mod.ts", "line": 10, "col": 0 },
    "namespaceDef": { "elements": [
      { "kind": "class", "name": "File", "location": { "filename": "mod.ts", "line": 11, "col": 2 },
        "classDef": { "extends": "Closer", "methods": [] } },
      { "kind": "typeAlias", "name": "Mode", "location": { "filename": "mod.ts", "line": 20, "col": 2 },
        "typeAliasDef": { "tsType": { "repr": "Missing", "kind": "typeRef", "typeRef": { "typeName": "Missing" } } } }
    ] }
  },
  {
    "kind": "import",
    "name": "path",
    "location": { "filename": "mod.ts", "line": 1, "col": 0 },
    "importDef": { "src": "https://deno.land/std/path/mod.ts" }
  }
]"#;

#[test]
fn loads_from_path() {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(SAMPLE.as_bytes()).expect("write sample");

    let doc = Documentation::from_path(file.path()).expect("loads");
    assert_eq!(doc.nodes().len(), 3);
    assert_eq!(doc.flattened().len(), 5);
    assert!(doc.timestamp().is_none());
}

#[test]
fn loads_from_reader() {
    let doc = Documentation::from_reader(SAMPLE.as_bytes()).expect("loads");
    let mode = doc
        .find("Mode", &["io".to_string()], Some(MustBe::Type))
        .expect("nested alias");
    assert_eq!(mode.kind(), DocNodeKind::TypeAlias);
    assert_eq!(mode.scope, vec!["io"]);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let error = Documentation::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(error, DocsError::Io { .. }));
}

struct Unreadable;

impl std::io::Read for Unreadable {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("device unplugged"))
    }
}

#[test]
fn reader_failure_keeps_the_io_error() {
    let error = Documentation::from_reader(Unreadable).unwrap_err();
    let DocsError::Read { error: io } = &error else {
        panic!("expected a read error, got {error}");
    };
    assert_eq!(io.to_string(), "device unplugged");
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn null_scopes_are_top_level_before_expansion() {
    let json = r#"[
      { "kind": "namespace", "name": "io", "scope": null,
        "location": { "filename": "mod.ts", "line": 1, "col": 0 },
        "namespaceDef": { "elements": [
          { "kind": "function", "name": "close", "scope": null,
            "location": { "filename": "mod.ts", "line": 2, "col": 2 }, "functionDef": {} }
        ] } }
    ]"#;
    let doc = Documentation::from_json(json).expect("null scope accepted");
    let close = doc.find("close", &["io".to_string()], None).expect("expanded");
    assert_eq!(close.scope, vec!["io"]);
    assert!(doc.nodes()[0].scope.is_empty());
}

#[test]
fn unknown_kind_is_a_parse_error() {
    let json = r#"[{ "kind": "module", "name": "m", "location": { "filename": "a.ts", "line": 1, "col": 0 } }]"#;
    let error = Documentation::from_json(json).unwrap_err();
    assert!(matches!(error, DocsError::Parse { .. }), "{error}");
}

#[test]
fn missing_payload_is_a_parse_error() {
    let json = r#"[{ "kind": "enum", "name": "E", "location": { "filename": "a.ts", "line": 1, "col": 0 } }]"#;
    let error = Documentation::from_json(json).unwrap_err();
    assert!(error.to_string().starts_with("malformed documentation"));
}

#[test]
fn import_without_source_is_invalid() {
    let json = r#"[{ "kind": "import", "name": "x", "location": { "filename": "a.ts", "line": 1, "col": 0 },
        "importDef": { "src": "" } }]"#;
    let error = Documentation::from_json(json).unwrap_err();
    assert!(matches!(error, DocsError::InvalidNode { ref path, .. } if path == "x"));
}

#[test]
fn grouped_listing_is_canonical_and_skips_imports() {
    let doc = Documentation::from_json(SAMPLE).unwrap();
    let grouped = doc.grouped();

    assert_eq!(grouped.len(), 4);
    assert_eq!(grouped.functions[0].name, "open");
    assert_eq!(grouped.classes[0].qualified_name(), "io.File");
    assert_eq!(grouped.type_aliases[0].qualified_name(), "io.Mode");
    assert_eq!(grouped.namespaces[0].name, "io");
}

#[test]
fn reports_unresolved_references_with_their_node() {
    let doc = Documentation::from_json(SAMPLE).unwrap();
    let resolver = doc.link_resolver();

    let unresolved: Vec<(String, &str)> = doc
        .unresolved(&resolver)
        .into_iter()
        .map(|(node, reference)| (node.qualified_name(), reference.name))
        .collect();

    // `Promise` is linked through the external table and `File` is local to `io` only.
    assert_eq!(
        unresolved,
        vec![
            ("open".to_string(), "File"),
            ("io.File".to_string(), "Closer"),
            ("io.Mode".to_string(), "Missing"),
        ]
    );
}
