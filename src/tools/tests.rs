use super::*;
use crate::error::ToolError;
use serde_json::json;
use std::path::PathBuf;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("koda_test_{}_{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

async fn execute(registry: &ToolRegistry, name: &str, input: serde_json::Value) -> Result<String, ToolError> {
    registry.get(name).expect("tool registered").execute(input).await
}

#[tokio::test]
async fn test_registry_with_builtins() {
    let registry = ToolRegistry::with_builtins();
    assert_eq!(registry.len(), 3);
    assert!(!registry.is_empty());
    let defs = registry.definitions();
    assert_eq!(defs.len(), 3);
    assert_eq!(defs[0].name, "read_file");
    assert_eq!(defs[1].name, "list_files");
    assert_eq!(defs[2].name, "edit_file");
}

#[tokio::test]
async fn test_unknown_tool_lookup() {
    let registry = ToolRegistry::with_builtins();
    assert!(registry.get("nonexistent_tool").is_none());
}

#[tokio::test]
async fn test_duplicate_name_shadows_earlier() {
    struct Stub(&'static str);

    #[async_trait::async_trait]
    impl Tool for Stub {
        fn name(&self) -> &str {
            "stub"
        }
        fn description(&self) -> &str {
            "test stub"
        }
        fn schema(&self) -> serde_json::Value {
            json!({"type": "object"})
        }
        async fn execute(&self, _input: serde_json::Value) -> Result<String, ToolError> {
            Ok(self.0.to_string())
        }
    }

    let mut registry = ToolRegistry::new();
    registry.register(Box::new(Stub("first")));
    registry.register(Box::new(Stub("second")));

    let out = execute(&registry, "stub", json!({})).await.unwrap();
    assert_eq!(out, "second");
}

#[tokio::test]
async fn test_read_file_cargo_toml() {
    let registry = ToolRegistry::with_builtins();
    let content = execute(&registry, "read_file", json!({"path": "Cargo.toml"}))
        .await
        .unwrap();
    assert!(content.contains("[package]"));
}

#[tokio::test]
async fn test_read_file_roundtrip() {
    let dir = temp_dir("read_roundtrip");
    let path = dir.join("data.txt");
    std::fs::write(&path, "line one\nline two\n").unwrap();

    let registry = ToolRegistry::with_builtins();
    let content = execute(&registry, "read_file", json!({"path": path}))
        .await
        .unwrap();
    assert_eq!(content, "line one\nline two\n");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_read_file_nonexistent() {
    let registry = ToolRegistry::with_builtins();
    let err = execute(&registry, "read_file", json!({"path": "nonexistent_file_xyz.txt"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::NotFound(_)));
}

#[tokio::test]
async fn test_read_file_empty_path() {
    let registry = ToolRegistry::with_builtins();
    let err = execute(&registry, "read_file", json!({"path": ""}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_read_file_directory() {
    let registry = ToolRegistry::with_builtins();
    let err = execute(&registry, "read_file", json!({"path": "src"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::IsADirectory(_)));
}

#[tokio::test]
async fn test_list_files_marks_directories() {
    let dir = temp_dir("list_marks");
    std::fs::create_dir_all(dir.join("sub")).unwrap();
    std::fs::write(dir.join("a.txt"), "a").unwrap();
    std::fs::write(dir.join("sub/inner.txt"), "b").unwrap();

    let registry = ToolRegistry::with_builtins();
    let listing = execute(&registry, "list_files", json!({"path": dir}))
        .await
        .unwrap();
    let entries: Vec<String> = serde_json::from_str(&listing).unwrap();
    assert!(entries.contains(&"a.txt".to_string()));
    assert!(entries.contains(&"sub/".to_string()));
    assert!(entries.contains(&"sub/inner.txt".to_string()));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_list_files_deterministic() {
    let dir = temp_dir("list_stable");
    for name in ["c.txt", "a.txt", "b.txt"] {
        std::fs::write(dir.join(name), name).unwrap();
    }

    let registry = ToolRegistry::with_builtins();
    let first = execute(&registry, "list_files", json!({"path": dir}))
        .await
        .unwrap();
    let second = execute(&registry, "list_files", json!({"path": dir}))
        .await
        .unwrap();
    assert_eq!(first, second);

    let entries: Vec<String> = serde_json::from_str(&first).unwrap();
    assert_eq!(entries, vec!["a.txt", "b.txt", "c.txt"]);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_list_files_nonexistent() {
    let registry = ToolRegistry::with_builtins();
    let err = execute(&registry, "list_files", json!({"path": "no_such_dir_xyz"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::NotFound(_)));
}

#[tokio::test]
async fn test_list_files_on_a_file() {
    let registry = ToolRegistry::with_builtins();
    let err = execute(&registry, "list_files", json!({"path": "Cargo.toml"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::NotADirectory(_)));
}

#[tokio::test]
async fn test_edit_file_create_with_parents() {
    let dir = temp_dir("edit_create");
    let path = dir.join("a/b/new.txt");

    let registry = ToolRegistry::with_builtins();
    let result = execute(
        &registry,
        "edit_file",
        json!({"path": path, "old_str": "", "new_str": "fresh content"}),
    )
    .await
    .unwrap();
    // Creation returns a distinct confirmation, not the plain success marker.
    assert!(result.contains("created"));
    assert_ne!(result, "OK");

    let written = execute(&registry, "read_file", json!({"path": path}))
        .await
        .unwrap();
    assert_eq!(written, "fresh content");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_edit_file_rejects_noop() {
    let dir = temp_dir("edit_noop");
    let path = dir.join("f.txt");
    std::fs::write(&path, "content").unwrap();

    let registry = ToolRegistry::with_builtins();
    for target in [path.to_string_lossy().into_owned(), "missing.txt".into()] {
        let err = execute(
            &registry,
            "edit_file",
            json!({"path": target, "old_str": "same", "new_str": "same"}),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArgument(_)));
    }

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_edit_file_replaces_all_occurrences() {
    let dir = temp_dir("edit_all");
    let path = dir.join("f.txt");
    std::fs::write(&path, "foo bar foo baz foo").unwrap();

    let registry = ToolRegistry::with_builtins();
    let result = execute(
        &registry,
        "edit_file",
        json!({"path": path, "old_str": "foo", "new_str": "qux"}),
    )
    .await
    .unwrap();
    assert_eq!(result, "OK");

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "qux bar qux baz qux");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_edit_file_old_str_absent_leaves_file_untouched() {
    let dir = temp_dir("edit_absent");
    let path = dir.join("f.txt");
    std::fs::write(&path, "original content").unwrap();

    let registry = ToolRegistry::with_builtins();
    let err = execute(
        &registry,
        "edit_file",
        json!({"path": path, "old_str": "not present", "new_str": "anything"}),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ToolError::InvalidArgument(_)));

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "original content");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_edit_file_missing_with_nonempty_old_str() {
    let registry = ToolRegistry::with_builtins();
    let err = execute(
        &registry,
        "edit_file",
        json!({"path": "no_such_file_xyz.txt", "old_str": "a", "new_str": "b"}),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ToolError::NotFound(_)));
}

#[tokio::test]
async fn test_edit_file_empty_path() {
    let registry = ToolRegistry::with_builtins();
    let err = execute(
        &registry,
        "edit_file",
        json!({"path": "", "old_str": "a", "new_str": "b"}),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ToolError::InvalidArgument(_)));
}
