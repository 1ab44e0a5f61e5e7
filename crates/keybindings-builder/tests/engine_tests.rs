use std::fs;
use std::path::Path;

use keybindings_builder::*;
use tempfile::TempDir;

const DEFAULTS: &str = r#"// Editor defaults
[
    { "key": "ctrl+p", "command": "workbench.action.quickOpen" },
    { "key": "ctrl+s", "command": "workbench.action.files.save" },
]"#;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn read_output(config: &BuilderConfig) -> Vec<KeyBinding> {
    let content = fs::read_to_string(config.output_path()).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn quick_open_builder(config: BuilderConfig) -> KeybindingsBuilder {
    let mut builder = create_builder(config).unwrap();
    builder
        .key("ctrl+p", KeyHandlingMode::ClearDefault)
        .unwrap()
        .command("myExtension.quickOpen", CommandOptions::new())
        .unwrap()
        .register()
        .unwrap();
    builder
}

#[tokio::test]
async fn test_clear_default_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), DEFAULT_KEYBINDINGS_FILE, DEFAULTS);
    let config = BuilderConfig::new(temp_dir.path());

    let summary = quick_open_builder(config.clone()).build().await.unwrap();
    assert_eq!(summary.keybindings_count, 1);
    assert_eq!(summary.preserved_count, 0);
    assert!(summary.warnings.is_empty());
    assert_eq!(summary.output_path, config.output_path());

    let output = read_output(&config);
    assert_eq!(
        output,
        vec![
            KeyBinding::new("ctrl+p", "-workbench.action.quickOpen"),
            KeyBinding::new("ctrl+p", "myExtension.quickOpen"),
        ]
    );
}

#[tokio::test]
async fn test_unregistered_manual_binding_is_preserved() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), DEFAULT_KEYBINDINGS_FILE, DEFAULTS);
    write(
        temp_dir.path(),
        "keybindings.json",
        r#"[{ "key": "ctrl+alt+t", "command": "workbench.action.terminal.new", "when": "editorFocus" }]"#,
    );
    let config = BuilderConfig::new(temp_dir.path())
        .with_current_keybinding_path(temp_dir.path().join("keybindings.json"));

    let summary = quick_open_builder(config.clone()).build().await.unwrap();
    assert_eq!(summary.preserved_count, 1);
    assert_eq!(
        summary.warnings,
        vec!["Preserving manual keybinding: ctrl+alt+t -> workbench.action.terminal.new".to_string()]
    );

    let output = read_output(&config);
    assert_eq!(output.len(), 3);
    assert_eq!(
        output[2],
        KeyBinding::new("ctrl+alt+t", "workbench.action.terminal.new").with_when("editorFocus")
    );
}

#[tokio::test]
async fn test_conflict_fails_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), DEFAULT_KEYBINDINGS_FILE, DEFAULTS);
    write(
        temp_dir.path(),
        "keybindings.json",
        r#"[
            { "key": "ctrl+p", "command": "my.otherQuickOpen" },
            { "key": "ctrl+q", "command": "workbench.action.quit" }
        ]"#,
    );
    let config = BuilderConfig::new(temp_dir.path())
        .with_current_keybinding_path(temp_dir.path().join("keybindings.json"));

    let err = quick_open_builder(config.clone()).build().await.unwrap_err();
    let conflicts = err.conflicts();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].key, "ctrl+p");
    assert_eq!(conflicts[0].manual_command, "my.otherQuickOpen");
    assert_eq!(conflicts[0].builder_command, "myExtension.quickOpen");
    assert!(!config.output_path().exists());
}

#[tokio::test]
async fn test_missing_defaults_warns_and_continues() {
    let temp_dir = TempDir::new().unwrap();
    let config = BuilderConfig::new(temp_dir.path());

    let summary = quick_open_builder(config.clone()).build().await.unwrap();
    assert_eq!(summary.warnings.len(), 1);
    assert!(summary.warnings[0].starts_with("Default keybindings file not found at"));
    assert!(summary.warnings[0].ends_with("continuing with empty defaults"));

    let output = read_output(&config);
    assert_eq!(output, vec![KeyBinding::new("ctrl+p", "myExtension.quickOpen")]);
}

#[tokio::test]
async fn test_registration_order_is_output_order() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), DEFAULT_KEYBINDINGS_FILE, DEFAULTS);
    let config = BuilderConfig::new(temp_dir.path());

    let mut builder = create_builder(config.clone()).unwrap();
    builder
        .key("ctrl+s", KeyHandlingMode::PreserveDefault)
        .unwrap()
        .command("my.saveAll", CommandOptions::new().when("editorFocus"))
        .unwrap()
        .register()
        .unwrap();
    builder
        .key("P+Ctrl", KeyHandlingMode::OverrideDefault)
        .unwrap()
        .command("my.quickOpen", CommandOptions::new())
        .unwrap()
        .register()
        .unwrap();

    builder.build().await.unwrap();
    assert_eq!(
        read_output(&config),
        vec![
            KeyBinding::new("ctrl+s", "my.saveAll").with_when("editorFocus"),
            KeyBinding::new("P+Ctrl", "-workbench.action.quickOpen"),
            KeyBinding::new("P+Ctrl", "my.quickOpen"),
        ]
    );
}

#[tokio::test]
async fn test_invalid_manual_json_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "keybindings.json", "// comments are not allowed\n[]");
    let config = BuilderConfig::new(temp_dir.path())
        .with_current_keybinding_path(temp_dir.path().join("keybindings.json"));

    let err = quick_open_builder(config.clone()).build().await.unwrap_err();
    assert!(matches!(err, BuilderError::JsonParse { .. }));
    assert!(!config.output_path().exists());
}

#[tokio::test]
async fn test_plan_matches_build() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), DEFAULT_KEYBINDINGS_FILE, DEFAULTS);
    let config = BuilderConfig::new(temp_dir.path());
    let builder = quick_open_builder(config.clone());

    let plan = builder.plan().await.unwrap();
    assert!(!config.output_path().exists());

    builder.build().await.unwrap();
    assert_eq!(read_output(&config), plan.keybindings);
}

#[tokio::test]
async fn test_empty_build_writes_empty_array() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), DEFAULT_KEYBINDINGS_FILE, DEFAULTS);
    let config = BuilderConfig::new(temp_dir.path());

    let summary = create_builder(config.clone()).unwrap().build().await.unwrap();
    assert_eq!(summary.keybindings_count, 0);
    assert_eq!(fs::read_to_string(config.output_path()).unwrap(), "[]\n");
}
