use std::fs;

use keybindings_builder_cli::Manifest;
use tempfile::TempDir;

// Kept in its own test binary: the override is process-wide.
#[test]
fn test_environment_overrides_builder_table() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("kbb.toml");
    fs::write(&path, "[builder]\ndirname = \".\"\noutput_file = \"from-file.json\"\n").unwrap();

    std::env::set_var("KBB__BUILDER__OUTPUT_FILE", "from-env.json");
    let manifest = Manifest::load(&path);
    std::env::remove_var("KBB__BUILDER__OUTPUT_FILE");

    let manifest = manifest.unwrap();
    assert_eq!(manifest.builder.output_file, "from-env.json");
    assert_eq!(
        manifest.builder.output_path(),
        temp_dir.path().join(".").join("from-env.json")
    );
}
