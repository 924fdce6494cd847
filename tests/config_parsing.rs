// tests/config_parsing.rs

use std::io::Write;
use std::path::PathBuf;

use umaskd::config::{load_and_validate, load_from_path};
use umaskd_test_utils::builders::ConfigFileBuilder;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("creating temp config");
    file.write_all(contents.as_bytes())
        .expect("writing temp config");
    file
}

#[test]
fn octal_masks_and_paths_deserialize() {
    let file = write_config(
        r#"
[[dir]]
path = "/srv/a"
min = 0o644
max = 0o022

[[dir]]
path = "/srv/b"
min = 0o600
max = 0o077
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.dirs.len(), 2);
    assert_eq!(cfg.dirs[0].path, PathBuf::from("/srv/a"));
    assert_eq!(cfg.dirs[0].min_mask, 0o644);
    assert_eq!(cfg.dirs[0].max_mask, 0o022);
    assert_eq!(cfg.dirs[1].path, PathBuf::from("/srv/b"));
    assert_eq!(cfg.dirs[1].min_mask, 0o600);
    assert_eq!(cfg.dirs[1].max_mask, 0o077);
}

#[test]
fn malformed_entry_is_skipped_but_the_rest_survive() {
    let file = write_config(
        r#"
[[dir]]
path = "/srv/bad"
min = 0o1777
max = 0o022

[[dir]]
path = "/srv/good"
min = 0o644
max = 0o022
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.dirs.len(), 1);
    assert_eq!(cfg.dirs[0].path, PathBuf::from("/srv/good"));
}

#[test]
fn empty_path_is_rejected() {
    let file = write_config(
        r#"
[[dir]]
path = ""
min = 0o644
max = 0o022
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();
    assert!(cfg.dirs.is_empty());
}

#[test]
fn empty_config_yields_no_rules() {
    let file = write_config("");
    let cfg = load_and_validate(file.path()).unwrap();
    assert!(cfg.dirs.is_empty());
}

#[test]
fn builder_applies_the_same_validation_as_the_loader() {
    let cfg = ConfigFileBuilder::new()
        .with_dir("/srv/bad", 0o7777, 0o022)
        .with_dir("/srv/good", 0o644, 0o022)
        .build();
    assert_eq!(cfg.dirs.len(), 1);
    assert_eq!(cfg.dirs[0].path, PathBuf::from("/srv/good"));
}

#[test]
fn missing_config_file_is_an_error() {
    assert!(load_from_path("/nonexistent/umaskd.toml").is_err());
}

#[test]
fn unparsable_toml_is_an_error() {
    let file = write_config("[[dir]\npath = ");
    assert!(load_from_path(file.path()).is_err());
}
