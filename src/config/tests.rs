use super::*;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.open.command, None);
    assert_eq!(config.add.duplicates, DuplicatePolicy::Shadow);
}

#[test]
fn test_path_in_home() {
    let path = Config::path_in(std::path::Path::new("/home/ryan"));
    assert_eq!(path, std::path::PathBuf::from("/home/ryan/.config/opn/config.toml"));
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_partial_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[add]\nduplicates = \"reject\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.add.duplicates, DuplicatePolicy::Reject);
    assert_eq!(config.open.command, None);
}

#[test]
fn test_load_invalid_file_names_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[add]\nduplicates = \"sometimes\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{err}").contains("Failed to parse config"));
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = Config::path_in(dir.path());

    let mut config = Config::default();
    config.set_value("open.command", "code -r").unwrap();
    config.set_value("add.duplicates", "reject").unwrap();
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_get_set_values() {
    let mut config = Config::default();
    assert_eq!(config.get_value("open.command").unwrap(), "");
    assert_eq!(config.get_value("add.duplicates").unwrap(), "shadow");

    config.set_value("open.command", "xdg-open").unwrap();
    assert_eq!(config.get_value("open.command").unwrap(), "xdg-open");

    config.set_value("open.command", "").unwrap();
    assert_eq!(config.open.command, None);
}

#[test]
fn test_set_rejects_bad_input() {
    let mut config = Config::default();
    assert!(config.set_value("add.duplicates", "maybe").is_err());
    assert!(config.set_value("editor.command", "vim").is_err());
    assert!(config.get_value("nope").is_err());
    assert_eq!(config, Config::default());
}
