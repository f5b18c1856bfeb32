#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// `tripoint` binary with HOME pointed at an isolated directory, so tests
/// never read or write the real configuration.
pub fn tp(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("tripoint");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Fresh, empty directory under the system temp dir.
pub fn temp_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("tripoint_test_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path.to_string_lossy().to_string()
}

/// Database path inside a test home.
pub fn test_db(home: &str) -> String {
    PathBuf::from(home)
        .join("audit.sqlite")
        .to_string_lossy()
        .to_string()
}

/// Configuration using a static route table, with the audit log kept
/// inside the test home.
pub fn static_config(home: &str) -> String {
    format!(
        r#"
database: "{}"
routing:
  provider: static
  static_routes:
    ME19:
      Tonbridge: 22.4
      Eltham: 31.0
    DA1:
      Tonbridge: 41.0
      Eltham: 18.5
    CT1:
      Tonbridge: 58.0
      Eltham: 74.0
    BN1:
      Tonbridge: 82.0
      Eltham: 95.0
"#,
        test_db(home)
    )
}

/// Write `tripoint.conf` into `<home>/.tripoint/`.
pub fn write_config(home: &str, yaml: &str) {
    let dir = PathBuf::from(home).join(".tripoint");
    fs::create_dir_all(&dir).expect("create config dir");
    fs::write(dir.join("tripoint.conf"), yaml).expect("write config");
}

/// Write a file into the test home and return its path.
pub fn write_file(home: &str, name: &str, content: &str) -> String {
    let path = PathBuf::from(home).join(name);
    fs::write(&path, content).expect("write file");
    path.to_string_lossy().to_string()
}
