#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rpetlog::config::{Config, Vocabulary};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rpl() -> Command {
    cargo_bin_cmd!("rpetlog")
}

/// Config whose tracked tokens are plain ASCII: TypeA = pee, TypeB = poop
pub fn test_config() -> Config {
    Config {
        vocabulary: Vocabulary {
            pee_token: "TypeA".to_string(),
            poop_token: "TypeB".to_string(),
            locations: vec!["outside".to_string(), "inside".to_string()],
            ..Vocabulary::default()
        },
        ..Config::default()
    }
}

pub const TEST_CONFIG_YAML: &str = "\
vocabulary:
  pee_token: TypeA
  poop_token: TypeB
  locations: [outside, inside]
";

/// Create a unique temp file path and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpetlog.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Write the test config and a log file, returning both paths as strings
pub fn setup_files(name: &str, log: &str) -> (String, String) {
    let cfg = temp_path(&format!("{name}_cfg"), "conf");
    fs::write(&cfg, TEST_CONFIG_YAML).expect("write config");
    let log_path = temp_path(&format!("{name}_log"), "txt");
    fs::write(&log_path, log).expect("write log");
    (
        cfg.to_string_lossy().to_string(),
        log_path.to_string_lossy().to_string(),
    )
}

pub fn at(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, mi, 0))
        .expect("valid datetime")
}

/// One chat line for `dd/mm/yyyy` at `hh:mm` with the given message body
pub fn line(date: &str, time: &str, body: &str) -> String {
    format!("{date}, {time} - Dana: {time} {body}")
}

/// Four TypeA events 4 hours apart on 18/12/2023, all outside
pub fn four_type_a() -> String {
    ["07:10", "11:10", "15:10", "19:10"]
        .iter()
        .map(|t| line("18/12/2023", t, "TypeA outside"))
        .collect::<Vec<_>>()
        .join("\n")
}
