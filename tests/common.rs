#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sr() -> Command {
    cargo_bin_cmd!("schedrec")
}

/// Unique scratch path inside the system temp dir, reset if present.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_schedrec.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a booking-export style CSV ("Booking Date" column).
pub fn write_primary_csv(path: &str, rows: &[(&str, &str, &str)]) {
    write_csv(path, "Booking Date,Booking Event Name,Room Description", rows);
}

/// Write a second-party style CSV (plain "Date" column).
pub fn write_secondary_csv(path: &str, rows: &[(&str, &str, &str)]) {
    write_csv(path, "Date,Booking Event Name,Room Description", rows);
}

fn write_csv(path: &str, header: &str, rows: &[(&str, &str, &str)]) {
    let mut content = String::from(header);
    content.push('\n');
    for (date, name, room) in rows {
        content.push_str(&format!("{},{},{}\n", date, name, room));
    }
    fs::write(path, content).expect("write csv fixture");
}
