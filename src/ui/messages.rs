//! User-facing terminal messages.
//! Informational lines go to stdout, warnings and errors to stderr so
//! JSON/CSV output can be piped safely.

use ansi_term::Colour::{Blue, Green, Red, Yellow};
use ansi_term::Style;
use std::fmt;

/// Shown whenever a drive time cannot be estimated automatically.
pub const CONTACT_US: &str =
    "We couldn't estimate your zone automatically. Please contact us on 020 8058 6095 or contact@tripointdiagnostics.co.uk for a quote.";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Blue.bold().paint("ℹ️"), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Green.bold().paint("✅"), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Yellow.bold().paint("⚠️"), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Red.bold().paint("❌"), msg);
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{}\n", Style::new().bold().paint(format!("=== {msg} ===")));
}
