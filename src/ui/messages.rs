//! One-line user feedback with a severity icon. Data rendering lives in
//! `view`; everything here is status output, and every failure path in the
//! crate reports through `error` so the feedback channel stays uniform.

use crate::utils::colors::{BLUE, GREEN, RED, RESET, YELLOW};
use std::fmt;

fn line<T: fmt::Display>(color: &str, icon: &str, msg: T) -> String {
    format!("{}{} {}{}", color, icon, msg, RESET)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(BLUE, "ℹ️", msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(GREEN, "✅", msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(YELLOW, "⚠️", msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(RED, "❌", msg));
}

/// Section header for the summary, history and preview views.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}═══ {} ═══{}\n", BLUE, msg, RESET);
}
