use colored::Colorize;
use std::fmt;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

fn label(kind: MessageKind) -> (&'static str, &'static str) {
    match kind {
        MessageKind::Info => ("INFO", "[i]"),
        MessageKind::Success => ("SUCCESS", "[✓]"),
        MessageKind::Warning => ("WARNING", "[!]"),
        MessageKind::Error => ("ERROR", "[x]"),
    }
}

fn emit(kind: MessageKind, message: impl fmt::Display) {
    let (name, icon) = label(kind);
    let line = format!("{name}: {icon} {message}");
    let styled = match kind {
        MessageKind::Info => line.cyan(),
        MessageKind::Success => line.green(),
        MessageKind::Warning => line.yellow(),
        MessageKind::Error => line.red(),
    };
    println!("{styled}");
}

pub fn info(message: impl fmt::Display) {
    emit(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    emit(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    emit(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    emit(MessageKind::Error, message);
}

/// Prints a `=== title ===` section header.
pub fn section(title: impl fmt::Display) {
    println!("{}", format!("=== {} ===", title).bold());
}

pub fn separator() {
    println!("----------------------------------------");
}

/// Plain line, kept here so screens never print directly.
pub fn line(message: impl fmt::Display) {
    println!("{message}");
}
