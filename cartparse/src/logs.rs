//! Pipeline logging.
//!
//! Entries carry a display level and an indent and are forwarded to the
//! `log` facade. The binary installs `env_logger`; library users can plug in
//! any `log` backend.

use serde::{Deserialize, Serialize};

/// Log level for pipeline output
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting depth, rendered as leading spaces
    #[serde(default)]
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Text written to the log backend.
    pub fn render(&self) -> String {
        let prefix = match self.level {
            LogLevel::Success => "✓ ",
            _ => "",
        };
        format!("{}{}{}", "   ".repeat(self.indent as usize), prefix, self.message)
    }
}

/// Forward an entry to the `log` facade.
pub fn emit(entry: LogEntry) {
    let line = entry.render();
    match entry.level {
        LogLevel::Info | LogLevel::Success => log::info!(target: "cartparse", "{}", line),
        LogLevel::Warning => log::warn!(target: "cartparse", "{}", line),
        LogLevel::Error => log::error!(target: "cartparse", "{}", line),
    }
}

pub fn log_info(msg: impl Into<String>) {
    emit(LogEntry::info(msg));
}

pub fn log_success(msg: impl Into<String>) {
    emit(LogEntry::success(msg));
}

pub fn log_warning(msg: impl Into<String>) {
    emit(LogEntry::warning(msg));
}

pub fn log_error(msg: impl Into<String>) {
    emit(LogEntry::error(msg));
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    emit(LogEntry::info(msg).with_indent(indent));
}

pub fn log_error_indent(msg: impl Into<String>, indent: u8) {
    emit(LogEntry::error(msg).with_indent(indent));
}
