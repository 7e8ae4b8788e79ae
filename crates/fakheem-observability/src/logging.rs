//! Session-scoped structured log lines.
//!
//! A [`StructuredLogger`] stamps every line with the shopper session, the
//! emitting component and the logger's uptime, then hands the formatted line
//! to `tracing` under the `fakheem` target.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Extra key/value pairs attached to a line.
pub type Fields = BTreeMap<String, Value>;

/// Severity of a log line, ordered from least to most severe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Lowercase name, as used in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_ascii_uppercase())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted == "warning" {
            return Ok(LogLevel::Warn);
        }
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == wanted)
            .ok_or_else(|| format!("'{}' is not a log level", s))
    }
}

/// How lines are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// `LEVEL component: message key=value ...`
    Human,
}

/// One structured line.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    #[serde(rename = "session")]
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Milliseconds since the logger was created.
    pub uptime_ms: u64,
    #[serde(flatten)]
    pub fields: Fields,
}

impl LogEntry {
    /// Write the entry in the given format.
    pub fn format(&self, format: LogFormat) -> String {
        match format {
            LogFormat::Json => {
                serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
            }
            LogFormat::Human => self.human_line(),
        }
    }

    fn human_line(&self) -> String {
        let mut line = format!("{:<5} ", self.level.to_string());
        if let Some(ref component) = self.component {
            line.push_str(component);
            line.push_str(": ");
        }
        line.push_str(&self.message);

        for (key, value) in &self.fields {
            match value {
                Value::String(s) => line.push_str(&format!(" {}={}", key, s)),
                other => line.push_str(&format!(" {}={}", key, other)),
            }
        }

        line.push_str(&format!(" [{} +{}ms]", self.session_id, self.uptime_ms));
        line
    }
}

/// Logger carrying a session id and component name.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    session_id: String,
    component: Option<String>,
    created: Instant,
    min_level: LogLevel,
    format: LogFormat,
}

impl StructuredLogger {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            component: None,
            created: Instant::now(),
            min_level: LogLevel::default(),
            format: LogFormat::default(),
        }
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Lines below this level are dropped.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Start a line at `level`.
    pub fn entry(&self, level: LogLevel, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder {
            logger: self,
            level,
            message: message.into(),
            fields: Fields::new(),
        }
    }

    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.entry(LogLevel::Debug, message)
    }

    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.entry(LogLevel::Info, message)
    }

    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.entry(LogLevel::Warn, message)
    }

    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.entry(LogLevel::Error, message)
    }

    fn to_entry(&self, level: LogLevel, message: String, fields: Fields) -> LogEntry {
        LogEntry {
            level,
            message,
            session_id: self.session_id.clone(),
            component: self.component.clone(),
            uptime_ms: self.created.elapsed().as_millis() as u64,
            fields,
        }
    }
}

/// A line under construction; nothing is written until [`emit`](Self::emit).
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: Fields,
}

impl LogBuilder<'_> {
    /// Attach a field. Later values for the same key win.
    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Attach a duration in whole milliseconds.
    pub fn duration_ms(self, key: &str, duration: Duration) -> Self {
        let ms = duration.as_millis() as u64;
        self.field(key, ms)
    }

    /// The formatted line, or `None` when the level is filtered out.
    pub fn render(self) -> Option<String> {
        if !self.logger.enabled(self.level) {
            return None;
        }
        let entry = self.logger.to_entry(self.level, self.message, self.fields);
        Some(entry.format(self.logger.format))
    }

    pub fn emit(self) {
        let level = self.level;
        let Some(line) = self.render() else {
            return;
        };

        match level {
            LogLevel::Trace => tracing::trace!(target: "fakheem", "{}", line),
            LogLevel::Debug => tracing::debug!(target: "fakheem", "{}", line),
            LogLevel::Info => tracing::info!(target: "fakheem", "{}", line),
            LogLevel::Warn => tracing::warn!(target: "fakheem", "{}", line),
            LogLevel::Error => tracing::error!(target: "fakheem", "{}", line),
        }
    }
}
