use crate::model::Sample;
use crate::render::DisplayRow;

pub mod clear;
pub mod create;
pub mod delete;
pub mod export;
pub mod helpers;
pub mod import;
pub mod list;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured result of a command: the samples it touched, the rows to
/// display, export text when a command produced some, and user-facing
/// messages. The UI layer decides how to present all of it.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_samples: Vec<Sample>,
    pub rows: Vec<DisplayRow>,
    pub export: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_rows(mut self, rows: Vec<DisplayRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_export(mut self, text: String) -> Self {
        self.export = Some(text);
        self
    }
}
