use crate::config::GistSyncConfig;
use crate::model::{SyncReport, TrackedGist};

pub mod config;
pub mod status;
pub mod sync;

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

#[derive(Debug, Default)]
pub struct CmdResult {
    pub reports: Vec<SyncReport>,
    pub tracked: Vec<TrackedGist>,
    pub config: Option<GistSyncConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_tracked(mut self, tracked: Vec<TrackedGist>) -> Self {
        self.tracked = tracked;
        self
    }

    pub fn with_config(mut self, config: GistSyncConfig) -> Self {
        self.config = Some(config);
        self
    }
}

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetTool(String),
    SetIdDir(String),
}
