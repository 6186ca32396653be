/// What the dashboard is doing right now.
///
/// `Idle` only exists before the first workflow starts; afterwards every
/// workflow overwrites the status with one of the message-carrying phases.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading { message: String },
    Ok { message: String },
    Error { message: String },
}

impl Status {
    pub fn loading(message: impl Into<String>) -> Self {
        Self::Loading {
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::Ok {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Status::Idle => crate::READY,
            Status::Loading { message } | Status::Ok { message } | Status::Error { message } => {
                message.as_str()
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Status::Loading { .. })
    }

    /// Status line text, prefixed while a request is in flight.
    pub fn label(&self) -> String {
        match self {
            Status::Loading { message } => format!("Working... {message}"),
            other => other.message().to_string(),
        }
    }
}

/// Single process-wide status cell. Last write wins; nothing is queued or merged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusTracker {
    current: Status,
}

impl StatusTracker {
    pub fn current(&self) -> &Status {
        &self.current
    }

    /// Returns `true` when the stored value actually changed.
    pub fn set(&mut self, status: Status) -> bool {
        if self.current == status {
            return false;
        }
        self.current = status;
        true
    }
}
