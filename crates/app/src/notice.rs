//! Transient user notices with fixed-duration auto-clear.
//!
//! Modeled as a value with an expiry timestamp rather than ad hoc timers:
//! the slot drops an expired notice lazily on the next read, so an expired
//! notice can never reappear without a new triggering event.

use chrono::{DateTime, Duration, Utc};

/// How long a notice stays visible.
pub const NOTICE_TTL_SECS: i64 = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

impl Notice {
    pub fn success(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::new(Severity::Success, message, now)
    }

    pub fn error(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::new(Severity::Error, message, now)
    }

    fn new(severity: Severity, message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            severity,
            message: message.into(),
            expires_at: now + Duration::seconds(NOTICE_TTL_SECS),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Holder of the single currently visible notice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    current: Option<Notice>,
}

impl NoticeSlot {
    pub fn success(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.current = Some(Notice::success(message, now));
    }

    pub fn error(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.current = Some(Notice::error(message, now));
    }

    /// The visible notice, clearing it first if its display time is up.
    pub fn current(&mut self, now: DateTime<Utc>) -> Option<&Notice> {
        if self.current.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.current = None;
        }
        self.current.as_ref()
    }

    /// The stored notice without the expiry check (for assertions).
    pub fn peek(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
