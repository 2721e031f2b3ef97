//! Error types for decoding notification descriptors.

use std::fmt::Write;

use crate::kind::NotificationKind;

/// Why a textual descriptor (or a constructor call) was rejected.
///
/// Display strings match the messages users have always seen for these
/// failures, so callers can surface them unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Fewer than two comma-separated fields.
    #[error("invalid notification string, not enough commas")]
    MalformedSyntax,

    /// The first field is not a known notification type.
    #[error("invalid notification type {}", quote(.tag))]
    UnknownVariant { tag: String },

    /// The tag is known but the field count is wrong. The wording says
    /// "not enough parts" in both directions.
    #[error(
        "invalid {kind} notification string, please consult the documentation (not enough parts)"
    )]
    ArityMismatch {
        kind: NotificationKind,
        expected: usize,
        actual: usize,
    },

    /// Field count is right but a variant rule failed.
    #[error("{message}")]
    SemanticValidation {
        kind: NotificationKind,
        message: String,
    },
}

impl CodecError {
    pub(crate) fn semantic(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self::SemanticValidation {
            kind,
            message: message.into(),
        }
    }

    /// The notification kind the error relates to, when the tag was recognised.
    pub fn kind(&self) -> Option<NotificationKind> {
        match self {
            Self::MalformedSyntax | Self::UnknownVariant { .. } => None,
            Self::ArityMismatch { kind, .. } | Self::SemanticValidation { kind, .. } => {
                Some(*kind)
            }
        }
    }
}

/// First failure in a batch, with the position of the offending element.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("notifications[{index}]: {error}")]
pub struct ListError {
    /// Zero-based position in the input list.
    pub index: usize,
    /// The element's error, exactly as [`crate::decode`] returned it.
    #[source]
    pub error: CodecError,
}

impl ListError {
    pub fn into_inner(self) -> CodecError {
        self.error
    }
}

/// Double-quote `value` for an error message, escaping the way these
/// messages always have: `\xNN` for ASCII control bytes, `\uNNNN` or
/// `\UNNNNNNNN` for other unprintable characters.
pub(crate) fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            c if c < ' ' || c == '\u{7f}' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if c.is_control() || (c != ' ' && c.is_whitespace()) => {
                if (c as u32) < 0x10000 {
                    let _ = write!(out, "\\u{:04x}", c as u32);
                } else {
                    let _ = write!(out, "\\U{:08x}", c as u32);
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
