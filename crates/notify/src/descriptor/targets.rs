//! Payload types carried by each descriptor variant.
//!
//! Fields are private and only set through validating constructors, so a
//! payload that exists is one the wire format can carry.

use crate::decoder::DecodeOptions;
use crate::error::{quote, CodecError};
use crate::kind::NotificationKind;
use crate::syntax;

const WEBHOOK_EXCLUSIVE: &str = "use one of URL and secret or credential id";

/// Reject values that would break the comma-delimited wire format.
fn wire_field(kind: NotificationKind, value: impl Into<String>) -> Result<String, CodecError> {
    let value = value.into();
    if value.contains(',') {
        return Err(CodecError::semantic(
            kind,
            format!(
                "{kind} notification fields must not contain ',' (got {})",
                quote(&value)
            ),
        ));
    }
    Ok(value)
}

// ── Single credential ───────────────────────────────────────────────

/// A pre-registered integration credential, used by kinds whose only
/// payload is the credential id (PagerDuty, Jira, BigPanda, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CredentialTarget {
    credential_id: String,
}

impl CredentialTarget {
    /// `kind` only scopes the error message.
    pub fn new(
        kind: NotificationKind,
        credential_id: impl Into<String>,
    ) -> Result<Self, CodecError> {
        Ok(Self {
            credential_id: wire_field(kind, credential_id)?,
        })
    }

    pub fn credential_id(&self) -> &str {
        &self.credential_id
    }
}

// ── Email ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailTarget {
    email: String,
}

impl EmailTarget {
    /// The address is stored as given; it only has to parse.
    pub fn new(email: impl Into<String>) -> Result<Self, CodecError> {
        let email = wire_field(NotificationKind::Email, email)?;
        syntax::check_email(&email)
            .map_err(|message| CodecError::semantic(NotificationKind::Email, message))?;
        Ok(Self { email })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

// ── Team / TeamEmail ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TeamTarget {
    team_id: String,
}

impl TeamTarget {
    pub fn new(kind: NotificationKind, team_id: impl Into<String>) -> Result<Self, CodecError> {
        Ok(Self {
            team_id: wire_field(kind, team_id)?,
        })
    }

    pub fn team_id(&self) -> &str {
        &self.team_id
    }
}

// ── Opsgenie ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpsgenieTarget {
    credential_id: String,
    responder_name: String,
    responder_id: String,
    responder_type: String,
}

impl OpsgenieTarget {
    pub fn new(
        credential_id: impl Into<String>,
        responder_name: impl Into<String>,
        responder_id: impl Into<String>,
        responder_type: impl Into<String>,
    ) -> Result<Self, CodecError> {
        let kind = NotificationKind::Opsgenie;
        Ok(Self {
            credential_id: wire_field(kind, credential_id)?,
            responder_name: wire_field(kind, responder_name)?,
            responder_id: wire_field(kind, responder_id)?,
            responder_type: wire_field(kind, responder_type)?,
        })
    }

    pub fn credential_id(&self) -> &str {
        &self.credential_id
    }

    pub fn responder_name(&self) -> &str {
        &self.responder_name
    }

    pub fn responder_id(&self) -> &str {
        &self.responder_id
    }

    /// Opsgenie responder type, e.g. `Team` or `User`.
    pub fn responder_type(&self) -> &str {
        &self.responder_type
    }
}

// ── Slack ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlackTarget {
    credential_id: String,
    channel: String,
}

impl SlackTarget {
    /// `channel` is the bare name; a leading `#` is rejected, not stripped.
    pub fn new(
        credential_id: impl Into<String>,
        channel: impl Into<String>,
    ) -> Result<Self, CodecError> {
        let kind = NotificationKind::Slack;
        let credential_id = wire_field(kind, credential_id)?;
        let channel = wire_field(kind, channel)?;
        if channel.contains('#') {
            return Err(CodecError::semantic(
                kind,
                format!("exclude the # from channel names in {}", quote(&channel)),
            ));
        }
        Ok(Self {
            credential_id,
            channel,
        })
    }

    pub fn credential_id(&self) -> &str {
        &self.credential_id
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }
}

// ── VictorOps ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VictorOpsTarget {
    credential_id: String,
    routing_key: String,
}

impl VictorOpsTarget {
    pub fn new(
        credential_id: impl Into<String>,
        routing_key: impl Into<String>,
    ) -> Result<Self, CodecError> {
        let kind = NotificationKind::VictorOps;
        Ok(Self {
            credential_id: wire_field(kind, credential_id)?,
            routing_key: wire_field(kind, routing_key)?,
        })
    }

    pub fn credential_id(&self) -> &str {
        &self.credential_id
    }

    pub fn routing_key(&self) -> &str {
        &self.routing_key
    }
}

// ── Webhook ─────────────────────────────────────────────────────────

/// A webhook reached either through a stored credential or directly by
/// URL plus shared secret. Never both, never partially.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WebhookTarget {
    route: WebhookRoute,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum WebhookRoute {
    Credential(String),
    Endpoint { secret: String, url: String },
}

impl WebhookTarget {
    /// Build from the three wire fields, where an empty string means unset.
    pub fn new(
        credential_id: impl Into<String>,
        secret: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<Self, CodecError> {
        let (credential_id, secret, url): (String, String, String) =
            (credential_id.into(), secret.into(), url.into());
        Self::with_options(&credential_id, &secret, &url, &DecodeOptions::default())
    }

    pub fn with_credential(credential_id: impl Into<String>) -> Result<Self, CodecError> {
        Self::new(credential_id, "", "")
    }

    pub fn with_endpoint(
        secret: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<Self, CodecError> {
        Self::new("", secret, url)
    }

    pub(crate) fn with_options(
        credential_id: &str,
        secret: &str,
        url: &str,
        options: &DecodeOptions,
    ) -> Result<Self, CodecError> {
        let kind = NotificationKind::Webhook;
        let credential_id = wire_field(kind, credential_id)?;
        let secret = wire_field(kind, secret)?;
        let url = wire_field(kind, url)?;

        let route = if !credential_id.is_empty() {
            if !secret.is_empty() || !url.is_empty() {
                return Err(CodecError::semantic(kind, WEBHOOK_EXCLUSIVE));
            }
            WebhookRoute::Credential(credential_id)
        } else {
            if secret.is_empty() || url.is_empty() {
                return Err(CodecError::semantic(kind, WEBHOOK_EXCLUSIVE));
            }
            if syntax::check_absolute_url(&url).is_err() {
                // Historically this message quoted the secret field.
                let shown = if options.report_webhook_url { &url } else { &secret };
                return Err(CodecError::semantic(
                    kind,
                    format!("invalid Webhook URL {}", quote(shown)),
                ));
            }
            WebhookRoute::Endpoint { secret, url }
        };

        Ok(Self { route })
    }

    pub fn credential_id(&self) -> Option<&str> {
        match &self.route {
            WebhookRoute::Credential(id) => Some(id),
            WebhookRoute::Endpoint { .. } => None,
        }
    }

    pub fn secret(&self) -> Option<&str> {
        match &self.route {
            WebhookRoute::Credential(_) => None,
            WebhookRoute::Endpoint { secret, .. } => Some(secret),
        }
    }

    pub fn url(&self) -> Option<&str> {
        match &self.route {
            WebhookRoute::Credential(_) => None,
            WebhookRoute::Endpoint { url, .. } => Some(url),
        }
    }
}
