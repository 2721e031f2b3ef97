//! Typed notification descriptors.
//!
//! - `NotificationDescriptor`: one variant per notification kind
//! - payload types in [`targets`], built only through validating constructors
//!
//! The tag is derived from the variant, so the two cannot disagree.

mod targets;

pub use targets::*;

use serde::{Deserialize, Serialize};

use crate::api::ApiNotification;
use crate::kind::NotificationKind;

/// One decoded notification channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ApiNotification", into = "ApiNotification")]
pub enum NotificationDescriptor {
    AmazonEventBridge(CredentialTarget),
    BigPanda(CredentialTarget),
    Email(EmailTarget),
    Jira(CredentialTarget),
    Office365(CredentialTarget),
    Opsgenie(OpsgenieTarget),
    PagerDuty(CredentialTarget),
    ServiceNow(CredentialTarget),
    Slack(SlackTarget),
    Team(TeamTarget),
    TeamEmail(TeamTarget),
    VictorOps(VictorOpsTarget),
    Webhook(WebhookTarget),
    XMatters(CredentialTarget),
}

impl NotificationDescriptor {
    pub fn kind(&self) -> NotificationKind {
        match self {
            Self::AmazonEventBridge(_) => NotificationKind::AmazonEventBridge,
            Self::BigPanda(_) => NotificationKind::BigPanda,
            Self::Email(_) => NotificationKind::Email,
            Self::Jira(_) => NotificationKind::Jira,
            Self::Office365(_) => NotificationKind::Office365,
            Self::Opsgenie(_) => NotificationKind::Opsgenie,
            Self::PagerDuty(_) => NotificationKind::PagerDuty,
            Self::ServiceNow(_) => NotificationKind::ServiceNow,
            Self::Slack(_) => NotificationKind::Slack,
            Self::Team(_) => NotificationKind::Team,
            Self::TeamEmail(_) => NotificationKind::TeamEmail,
            Self::VictorOps(_) => NotificationKind::VictorOps,
            Self::Webhook(_) => NotificationKind::Webhook,
            Self::XMatters(_) => NotificationKind::XMatters,
        }
    }

    /// The wire tag, e.g. `"Slack"`.
    pub fn tag(&self) -> &'static str {
        self.kind().as_str()
    }

    /// The integration credential, for kinds that reference one.
    pub fn credential_id(&self) -> Option<&str> {
        match self {
            Self::AmazonEventBridge(t)
            | Self::BigPanda(t)
            | Self::Jira(t)
            | Self::Office365(t)
            | Self::PagerDuty(t)
            | Self::ServiceNow(t)
            | Self::XMatters(t) => Some(t.credential_id()),
            Self::Opsgenie(t) => Some(t.credential_id()),
            Self::Slack(t) => Some(t.credential_id()),
            Self::VictorOps(t) => Some(t.credential_id()),
            Self::Webhook(t) => t.credential_id(),
            Self::Email(_) | Self::Team(_) | Self::TeamEmail(_) => None,
        }
    }
}
