//! The closed set of notification kinds and their wire rules.
//!
//! `NotificationKind` is the registry: it maps each tag to its arity and
//! to the routine that validates and builds the descriptor. Every match
//! here is exhaustive, so adding a kind does not compile until each table
//! is updated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::decoder::DecodeOptions;
use crate::descriptor::{
    CredentialTarget, EmailTarget, NotificationDescriptor, OpsgenieTarget, SlackTarget,
    TeamTarget, VictorOpsTarget, WebhookTarget,
};
use crate::error::CodecError;

/// Supported notification kinds, one per wire tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NotificationKind {
    AmazonEventBridge,
    BigPanda,
    Email,
    Jira,
    Office365,
    Opsgenie,
    PagerDuty,
    ServiceNow,
    Slack,
    Team,
    TeamEmail,
    VictorOps,
    Webhook,
    XMatters,
}

impl NotificationKind {
    /// Every kind, in tag order.
    pub const ALL: [NotificationKind; 14] = [
        NotificationKind::AmazonEventBridge,
        NotificationKind::BigPanda,
        NotificationKind::Email,
        NotificationKind::Jira,
        NotificationKind::Office365,
        NotificationKind::Opsgenie,
        NotificationKind::PagerDuty,
        NotificationKind::ServiceNow,
        NotificationKind::Slack,
        NotificationKind::Team,
        NotificationKind::TeamEmail,
        NotificationKind::VictorOps,
        NotificationKind::Webhook,
        NotificationKind::XMatters,
    ];

    /// The wire tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            NotificationKind::AmazonEventBridge => "AmazonEventBridge",
            NotificationKind::BigPanda => "BigPanda",
            NotificationKind::Email => "Email",
            NotificationKind::Jira => "Jira",
            NotificationKind::Office365 => "Office365",
            NotificationKind::Opsgenie => "Opsgenie",
            NotificationKind::PagerDuty => "PagerDuty",
            NotificationKind::ServiceNow => "ServiceNow",
            NotificationKind::Slack => "Slack",
            NotificationKind::Team => "Team",
            NotificationKind::TeamEmail => "TeamEmail",
            NotificationKind::VictorOps => "VictorOps",
            NotificationKind::Webhook => "Webhook",
            NotificationKind::XMatters => "XMatters",
        }
    }

    /// Number of comma-separated fields, tag included.
    pub const fn arity(self) -> usize {
        match self {
            NotificationKind::AmazonEventBridge
            | NotificationKind::BigPanda
            | NotificationKind::Email
            | NotificationKind::Jira
            | NotificationKind::Office365
            | NotificationKind::PagerDuty
            | NotificationKind::ServiceNow
            | NotificationKind::Team
            | NotificationKind::TeamEmail
            | NotificationKind::XMatters => 2,
            NotificationKind::Slack | NotificationKind::VictorOps => 3,
            NotificationKind::Webhook => 4,
            NotificationKind::Opsgenie => 5,
        }
    }

    pub(crate) fn arity_mismatch(self, actual: usize) -> CodecError {
        CodecError::ArityMismatch {
            kind: self,
            expected: self.arity(),
            actual,
        }
    }

    /// Validate the payload fields (everything after the tag) and build
    /// the descriptor.
    pub(crate) fn construct(
        self,
        payload: &[&str],
        options: &DecodeOptions,
    ) -> Result<NotificationDescriptor, CodecError> {
        use NotificationDescriptor as D;

        let descriptor = match self {
            NotificationKind::AmazonEventBridge => {
                let [credential] = self.fields::<1>(payload)?;
                D::AmazonEventBridge(CredentialTarget::new(self, credential)?)
            }
            NotificationKind::BigPanda => {
                let [credential] = self.fields::<1>(payload)?;
                D::BigPanda(CredentialTarget::new(self, credential)?)
            }
            NotificationKind::Email => {
                let [email] = self.fields::<1>(payload)?;
                D::Email(EmailTarget::new(email)?)
            }
            NotificationKind::Jira => {
                let [credential] = self.fields::<1>(payload)?;
                D::Jira(CredentialTarget::new(self, credential)?)
            }
            NotificationKind::Office365 => {
                let [credential] = self.fields::<1>(payload)?;
                D::Office365(CredentialTarget::new(self, credential)?)
            }
            NotificationKind::Opsgenie => {
                let [credential, name, id, responder_type] = self.fields::<4>(payload)?;
                D::Opsgenie(OpsgenieTarget::new(credential, name, id, responder_type)?)
            }
            NotificationKind::PagerDuty => {
                let [credential] = self.fields::<1>(payload)?;
                D::PagerDuty(CredentialTarget::new(self, credential)?)
            }
            NotificationKind::ServiceNow => {
                let [credential] = self.fields::<1>(payload)?;
                D::ServiceNow(CredentialTarget::new(self, credential)?)
            }
            NotificationKind::Slack => {
                let [credential, channel] = self.fields::<2>(payload)?;
                D::Slack(SlackTarget::new(credential, channel)?)
            }
            NotificationKind::Team => {
                let [team] = self.fields::<1>(payload)?;
                D::Team(TeamTarget::new(self, team)?)
            }
            NotificationKind::TeamEmail => {
                let [team] = self.fields::<1>(payload)?;
                D::TeamEmail(TeamTarget::new(self, team)?)
            }
            NotificationKind::VictorOps => {
                let [credential, routing_key] = self.fields::<2>(payload)?;
                D::VictorOps(VictorOpsTarget::new(credential, routing_key)?)
            }
            NotificationKind::Webhook => {
                let [credential, secret, url] = self.fields::<3>(payload)?;
                D::Webhook(WebhookTarget::with_options(credential, secret, url, options)?)
            }
            NotificationKind::XMatters => {
                let [credential] = self.fields::<1>(payload)?;
                D::XMatters(CredentialTarget::new(self, credential)?)
            }
        };

        Ok(descriptor)
    }

    fn fields<'a, const N: usize>(self, payload: &[&'a str]) -> Result<[&'a str; N], CodecError> {
        <[&'a str; N]>::try_from(payload).map_err(|_| self.arity_mismatch(payload.len() + 1))
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AmazonEventBridge" => Ok(NotificationKind::AmazonEventBridge),
            "BigPanda" => Ok(NotificationKind::BigPanda),
            "Email" => Ok(NotificationKind::Email),
            "Jira" => Ok(NotificationKind::Jira),
            "Office365" => Ok(NotificationKind::Office365),
            "Opsgenie" => Ok(NotificationKind::Opsgenie),
            "PagerDuty" => Ok(NotificationKind::PagerDuty),
            "ServiceNow" => Ok(NotificationKind::ServiceNow),
            "Slack" => Ok(NotificationKind::Slack),
            "Team" => Ok(NotificationKind::Team),
            "TeamEmail" => Ok(NotificationKind::TeamEmail),
            "VictorOps" => Ok(NotificationKind::VictorOps),
            "Webhook" => Ok(NotificationKind::Webhook),
            "XMatters" => Ok(NotificationKind::XMatters),
            other => Err(CodecError::UnknownVariant {
                tag: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for kind in NotificationKind::ALL {
            assert_eq!(kind.as_str().parse::<NotificationKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert!(matches!(
            "slack".parse::<NotificationKind>(),
            Err(CodecError::UnknownVariant { tag }) if tag == "slack"
        ));
    }

    #[test]
    fn arities() {
        assert_eq!(NotificationKind::PagerDuty.arity(), 2);
        assert_eq!(NotificationKind::Email.arity(), 2);
        assert_eq!(NotificationKind::TeamEmail.arity(), 2);
        assert_eq!(NotificationKind::Slack.arity(), 3);
        assert_eq!(NotificationKind::VictorOps.arity(), 3);
        assert_eq!(NotificationKind::Webhook.arity(), 4);
        assert_eq!(NotificationKind::Opsgenie.arity(), 5);
    }

    #[test]
    fn construct_agrees_with_arity() {
        let options = DecodeOptions::default();
        for kind in NotificationKind::ALL {
            let short = vec!["x"; kind.arity() - 2];
            assert_eq!(
                kind.construct(&short, &options),
                Err(kind.arity_mismatch(kind.arity() - 1)),
                "{kind}"
            );
        }
    }

    #[test]
    fn all_is_sorted_and_unique() {
        let mut sorted = NotificationKind::ALL.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, NotificationKind::ALL.to_vec());
    }
}
