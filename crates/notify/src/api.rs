//! JSON payload form of a descriptor, as exchanged with the alerting API.
//!
//! `NotificationDescriptor` serializes through [`ApiNotification`] and
//! deserializes back through the same validating constructors the text
//! decoder uses, so a payload that deserializes is one that encodes.

use serde::{Deserialize, Serialize};

use crate::descriptor::{
    CredentialTarget, EmailTarget, NotificationDescriptor, OpsgenieTarget, SlackTarget,
    TeamTarget, VictorOpsTarget, WebhookTarget,
};
use crate::error::CodecError;
use crate::kind::NotificationKind;

/// Wire-level API notification, internally tagged by `"type"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum ApiNotification {
    AmazonEventBridge {
        credential_id: String,
    },
    BigPanda {
        credential_id: String,
    },
    Email {
        email: String,
    },
    Jira {
        credential_id: String,
    },
    Office365 {
        credential_id: String,
    },
    Opsgenie {
        credential_id: String,
        responder_name: String,
        responder_id: String,
        responder_type: String,
    },
    PagerDuty {
        credential_id: String,
    },
    ServiceNow {
        credential_id: String,
    },
    Slack {
        credential_id: String,
        channel: String,
    },
    Team {
        team: String,
    },
    TeamEmail {
        team: String,
    },
    VictorOps {
        credential_id: String,
        routing_key: String,
    },
    Webhook {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        credential_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        secret: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
    XMatters {
        credential_id: String,
    },
}

impl TryFrom<ApiNotification> for NotificationDescriptor {
    type Error = CodecError;

    fn try_from(api: ApiNotification) -> Result<Self, Self::Error> {
        use ApiNotification as A;
        use NotificationKind as K;

        let descriptor = match api {
            A::AmazonEventBridge { credential_id } => {
                Self::AmazonEventBridge(CredentialTarget::new(K::AmazonEventBridge, credential_id)?)
            }
            A::BigPanda { credential_id } => {
                Self::BigPanda(CredentialTarget::new(K::BigPanda, credential_id)?)
            }
            A::Email { email } => Self::Email(EmailTarget::new(email)?),
            A::Jira { credential_id } => Self::Jira(CredentialTarget::new(K::Jira, credential_id)?),
            A::Office365 { credential_id } => {
                Self::Office365(CredentialTarget::new(K::Office365, credential_id)?)
            }
            A::Opsgenie {
                credential_id,
                responder_name,
                responder_id,
                responder_type,
            } => Self::Opsgenie(OpsgenieTarget::new(
                credential_id,
                responder_name,
                responder_id,
                responder_type,
            )?),
            A::PagerDuty { credential_id } => {
                Self::PagerDuty(CredentialTarget::new(K::PagerDuty, credential_id)?)
            }
            A::ServiceNow { credential_id } => {
                Self::ServiceNow(CredentialTarget::new(K::ServiceNow, credential_id)?)
            }
            A::Slack {
                credential_id,
                channel,
            } => Self::Slack(SlackTarget::new(credential_id, channel)?),
            A::Team { team } => Self::Team(TeamTarget::new(K::Team, team)?),
            A::TeamEmail { team } => Self::TeamEmail(TeamTarget::new(K::TeamEmail, team)?),
            A::VictorOps {
                credential_id,
                routing_key,
            } => Self::VictorOps(VictorOpsTarget::new(credential_id, routing_key)?),
            A::Webhook {
                credential_id,
                secret,
                url,
            } => Self::Webhook(WebhookTarget::new(
                credential_id.unwrap_or_default(),
                secret.unwrap_or_default(),
                url.unwrap_or_default(),
            )?),
            A::XMatters { credential_id } => {
                Self::XMatters(CredentialTarget::new(K::XMatters, credential_id)?)
            }
        };

        Ok(descriptor)
    }
}

impl From<NotificationDescriptor> for ApiNotification {
    fn from(descriptor: NotificationDescriptor) -> Self {
        use NotificationDescriptor as D;

        let credential = |t: &CredentialTarget| t.credential_id().to_string();

        match &descriptor {
            D::AmazonEventBridge(t) => Self::AmazonEventBridge {
                credential_id: credential(t),
            },
            D::BigPanda(t) => Self::BigPanda {
                credential_id: credential(t),
            },
            D::Email(t) => Self::Email {
                email: t.email().to_string(),
            },
            D::Jira(t) => Self::Jira {
                credential_id: credential(t),
            },
            D::Office365(t) => Self::Office365 {
                credential_id: credential(t),
            },
            D::Opsgenie(t) => Self::Opsgenie {
                credential_id: t.credential_id().to_string(),
                responder_name: t.responder_name().to_string(),
                responder_id: t.responder_id().to_string(),
                responder_type: t.responder_type().to_string(),
            },
            D::PagerDuty(t) => Self::PagerDuty {
                credential_id: credential(t),
            },
            D::ServiceNow(t) => Self::ServiceNow {
                credential_id: credential(t),
            },
            D::Slack(t) => Self::Slack {
                credential_id: t.credential_id().to_string(),
                channel: t.channel().to_string(),
            },
            D::Team(t) => Self::Team {
                team: t.team_id().to_string(),
            },
            D::TeamEmail(t) => Self::TeamEmail {
                team: t.team_id().to_string(),
            },
            D::VictorOps(t) => Self::VictorOps {
                credential_id: t.credential_id().to_string(),
                routing_key: t.routing_key().to_string(),
            },
            D::Webhook(t) => Self::Webhook {
                credential_id: t.credential_id().map(str::to_string),
                secret: t.secret().map(str::to_string),
                url: t.url().map(str::to_string),
            },
            D::XMatters(t) => Self::XMatters {
                credential_id: credential(t),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn slack_payload_shape() {
        let descriptor: NotificationDescriptor = "Slack,cred-1,alerts".parse().unwrap();
        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(
            value,
            json!({"type": "Slack", "credentialId": "cred-1", "channel": "alerts"})
        );
    }

    #[test]
    fn opsgenie_payload_shape() {
        let descriptor: NotificationDescriptor =
            "Opsgenie,cred,ops team,team-42,Team".parse().unwrap();
        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "Opsgenie",
                "credentialId": "cred",
                "responderName": "ops team",
                "responderId": "team-42",
                "responderType": "Team",
            })
        );
    }

    #[test]
    fn team_payload_uses_team_key() {
        let descriptor: NotificationDescriptor = "TeamEmail,team-9".parse().unwrap();
        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value, json!({"type": "TeamEmail", "team": "team-9"}));
    }

    #[test]
    fn webhook_omits_unset_fields() {
        let by_credential: NotificationDescriptor = "Webhook,cred,,".parse().unwrap();
        assert_eq!(
            serde_json::to_value(&by_credential).unwrap(),
            json!({"type": "Webhook", "credentialId": "cred"})
        );

        let by_url: NotificationDescriptor = "Webhook,,s3cret,https://hooks.example.com/x"
            .parse()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&by_url).unwrap(),
            json!({"type": "Webhook", "secret": "s3cret", "url": "https://hooks.example.com/x"})
        );
    }

    #[test]
    fn deserialize_then_encode() {
        let descriptor: NotificationDescriptor = serde_json::from_value(json!({
            "type": "VictorOps",
            "credentialId": "iii",
            "routingKey": "sre",
        }))
        .unwrap();
        assert_eq!(descriptor.to_string(), "VictorOps,iii,sre");
    }

    #[test]
    fn webhook_accepts_null_fields() {
        let descriptor: NotificationDescriptor = serde_json::from_value(json!({
            "type": "Webhook",
            "credentialId": "cred",
            "secret": null,
            "url": null,
        }))
        .unwrap();
        assert_eq!(descriptor.to_string(), "Webhook,cred,,");
    }

    #[test]
    fn deserialize_runs_validation() {
        let err = serde_json::from_value::<NotificationDescriptor>(json!({
            "type": "Slack",
            "credentialId": "cred",
            "channel": "#alerts",
        }))
        .unwrap_err();
        assert!(
            err.to_string()
                .contains(r##"exclude the # from channel names in "#alerts""##),
            "got: {err}"
        );
    }

    #[test]
    fn deserialize_rejects_commas() {
        let err = serde_json::from_value::<NotificationDescriptor>(json!({
            "type": "PagerDuty",
            "credentialId": "a,b",
        }))
        .unwrap_err();
        assert!(err.to_string().contains("must not contain ','"), "got: {err}");
    }

    #[test]
    fn deserialize_rejects_unknown_type() {
        let result = serde_json::from_value::<NotificationDescriptor>(json!({
            "type": "Carrier Pigeon",
            "credentialId": "coo",
        }));
        assert!(result.is_err());
    }
}
