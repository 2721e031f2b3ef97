//! Descriptor to text.

use std::fmt;

use crate::descriptor::NotificationDescriptor;

/// Render the canonical textual form, `Tag,field1[,field2[,...]]`.
///
/// Webhook always renders all three payload fields, leaving the unused
/// ones empty: `Webhook,<credential>,,` or `Webhook,,<secret>,<url>`.
pub fn encode(descriptor: &NotificationDescriptor) -> String {
    use NotificationDescriptor as D;

    let payload: Vec<&str> = match descriptor {
        D::AmazonEventBridge(t)
        | D::BigPanda(t)
        | D::Jira(t)
        | D::Office365(t)
        | D::PagerDuty(t)
        | D::ServiceNow(t)
        | D::XMatters(t) => vec![t.credential_id()],
        D::Email(t) => vec![t.email()],
        D::Team(t) | D::TeamEmail(t) => vec![t.team_id()],
        D::Opsgenie(t) => vec![
            t.credential_id(),
            t.responder_name(),
            t.responder_id(),
            t.responder_type(),
        ],
        D::Slack(t) => vec![t.credential_id(), t.channel()],
        D::VictorOps(t) => vec![t.credential_id(), t.routing_key()],
        D::Webhook(t) => vec![
            t.credential_id().unwrap_or_default(),
            t.secret().unwrap_or_default(),
            t.url().unwrap_or_default(),
        ],
    };

    let mut out = String::from(descriptor.tag());
    for field in payload {
        out.push(',');
        out.push_str(field);
    }
    out
}

impl fmt::Display for NotificationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{SlackTarget, VictorOpsTarget, WebhookTarget};

    #[test]
    fn victorops() {
        let descriptor =
            NotificationDescriptor::VictorOps(VictorOpsTarget::new("iii", "sre").unwrap());
        assert_eq!(encode(&descriptor), "VictorOps,iii,sre");
    }

    #[test]
    fn slack() {
        let descriptor =
            NotificationDescriptor::Slack(SlackTarget::new("cred", "alerts").unwrap());
        assert_eq!(encode(&descriptor), "Slack,cred,alerts");
    }

    #[test]
    fn webhook_by_credential_keeps_empty_fields() {
        let descriptor =
            NotificationDescriptor::Webhook(WebhookTarget::with_credential("cred").unwrap());
        assert_eq!(encode(&descriptor), "Webhook,cred,,");
    }

    #[test]
    fn webhook_by_endpoint() {
        let descriptor = NotificationDescriptor::Webhook(
            WebhookTarget::with_endpoint("s3cret", "http://localhost").unwrap(),
        );
        assert_eq!(encode(&descriptor), "Webhook,,s3cret,http://localhost");
    }

    #[test]
    fn display_matches_encode() {
        let descriptor: NotificationDescriptor = "Email,ops@example.com".parse().unwrap();
        assert_eq!(descriptor.to_string(), encode(&descriptor));
    }
}
