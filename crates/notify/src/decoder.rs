//! Text to descriptor.
//!
//! A textual descriptor is `Tag,field1[,field2[,...]]`. Decoding splits on
//! every comma (there is no escaping), resolves the tag, checks the field
//! count against the kind's arity, then runs the kind's own rules.

use std::str::FromStr;

use notiwire_core::CodecConfig;

use crate::descriptor::NotificationDescriptor;
use crate::error::CodecError;
use crate::kind::NotificationKind;

/// Knobs that change decoder messages, not what is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Quote the url field in `invalid Webhook URL "..."`. Off by default,
    /// which keeps the long-standing message that quotes the secret field.
    pub report_webhook_url: bool,
}

impl From<&CodecConfig> for DecodeOptions {
    fn from(config: &CodecConfig) -> Self {
        Self {
            report_webhook_url: config.report_webhook_url,
        }
    }
}

/// Decodes textual descriptors with a fixed set of options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode one textual descriptor.
    pub fn decode(&self, text: &str) -> Result<NotificationDescriptor, CodecError> {
        let fields: Vec<&str> = text.split(',').collect();
        if fields.len() < 2 {
            return Err(CodecError::MalformedSyntax);
        }

        let kind: NotificationKind = fields[0].parse()?;
        if fields.len() != kind.arity() {
            return Err(kind.arity_mismatch(fields.len()));
        }

        kind.construct(&fields[1..], &self.options)
    }
}

/// Decode one textual descriptor with default options.
pub fn decode(text: &str) -> Result<NotificationDescriptor, CodecError> {
    Decoder::default().decode(text)
}

/// Check a textual descriptor without keeping the result.
pub fn validate(text: &str) -> Result<(), CodecError> {
    decode(text).map(|_| ())
}

impl FromStr for NotificationDescriptor {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_comma_is_malformed() {
        assert_eq!(decode("PagerDuty"), Err(CodecError::MalformedSyntax));
        assert_eq!(decode(""), Err(CodecError::MalformedSyntax));
    }

    #[test]
    fn malformed_wins_over_unknown_tag() {
        assert_eq!(decode("Pigeon"), Err(CodecError::MalformedSyntax));
    }

    #[test]
    fn unknown_tag() {
        assert_eq!(
            decode("Pigeon,coo"),
            Err(CodecError::UnknownVariant {
                tag: "Pigeon".to_string()
            })
        );
    }

    #[test]
    fn empty_tag_is_unknown() {
        assert_eq!(
            decode(",cred"),
            Err(CodecError::UnknownVariant { tag: String::new() })
        );
    }

    #[test]
    fn arity_checked_before_semantics() {
        // The '#' would fail Slack's channel rule, but the count is wrong first.
        assert_eq!(
            decode("Slack,cred,#chan,extra"),
            Err(CodecError::ArityMismatch {
                kind: NotificationKind::Slack,
                expected: 3,
                actual: 4,
            })
        );
    }

    #[test]
    fn fields_are_not_trimmed() {
        let descriptor = decode("PagerDuty, cred ").unwrap();
        assert_eq!(descriptor.credential_id(), Some(" cred "));
    }

    #[test]
    fn webhook_url_message_default_quotes_secret() {
        let err = decode("Webhook,,s3cret,not a url").unwrap_err();
        assert_eq!(err.to_string(), r#"invalid Webhook URL "s3cret""#);
    }

    #[test]
    fn webhook_url_message_can_quote_url() {
        let decoder = Decoder::new(DecodeOptions {
            report_webhook_url: true,
        });
        let err = decoder.decode("Webhook,,s3cret,not a url").unwrap_err();
        assert_eq!(err.to_string(), r#"invalid Webhook URL "not a url""#);
    }

    #[test]
    fn options_from_config() {
        let config = CodecConfig {
            report_webhook_url: true,
            ..CodecConfig::default()
        };
        assert!(DecodeOptions::from(&config).report_webhook_url);
    }

    #[test]
    fn validate_discards_value() {
        assert!(validate("Team,abc").is_ok());
        assert!(validate("Team").is_err());
    }
}
