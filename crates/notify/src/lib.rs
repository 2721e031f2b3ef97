//! Codec for alert-notification channel descriptors.
//!
//! This crate provides:
//! - `NotificationDescriptor`: typed, immutable descriptor per notification kind
//! - `NotificationKind`: the closed registry of tags, arities and rules
//! - Text decoding/encoding of the `Tag,field1[,field2...]` wire form
//! - Fail-fast list decoding with the position of the first bad element
//! - The JSON payload form used by the alerting API

pub mod api;
pub mod batch;
pub mod decoder;
pub mod descriptor;
pub mod encoder;
pub mod error;
pub mod kind;
pub mod syntax;

pub use api::ApiNotification;
pub use batch::{decode_list, encode_list};
pub use decoder::{decode, validate, DecodeOptions, Decoder};
pub use descriptor::*;
pub use encoder::encode;
pub use error::{CodecError, ListError};
pub use kind::NotificationKind;
