//! Ordered lists of descriptors, as attached to a team, an access token
//! or a detector rule.

use crate::decoder::{DecodeOptions, Decoder};
use crate::descriptor::NotificationDescriptor;
use crate::encoder::encode;
use crate::error::ListError;

impl Decoder {
    /// Decode every item in order, stopping at the first failure.
    ///
    /// Items after the failing one are never decoded. An empty input
    /// yields an empty list.
    pub fn decode_list<I, S>(&self, items: I) -> Result<Vec<NotificationDescriptor>, ListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let descriptors = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                self.decode(item.as_ref())
                    .map_err(|error| ListError { index, error })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::trace!(count = descriptors.len(), "decoded notification list");
        Ok(descriptors)
    }
}

/// Decode a list with default options. See [`Decoder::decode_list`].
pub fn decode_list<I, S>(items: I) -> Result<Vec<NotificationDescriptor>, ListError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Decoder::new(DecodeOptions::default()).decode_list(items)
}

/// Encode every descriptor, preserving order.
pub fn encode_list<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a NotificationDescriptor>,
{
    items.into_iter().map(encode).collect()
}
