//! Response decode targets.

use crate::{Error, Result};
use reqwest::Response;
use serde::de::DeserializeOwned;
use std::fmt;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// A place a JSON document can be decoded into.
///
/// Implemented for every owned deserializable type, so `&mut app` coerces
/// to `&mut dyn JsonSlot` directly.
pub trait JsonSlot: Send {
    /// Replace the slot's contents with the decoded document.
    ///
    /// # Errors
    ///
    /// Returns the parser error when the bytes are not a document of the
    /// slot's shape.
    fn fill(&mut self, bytes: &[u8]) -> serde_json::Result<()>;
}

impl<T> JsonSlot for T
where
    T: DeserializeOwned + Send,
{
    fn fill(&mut self, bytes: &[u8]) -> serde_json::Result<()> {
        *self = serde_json::from_slice(bytes)?;
        Ok(())
    }
}

/// What to do with a response body.
pub enum Decode<'a> {
    /// Read and drop the body without parsing it.
    Discard,
    /// Copy the body byte for byte into a sink.
    CopyTo(&'a mut (dyn AsyncWrite + Unpin + Send)),
    /// Decode the body as one JSON document into a slot.
    ///
    /// The slot is overwritten, not merged: fields the document omits end
    /// up at their `#[serde(default)]` value even if the slot held a value
    /// before. Start from a fresh value when reusing a record.
    Json(&'a mut dyn JsonSlot),
}

impl fmt::Debug for Decode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Discard => "Discard",
            Self::CopyTo(_) => "CopyTo",
            Self::Json(_) => "Json",
        };
        f.debug_tuple(name).finish()
    }
}

impl Decode<'_> {
    /// Consume the response body according to the target.
    ///
    /// The body is read to the end on every branch, and the response is
    /// dropped when this returns, whether decoding succeeded or not.
    pub(crate) async fn apply(self, mut response: Response) -> Result<()> {
        match self {
            Self::Discard => {
                while response.chunk().await?.is_some() {}
                Ok(())
            }
            Self::CopyTo(sink) => {
                while let Some(chunk) = response.chunk().await? {
                    sink.write_all(&chunk).await?;
                }
                sink.flush().await?;
                Ok(())
            }
            Self::Json(slot) => {
                let bytes = response.bytes().await?;
                slot.fill(&bytes)
                    .map_err(|err| Error::Decode(err.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Region {
        #[serde(default)]
        name: String,
    }

    #[test]
    fn slot_replaces_contents() {
        let mut region = Region {
            name: "stale".to_string(),
        };
        let slot: &mut dyn JsonSlot = &mut region;
        slot.fill(br#"{"name":"eu"}"#).unwrap();
        assert_eq!(region.name, "eu");
    }

    #[test]
    fn slot_resets_fields_missing_from_document() {
        #[derive(Debug, Default, Deserialize, PartialEq)]
        struct Stack {
            #[serde(default)]
            name: String,
            #[serde(default)]
            state: String,
        }

        let mut stack = Stack {
            name: "cedar".to_string(),
            state: "public".to_string(),
        };
        let slot: &mut dyn JsonSlot = &mut stack;
        slot.fill(br#"{"name":"cedar-14"}"#).unwrap();
        assert_eq!(stack.name, "cedar-14");
        assert!(stack.state.is_empty());
    }

    #[test]
    fn slot_rejects_mismatched_shape() {
        let mut regions: Vec<Region> = Vec::new();
        let slot: &mut dyn JsonSlot = &mut regions;
        assert!(slot.fill(br#"{"name":"eu"}"#).is_err());
    }

    #[test]
    fn decode_debug_names_variant() {
        let mut sink = Vec::new();
        assert_eq!(format!("{:?}", Decode::Discard), "Discard");
        assert_eq!(format!("{:?}", Decode::CopyTo(&mut sink)), "CopyTo");
    }
}
