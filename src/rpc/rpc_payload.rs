use super::{RpcError, RpcErrorCode, RpcId, RpcRequest};
use serde_json::Value;

/// Why one entry of a payload could not be turned into an [`RpcRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum RpcRequestParseError {
    /// Not a valid request object. Answered with the entry's id when one
    /// could be read, otherwise with a `null` id.
    Invalid { id: Option<RpcId>, error: RpcError },
    /// A `null` entry. Treated as an internal failure with no id, so nothing
    /// is answered.
    Null,
}

pub type RpcRequestSlot = Result<RpcRequest, RpcRequestParseError>;

/// A decoded request payload: one request object, or a batch of them.
///
/// Entries are decoded independently so that one malformed entry in a batch
/// does not prevent its siblings from being dispatched.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcPayload {
    Single(RpcRequestSlot),
    Batch(Vec<RpcRequestSlot>),
}

impl RpcPayload {
    /// Decodes JSON text.
    ///
    /// Fails with a parse error for invalid JSON and with an invalid request
    /// error for an empty batch; both are answered with a `null` id.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, RpcError> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|_| RpcError::from_code(RpcErrorCode::ParseError))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, RpcError> {
        match value {
            Value::Array(entries) => {
                if entries.is_empty() {
                    return Err(RpcError::new(
                        RpcErrorCode::InvalidRequest,
                        "Batch request contains no requests",
                    ));
                }
                Ok(RpcPayload::Batch(
                    entries.into_iter().map(parse_request).collect(),
                ))
            }
            other => Ok(RpcPayload::Single(parse_request(other))),
        }
    }

    #[inline]
    pub fn is_batch(&self) -> bool {
        matches!(self, RpcPayload::Batch(_))
    }

    pub fn into_slots(self) -> Vec<RpcRequestSlot> {
        match self {
            RpcPayload::Single(slot) => vec![slot],
            RpcPayload::Batch(slots) => slots,
        }
    }
}

fn parse_request(value: Value) -> RpcRequestSlot {
    if value.is_null() {
        return Err(RpcRequestParseError::Null);
    }

    // Read the id first so a malformed request can still be answered.
    let id = value
        .get("id")
        .and_then(|id| serde_json::from_value::<RpcId>(id.clone()).ok());

    serde_json::from_value::<RpcRequest>(value).map_err(|err| {
        tracing::debug!("Rejecting malformed request entry (id: {:?}): {}", id, err);
        RpcRequestParseError::Invalid {
            id,
            error: RpcError::from_code(RpcErrorCode::InvalidRequest),
        }
    })
}
