use super::*;
use bytes::Bytes;

/// Outbound side of the interception layer.
///
/// Both operations are fire-and-forget: a transport that fails to deliver
/// logs the failure itself, and the engine carries on regardless.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Re-emit a captured action payload verbatim.
    async fn send(&self, kind: Kind, payload: Bytes);
    /// Emit a plain-text chat message.
    async fn message(&self, text: String);
}
