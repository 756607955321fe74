use async_trait::async_trait;

use steadyday_domain::shared::DomainError;

/// Marker for command payloads.
pub trait Command: Send + Sync {}

/// Executes one command type against the domain and its repositories.
#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    type Result: Send;

    async fn handle(&self, cmd: C) -> Result<Self::Result, DomainError>;
}
