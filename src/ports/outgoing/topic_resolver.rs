use crate::domain::metadata::TopicMetadata;
use crate::Result;
use async_trait::async_trait;

/// Lookup seam for topic metadata. Backing data outlives individual
/// requests and is read-only from the broker's point of view.
#[async_trait]
pub trait TopicResolver: Send + Sync {
    async fn resolve(&self, name: &str) -> Result<Option<TopicMetadata>>;
}
