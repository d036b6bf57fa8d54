use crate::domain::metadata::TopicMetadata;
use crate::domain::topic::TopicId;
use crate::ports::outgoing::topic_resolver::TopicResolver;
use crate::{ApplicationError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

/// In-memory topic catalog, optionally loaded from a properties file:
///
///   topic.<name>.id = <uuid>
///   topic.<name>.partitions = <count>
///
/// Blank lines, comments and unrelated keys are skipped; malformed
/// values are warned about and dropped rather than failing startup.
#[derive(Debug, Default)]
pub struct StaticTopicResolver {
    topics: HashMap<String, TopicMetadata>,
}

#[derive(Debug, Default, Clone)]
struct TopicProperties {
    id: Option<TopicId>,
    partitions: usize,
}

impl StaticTopicResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topics(topics: impl IntoIterator<Item = TopicMetadata>) -> Self {
        Self {
            topics: topics.into_iter().map(|t| (t.name.clone(), t)).collect(),
        }
    }

    pub fn from_properties(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(ApplicationError::Io)?;
        Ok(Self::from_properties_str(&contents))
    }

    fn from_properties_str(contents: &str) -> Self {
        let mut parsed: HashMap<String, TopicProperties> = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || !line.starts_with("topic.") {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            // key shape: topic.<name>.<field>, name may contain dots
            let rest = &key["topic.".len()..];
            let Some((name, field)) = rest.rsplit_once('.') else {
                continue;
            };
            if name.is_empty() {
                continue;
            }

            let entry = parsed.entry(name.to_string()).or_default();
            match field {
                "id" => match value.parse::<TopicId>() {
                    Ok(id) => entry.id = Some(id),
                    Err(e) => println!("WARN: topic {}: {}", name, e),
                },
                "partitions" => match value.parse::<usize>() {
                    Ok(n) => entry.partitions = n,
                    Err(_) => println!("WARN: topic {}: invalid partitions {:?}", name, value),
                },
                _ => {}
            }
        }

        Self::with_topics(parsed.into_iter().map(|(name, props)| {
            TopicMetadata::with_partition_count(
                name,
                props.id.unwrap_or_else(TopicId::zero),
                props.partitions,
            )
        }))
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }
}

#[async_trait]
impl TopicResolver for StaticTopicResolver {
    async fn resolve(&self, name: &str) -> Result<Option<TopicMetadata>> {
        Ok(self.topics.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metadata::ErrorCode;
    use std::io::Write;

    const PROPERTIES: &str = "\
# topic catalog
topic.orders.id = 20000000-0000-4000-8000-000000000001
topic.orders.partitions = 3

topic.audit.log.id = 20000000-0000-4000-8000-000000000002
topic.audit.log.partitions = 1

broker.id = 1
topic.broken.partitions = many
";

    #[tokio::test]
    async fn test_parses_properties_and_resolves() -> Result<()> {
        let resolver = StaticTopicResolver::from_properties_str(PROPERTIES);

        let orders = resolver.resolve("orders").await?.expect("orders missing");
        assert_eq!(orders.partitions.len(), 3);
        assert_eq!(orders.error_code, ErrorCode::None);
        assert!(!orders.topic_id.is_zero());
        assert_eq!(orders.partitions[2].partition_index, 2);

        // dotted topic names keep everything before the last segment
        let audit = resolver.resolve("audit.log").await?.expect("audit.log missing");
        assert_eq!(audit.partitions.len(), 1);

        // invalid partition count falls back to serving one partition
        let broken = resolver.resolve("broken").await?.expect("broken missing");
        assert_eq!(broken.partitions.len(), 1);
        assert!(broken.topic_id.is_zero());

        assert!(resolver.resolve("absent").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_from_properties_file() -> Result<()> {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("server.properties");
        let mut file = std::fs::File::create(&path).expect("create properties");
        file.write_all(PROPERTIES.as_bytes()).expect("write properties");

        let resolver = StaticTopicResolver::from_properties(&path)?;
        assert_eq!(resolver.topic_count(), 3);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = StaticTopicResolver::from_properties(Path::new("/nonexistent/server.properties"));
        assert!(matches!(result, Err(ApplicationError::Io(_))));
    }
}
