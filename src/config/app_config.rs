use crate::adapters::outgoing::static_resolver::StaticTopicResolver;
use crate::application::broker::MetadataBroker;
use crate::ports::incoming::message_handler::MessageHandler;
use std::path::Path;
use std::sync::Arc;

pub struct AppConfig {
    pub broker: Arc<dyn MessageHandler>,
}

impl AppConfig {
    /// Wires the broker against the topic catalog from
    /// `properties_path`. A missing or unreadable file leaves the
    /// catalog empty; every described topic then resolves as unknown.
    pub fn new(properties_path: &str) -> Self {
        let resolver = match StaticTopicResolver::from_properties(Path::new(properties_path)) {
            Ok(resolver) => {
                println!(
                    "Loaded {} topic(s) from {}",
                    resolver.topic_count(),
                    properties_path
                );
                resolver
            }
            Err(e) => {
                println!("WARN: could not load {}: {}", properties_path, e);
                StaticTopicResolver::new()
            }
        };

        let broker = Arc::new(MetadataBroker::new(Box::new(resolver)));
        Self { broker }
    }
}
