use crate::adapters::protocol::messages::{
    ApiVersionsResponse, DescribeTopicPartitionsRequest, DescribeTopicPartitionsResponse,
    KafkaRequest, KafkaResponse, RequestPayload, ResponsePayload, TopicResponse,
};
use crate::domain::metadata::ErrorCode;
use crate::ports::incoming::message_handler::MessageHandler;
use crate::ports::outgoing::topic_resolver::TopicResolver;
use crate::Result;
use async_trait::async_trait;

pub struct MetadataBroker {
    resolver: Box<dyn TopicResolver>,
}

impl MetadataBroker {
    pub fn new(resolver: Box<dyn TopicResolver>) -> Self {
        Self { resolver }
    }

    async fn handle_describe_topic_partitions(
        &self,
        correlation_id: i32,
        request: DescribeTopicPartitionsRequest,
    ) -> Result<KafkaResponse> {
        // Response order is the lexicographic sort of the requested
        // names, whatever order the client sent them in.
        let mut names: Vec<String> = request.topics.into_iter().map(|t| t.name).collect();
        names.sort();

        let mut topics = Vec::with_capacity(names.len());
        for name in names {
            let topic = match self.resolver.resolve(&name).await? {
                Some(metadata) => TopicResponse::from_metadata(metadata),
                None => TopicResponse::unknown(name),
            };
            topics.push(topic);
        }

        Ok(KafkaResponse::new(
            correlation_id,
            ResponsePayload::DescribeTopicPartitions(DescribeTopicPartitionsResponse { topics }),
        ))
    }
}

#[async_trait]
impl MessageHandler for MetadataBroker {
    async fn handle_request(&self, request: KafkaRequest) -> Result<KafkaResponse> {
        let correlation_id = request.header.correlation_id;

        match request.payload {
            RequestPayload::ApiVersions => Ok(KafkaResponse::new(
                correlation_id,
                ResponsePayload::ApiVersions(ApiVersionsResponse::default()),
            )),
            RequestPayload::DescribeTopicPartitions(req) => {
                self.handle_describe_topic_partitions(correlation_id, req)
                    .await
            }
            RequestPayload::Unsupported => Ok(KafkaResponse::new(
                correlation_id,
                ResponsePayload::Error(ErrorCode::UnsupportedVersion),
            )),
        }
    }
}
