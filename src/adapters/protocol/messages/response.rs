use crate::adapters::protocol::constants::{
    API_VERSIONS_KEY, API_VERSIONS_VERSION, DESCRIBE_TOPIC_PARTITIONS_KEY,
    DESCRIBE_TOPIC_PARTITIONS_VERSION,
};
use crate::domain::metadata::{ErrorCode, PartitionMetadata, TopicMetadata};
use crate::domain::topic::TopicId;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiVersion {
    pub api_key: i16,
    pub min_version: i16,
    pub max_version: i16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiVersionsResponse {
    pub error_code: ErrorCode,
    pub api_versions: Vec<ApiVersion>,
}

impl Default for ApiVersionsResponse {
    /// One entry per implemented API, min = max = the single version
    /// this broker speaks.
    fn default() -> Self {
        Self {
            error_code: ErrorCode::None,
            api_versions: vec![
                ApiVersion {
                    api_key: API_VERSIONS_KEY,
                    min_version: API_VERSIONS_VERSION,
                    max_version: API_VERSIONS_VERSION,
                },
                ApiVersion {
                    api_key: DESCRIBE_TOPIC_PARTITIONS_KEY,
                    min_version: DESCRIBE_TOPIC_PARTITIONS_VERSION,
                    max_version: DESCRIBE_TOPIC_PARTITIONS_VERSION,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopicResponse {
    pub error_code: ErrorCode,
    /// Null only for a name-less synthetic entry; a requested name is
    /// always echoed.
    pub name: Option<String>,
    pub topic_id: TopicId,
    pub is_internal: bool,
    pub partitions: Vec<PartitionMetadata>,
}

impl TopicResponse {
    pub fn from_metadata(metadata: TopicMetadata) -> Self {
        Self {
            error_code: metadata.error_code,
            name: Some(metadata.name),
            topic_id: metadata.topic_id,
            is_internal: metadata.is_internal,
            partitions: metadata.partitions,
        }
    }

    pub fn unknown(name: String) -> Self {
        Self {
            error_code: ErrorCode::UnknownTopicOrPartition,
            name: Some(name),
            topic_id: TopicId::zero(),
            is_internal: false,
            partitions: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DescribeTopicPartitionsResponse {
    pub topics: Vec<TopicResponse>,
}

/// Closed set of response shapes, consumed exhaustively by the encoder.
/// `Error` is the minimal correlation-id-plus-code reply used for any
/// unsupported (api_key, api_version) combination.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsePayload {
    ApiVersions(ApiVersionsResponse),
    DescribeTopicPartitions(DescribeTopicPartitionsResponse),
    Error(ErrorCode),
}

#[derive(Debug, Clone)]
pub struct KafkaResponse {
    pub correlation_id: i32,
    pub payload: ResponsePayload,
}

impl KafkaResponse {
    pub fn new(correlation_id: i32, payload: ResponsePayload) -> Self {
        Self {
            correlation_id,
            payload,
        }
    }
}
