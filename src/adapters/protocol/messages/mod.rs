pub mod request;
pub mod response;

pub use request::{
    DescribeTopicPartitionsRequest, KafkaRequest, RequestHeader, RequestPayload, TopicRequest,
};
pub use response::{
    ApiVersion, ApiVersionsResponse, DescribeTopicPartitionsResponse, KafkaResponse,
    ResponsePayload, TopicResponse,
};
