use super::base_parser::BaseParser;
use super::traits::*;
use crate::adapters::protocol::constants::{
    API_VERSIONS_KEY, API_VERSIONS_VERSION, DESCRIBE_TOPIC_PARTITIONS_KEY,
    DESCRIBE_TOPIC_PARTITIONS_VERSION, NULL_CURSOR,
};
use crate::adapters::protocol::messages::{
    DescribeTopicPartitionsRequest, KafkaRequest, RequestHeader, RequestPayload, TopicRequest,
};
use crate::domain::error::DomainError;
use crate::Result;
use bytes::Bytes;

#[derive(Debug, Default, Clone)]
pub struct RequestParser {
    base: BaseParser,
}

impl RequestParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&self, data: &[u8]) -> Result<KafkaRequest> {
        let mut buf = Bytes::copy_from_slice(data);

        let header = self.parse_header(&mut buf)?;
        let payload = match (header.api_key, header.api_version) {
            (API_VERSIONS_KEY, API_VERSIONS_VERSION) => {
                // v4 carries nothing this broker consumes beyond the
                // header; remaining body bytes are ignored.
                RequestPayload::ApiVersions
            }
            (DESCRIBE_TOPIC_PARTITIONS_KEY, DESCRIBE_TOPIC_PARTITIONS_VERSION) => {
                self.parse_describe_topic_partitions(&mut buf)?
            }
            _ => RequestPayload::Unsupported,
        };

        Ok(KafkaRequest::new(header, payload))
    }

    fn parse_header(&self, buf: &mut Bytes) -> Result<RequestHeader> {
        let api_key = self.base.parse_i16(buf)?;
        let api_version = self.base.parse_i16(buf)?;
        let correlation_id = self.base.parse_i32(buf)?;
        let client_id = self.base.parse_compact_nullable_string(buf)?;
        self.base.parse_tagged_fields(buf)?;

        Ok(RequestHeader {
            api_key,
            api_version,
            correlation_id,
            client_id,
        })
    }

    fn parse_describe_topic_partitions(&self, buf: &mut Bytes) -> Result<RequestPayload> {
        let topics = self.base.parse_compact_array(buf, |b| {
            let name = self.base.parse_compact_string(b)?;
            self.base.parse_tagged_fields(b)?;
            Ok(TopicRequest { name })
        })?;

        let response_partition_limit = self.base.parse_i32(buf)?;

        let cursor = self.base.parse_u8(buf)?;
        if cursor != NULL_CURSOR {
            return Err(DomainError::UnsupportedCursor(cursor).into());
        }
        self.base.parse_tagged_fields(buf)?;

        Ok(RequestPayload::DescribeTopicPartitions(
            DescribeTopicPartitionsRequest {
                topics,
                response_partition_limit,
            },
        ))
    }
}
