use super::varint::PutVarint;
use crate::adapters::protocol::constants::NULL_CURSOR;
use crate::adapters::protocol::messages::{
    ApiVersionsResponse, DescribeTopicPartitionsResponse, KafkaResponse, ResponsePayload,
    TopicResponse,
};
use crate::domain::metadata::PartitionMetadata;
use bytes::{BufMut, BytesMut};

/// Encodes a response into its payload bytes; the frame codec adds the
/// length prefix on the way out.
#[derive(Debug, Default, Clone)]
pub struct ResponseEncoder;

impl ResponseEncoder {
    pub fn new() -> Self {
        Self
    }

    pub fn encode(&self, response: KafkaResponse) -> Vec<u8> {
        let mut buf = BytesMut::new();
        buf.put_i32(response.correlation_id);

        match &response.payload {
            // header v0: no tagged section after the correlation id
            ResponsePayload::ApiVersions(api_versions) => {
                self.encode_api_versions(&mut buf, api_versions);
            }
            // header v1: correlation id followed by an empty tagged section
            ResponsePayload::DescribeTopicPartitions(describe) => {
                buf.put_uvarint(0);
                self.encode_describe_topic_partitions(&mut buf, describe);
            }
            // minimal error-only shape: no body, no tagged section
            ResponsePayload::Error(error_code) => {
                buf.put_i16(i16::from(*error_code));
            }
        }

        buf.to_vec()
    }

    fn encode_api_versions(&self, buf: &mut BytesMut, response: &ApiVersionsResponse) {
        buf.put_i16(i16::from(response.error_code));

        buf.put_uvarint(response.api_versions.len() as u64 + 1);
        for version in &response.api_versions {
            buf.put_i16(version.api_key);
            buf.put_i16(version.min_version);
            buf.put_i16(version.max_version);
            buf.put_uvarint(0);
        }

        buf.put_i32(0); // throttle_time_ms
        buf.put_uvarint(0);
    }

    fn encode_describe_topic_partitions(
        &self,
        buf: &mut BytesMut,
        response: &DescribeTopicPartitionsResponse,
    ) {
        buf.put_i32(0); // throttle_time_ms

        buf.put_uvarint(response.topics.len() as u64 + 1);
        for topic in &response.topics {
            self.encode_topic(buf, topic);
        }

        buf.put_u8(NULL_CURSOR); // pagination never offered
        buf.put_uvarint(0);
    }

    fn encode_topic(&self, buf: &mut BytesMut, topic: &TopicResponse) {
        buf.put_i16(i16::from(topic.error_code));
        self.put_compact_nullable_string(buf, topic.name.as_deref());
        buf.put_slice(topic.topic_id.as_bytes());
        buf.put_u8(topic.is_internal as u8);

        buf.put_uvarint(topic.partitions.len() as u64 + 1);
        for partition in &topic.partitions {
            self.encode_partition(buf, partition);
        }

        buf.put_i32(0); // topic_authorized_operations
        buf.put_uvarint(0);
    }

    fn encode_partition(&self, buf: &mut BytesMut, partition: &PartitionMetadata) {
        buf.put_i16(i16::from(partition.error_code));
        buf.put_i32(partition.partition_index);
        buf.put_i32(partition.leader_id);
        buf.put_i32(partition.leader_epoch);
        self.put_compact_i32_array(buf, &partition.replicas);
        self.put_compact_i32_array(buf, &partition.in_sync_replicas);
        self.put_compact_i32_array(buf, &[]); // eligible_leader_replicas
        self.put_compact_i32_array(buf, &[]); // last_known_elr
        self.put_compact_i32_array(buf, &[]); // offline_replicas
        buf.put_uvarint(0);
    }

    fn put_compact_nullable_string(&self, buf: &mut BytesMut, value: Option<&str>) {
        match value {
            Some(s) => {
                buf.put_uvarint(s.len() as u64 + 1);
                buf.put_slice(s.as_bytes());
            }
            None => buf.put_uvarint(0),
        }
    }

    fn put_compact_i32_array(&self, buf: &mut BytesMut, values: &[i32]) {
        buf.put_uvarint(values.len() as u64 + 1);
        for value in values {
            buf.put_i32(*value);
        }
    }
}
