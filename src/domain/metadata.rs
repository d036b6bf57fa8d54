use crate::domain::topic::TopicId;

/// Kafka protocol error codes carried in response fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    None,
    UnknownTopicOrPartition,
    UnsupportedVersion,
}

impl From<ErrorCode> for i16 {
    fn from(code: ErrorCode) -> i16 {
        match code {
            ErrorCode::None => 0,
            ErrorCode::UnknownTopicOrPartition => 3,
            ErrorCode::UnsupportedVersion => 35,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopicMetadata {
    pub name: String,
    pub topic_id: TopicId,
    pub is_internal: bool,
    pub partitions: Vec<PartitionMetadata>,
    pub error_code: ErrorCode,
}

impl TopicMetadata {
    /// Metadata for a known topic with `partition_count` single-replica
    /// partitions led by broker 1. A topic declared with zero
    /// partitions still serves one.
    pub fn with_partition_count(name: String, topic_id: TopicId, partition_count: usize) -> Self {
        let partition_count = partition_count.max(1);
        Self {
            name,
            topic_id,
            is_internal: false,
            partitions: (0..partition_count)
                .map(|index| PartitionMetadata::single_replica(index as i32))
                .collect(),
            error_code: ErrorCode::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartitionMetadata {
    pub error_code: ErrorCode,
    pub partition_index: i32,
    pub leader_id: i32,
    pub leader_epoch: i32,
    pub replicas: Vec<i32>,
    pub in_sync_replicas: Vec<i32>,
}

impl PartitionMetadata {
    pub fn single_replica(partition_index: i32) -> Self {
        Self {
            error_code: ErrorCode::None,
            partition_index,
            leader_id: 1,
            leader_epoch: 0,
            replicas: vec![1],
            in_sync_replicas: vec![1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_wire_values() {
        assert_eq!(i16::from(ErrorCode::None), 0);
        assert_eq!(i16::from(ErrorCode::UnknownTopicOrPartition), 3);
        assert_eq!(i16::from(ErrorCode::UnsupportedVersion), 35);
    }

    #[test]
    fn test_zero_partition_topic_serves_one() {
        let metadata =
            TopicMetadata::with_partition_count("logs".to_string(), TopicId::zero(), 0);
        assert_eq!(metadata.partitions.len(), 1);
        assert_eq!(metadata.partitions[0].partition_index, 0);
        assert_eq!(metadata.partitions[0].replicas, vec![1]);
    }
}
