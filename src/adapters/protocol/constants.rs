/// ApiVersions API key. Clients send this first to discover what the
/// broker speaks.
pub const API_VERSIONS_KEY: i16 = 18;

/// The single ApiVersions version this broker implements.
pub const API_VERSIONS_VERSION: i16 = 4;

/// DescribeTopicPartitions API key.
pub const DESCRIBE_TOPIC_PARTITIONS_KEY: i16 = 75;

/// The single DescribeTopicPartitions version this broker implements.
pub const DESCRIBE_TOPIC_PARTITIONS_VERSION: i16 = 0;

/// Sentinel byte for an absent DescribeTopicPartitions cursor. Every
/// response also ends with this value since pagination is never
/// offered.
pub const NULL_CURSOR: u8 = 0xff;
