pub mod error;
pub mod metadata;
pub mod topic;
