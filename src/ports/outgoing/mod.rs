pub mod topic_resolver;
