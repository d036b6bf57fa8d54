pub mod static_resolver;
