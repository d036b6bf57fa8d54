pub mod base_parser;
pub mod request_parser;
pub mod response_encoder;
pub mod traits;
pub mod varint;
