pub mod tcp_adapter;
