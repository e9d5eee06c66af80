pub mod channel_service;
pub mod error;
pub mod result_cache;
