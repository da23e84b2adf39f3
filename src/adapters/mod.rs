// Adapters layer: concrete implementations for external systems (content API, files, HTML templates).

pub mod document;
pub mod http;
pub mod storage;
