pub mod http;
pub mod storage;

pub use http::HttpGateway;
pub use storage::LocalStorage;
