pub mod dir;
pub mod http;

pub use dir::DirFetcher;
pub use http::HttpFetcher;
