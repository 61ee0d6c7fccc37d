//! HTTP dispatch shared by every API operation.

mod http;

pub use http::API_KEY_HEADER;
pub(crate) use http::{ApiRequest, HttpTransport};
