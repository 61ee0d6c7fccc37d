//! API client: construction, configuration and one method per remote operation.
//!
//! | File | Operations |
//! |------|------------|
//! | `voices` | list / get / create / update / delete voices |
//! | `settings` | get / update / edit voice settings |
//! | `speech` | buffered and streaming synthesis |
//! | `account` | history, user, subscription |

mod account;
mod builder;
mod core;
mod settings;
mod speech;
mod voices;

pub use self::builder::{ElevenLabsClientBuilder, API_KEY_ENV};
pub use self::core::{ElevenLabsClient, DEFAULT_BASE_URL};
