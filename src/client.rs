//! Speech gateway client.
//!
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
pub mod endpoint;

pub use builder::SpeechClientBuilder;
pub use self::core::SpeechClient;
pub use endpoint::{Endpoint, UploadKind};
