//! Wire types for the speech gateway.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ApiResponse`] | Envelope returned by every endpoint |
//! | [`ResponseMeta`] | Request id and Shamsi date carried in `meta` |
//! | [`Base64Request`] | JSON body for the base64 endpoint |
//! | [`LinkRequest`] | JSON body for the link endpoint |

pub mod request;
pub mod response;

pub use request::{Base64Request, LinkRequest};
pub use response::{ApiResponse, ResponseMeta};
