//! Provider callback protocol: parsing, classification, and ack generation.
//!
//! ## Processing Flow
//!
//! ```text
//! raw bytes → parse_callback() → IncomingMessage → build_ack() → ack XML
//! ```
//!
//! The pieces are pure; the web layer owns the mapping of results and errors
//! onto HTTP responses.

pub mod parser;
pub mod response;
pub mod timestamp;
pub mod types;

pub use parser::{classify_root_tag, parse_callback};
pub use response::{build_ack, internal_fault_ack, DEFAULT_STATE_MESSAGE};
pub use timestamp::{delivery_timestamp, DELIVERY_TIMESTAMP_FORMAT};
pub use types::{
    AckState, CallbackError, IncomingMessage, MessageKind, TelemetryRecord, MISSING_FIELD,
};
