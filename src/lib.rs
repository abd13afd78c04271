//! `voicespan` — a small, focused value type for WebVTT voice spans.
//!
//! This crate provides:
//! - [`VoiceSpan`](voice_span::VoiceSpan): an immutable record attributing a
//!   region of subtitle text to a named speaker, optionally tagged with style
//!   classes (`"first"`, `"loud"`, ...)
//! - [`Bundle`](bundle::Bundle): a flat, string-keyed container used as the
//!   serialization boundary, so spans can cross process/component boundaries
//!   where only primitive/dictionary-shaped data fits
//!
//! The crate deliberately stops at the value object and its encode/decode
//! contract. Positioning spans over text ranges, rendering, and parsing voice
//! spans out of cue markup all belong to the pipeline that owns the span.

// The value type (most consumers should start here).
pub mod voice_span;

// The serialization boundary container and field-key scheme.
pub mod bundle;

// Crate-wide error type.
pub mod error;

// Logging configuration for binary/test consumers.
#[cfg(feature = "logging")]
pub mod logging;

pub use bundle::Bundle;
pub use error::{Error, Result};
pub use voice_span::VoiceSpan;
