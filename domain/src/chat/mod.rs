//! Feature chat stub.
//!
//! - [`transcript::ChatTranscript`]: the per-visit conversation
//! - [`transcript::ASSISTANT_PLACEHOLDER`]: the canned assistant reply

pub mod transcript;
