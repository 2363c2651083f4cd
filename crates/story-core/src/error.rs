use thiserror::Error;

/// Failures at the audio backend seam. The engine logs and swallows all of
/// these; none reach the caller of a cue.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio context available in this environment")]
    Unsupported,
    #[error("failed to create {node}: {detail}")]
    Node { node: &'static str, detail: String },
    #[error("audio context already closed")]
    Closed,
}

impl AudioError {
    pub fn node(node: &'static str, detail: impl Into<String>) -> Self {
        AudioError::Node {
            node,
            detail: detail.into(),
        }
    }
}
