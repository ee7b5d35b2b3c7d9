// Domain layer - pure board-space types and coordinate mapping
pub mod domain;

// Application layer - session, editor, and playback state machines
pub mod application;

// Gateway - HTTP client for the external simulator
pub mod gateway;

// Infrastructure layer - UI, rendering, input, configuration
pub mod config;
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{PointSetEditor, SequencePlayer, SessionPhase, SessionStateMachine};
pub use config::ViewerConfig;
pub use domain::{Point, PointSet, Snapshot, SnapshotSequence};
