mod editor;
mod player;
mod session;

pub use editor::PointSetEditor;
pub use player::SequencePlayer;
pub use session::{SessionPhase, SessionStateMachine, SizeInputError};
