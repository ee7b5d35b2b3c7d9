use thiserror::Error;
use tracing::info;

/// The phase of one viewing session.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionPhase {
    /// No board size chosen yet; the size form is showing.
    SizeUnset,
    /// Size fixed, user is clicking initial live cells into the editor.
    AwaitingInitialPoints,
    /// Submitted; the gateway request is in flight.
    AwaitingSubmission,
    /// Sequence received (possibly empty). Terminal for the session.
    Playing,
}

/// Rejected size-form input. No transition occurs.
#[derive(Debug, Error, PartialEq)]
pub enum SizeInputError {
    #[error("board size must be a whole number")]
    NotANumber,
    #[error("board size must be greater than zero")]
    NotPositive,
    #[error("choose whether to provide an initial state")]
    InitialStateChoiceMissing,
}

/// SessionStateMachine orchestrates the size form → optional editing →
/// submission → playback flow. It owns the board size, the phase, and
/// the "provide initial state" flag; a new size requires restarting the
/// program.
pub struct SessionStateMachine {
    phase: SessionPhase,
    board_size: Option<u32>,
    provide_initial_state: bool,
}

impl SessionStateMachine {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::SizeUnset,
            board_size: None,
            provide_initial_state: false,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The fixed board size; None only while in `SizeUnset`.
    pub fn board_size(&self) -> Option<u32> {
        self.board_size
    }

    pub fn provides_initial_state(&self) -> bool {
        self.provide_initial_state
    }

    /// Validate the size form. On success the board size is fixed and
    /// the session moves to the editing phase, or straight to submission
    /// when no initial state will be supplied. On error nothing changes.
    pub fn submit_size(
        &mut self,
        input: &str,
        provide_initial_state: Option<bool>,
    ) -> Result<(), SizeInputError> {
        if self.phase != SessionPhase::SizeUnset {
            return Ok(());
        }
        let size: i64 = input
            .trim()
            .parse()
            .map_err(|_| SizeInputError::NotANumber)?;
        if size <= 0 || size > u32::MAX as i64 {
            return Err(SizeInputError::NotPositive);
        }
        let provide = provide_initial_state.ok_or(SizeInputError::InitialStateChoiceMissing)?;

        self.board_size = Some(size as u32);
        self.provide_initial_state = provide;
        self.phase = if provide {
            SessionPhase::AwaitingInitialPoints
        } else {
            SessionPhase::AwaitingSubmission
        };
        info!(size, provide, "board size accepted");
        Ok(())
    }

    /// Explicit "submit initial state" action from the editing phase.
    pub fn submit_initial_state(&mut self) {
        if self.phase == SessionPhase::AwaitingInitialPoints {
            self.phase = SessionPhase::AwaitingSubmission;
            info!("initial state submitted");
        }
    }

    /// The gateway answered (success or failure); playback begins.
    pub fn begin_playback(&mut self) {
        if self.phase == SessionPhase::AwaitingSubmission {
            self.phase = SessionPhase::Playing;
        }
    }
}

impl Default for SessionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
