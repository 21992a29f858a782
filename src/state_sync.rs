//! Remote state handlers
//!
//! Serves get/set requests for the relay and the status LED, and the
//! write-only strip brightness. Every get and set answers with a state
//! publication so other listeners observe the current value.

use crate::error::RequestError;
use crate::events::RadioRequest;
use crate::radio::{Publication, StateId};
use crate::{Actuator, Board, RadioTransport, StripDriver};

/// Remote state endpoints
///
/// The relay is read back from its driver; the status LED keeps a local
/// mirror because its driver may be in the middle of a pulse.
#[derive(Debug, Clone, Default)]
pub struct StateSync {
    led: bool,
}

impl StateSync {
    pub const fn new(led: bool) -> Self {
        Self { led }
    }

    /// Current local value of the status LED
    pub const fn led(&self) -> bool {
        self.led
    }

    /// Read a state and publish it
    pub fn get<B: Board>(&self, board: &mut B, id: StateId) -> bool {
        let value = match id {
            StateId::Relay => board.relay().state(),
            StateId::Led => self.led,
        };
        board.radio().publish(Publication::State { id, value });
        value
    }

    /// Change a state, then echo the new value
    pub fn set<B: Board>(&mut self, board: &mut B, id: StateId, value: bool) {
        match id {
            StateId::Relay => board.relay().set_state(value),
            StateId::Led => {
                self.led = value;
                board.led().set_state(value);
            }
        }
        log::debug!("{} set to {}", id.as_str(), value);
        board.radio().publish(Publication::State { id, value });
    }

    /// Forward a brightness to the strip; not mirrored, not echoed
    pub fn set_brightness<B: Board>(&self, board: &mut B, brightness: u8) {
        board.strip().set_brightness(brightness);
    }

    /// Serve one radio request
    ///
    /// Requests naming an unknown state fail without side effects.
    pub fn handle<B: Board>(
        &mut self,
        board: &mut B,
        request: RadioRequest,
    ) -> Result<(), RequestError> {
        match request {
            RadioRequest::GetState(raw) => {
                self.get(board, StateId::try_from(raw)?);
            }
            RadioRequest::SetState(raw, value) => {
                self.set(board, StateId::try_from(raw)?, value);
            }
            RadioRequest::SetBrightness(brightness) => {
                self.set_brightness(board, brightness);
            }
        }
        Ok(())
    }
}
