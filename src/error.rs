use thiserror::Error;

use crate::events::NodeEvent;

/// Failure of a sensor driver to produce a value this cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SensorError {
    #[error("sensor produced no reading")]
    NoReading,
}

/// Remote request that cannot be served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("unknown state id {0}")]
    UnknownState(u8),
}

/// The event queue had no free slot; carries the rejected event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("event queue is full")]
pub struct QueueFull(pub NodeEvent);
