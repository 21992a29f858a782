//! Radio-facing identifiers and outbound publications

use crate::error::RequestError;

const STATE_ID_RELAY: u8 = 0;
const STATE_ID_LED: u8 = 1;

/// Routing key of a published metric
///
/// Identifies which sensor slot a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ChannelId {
    I2c0Default = 0,
    I2c0Alternate = 1,
    I2c1Default = 2,
    I2c1Alternate = 3,
}

/// Remotely addressable boolean state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StateId {
    /// Power module relay
    Relay = STATE_ID_RELAY,
    /// Status LED
    Led = STATE_ID_LED,
}

impl StateId {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            STATE_ID_RELAY => Self::Relay,
            STATE_ID_LED => Self::Led,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relay => "relay",
            Self::Led => "led",
        }
    }
}

impl TryFrom<u8> for StateId {
    type Error = RequestError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_raw(value).ok_or(RequestError::UnknownState(value))
    }
}

/// Outbound message for the radio transport
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Publication {
    /// Temperature in degrees Celsius
    Temperature { channel: ChannelId, celsius: f32 },
    /// Current value of a remote state
    State { id: StateId, value: bool },
}
