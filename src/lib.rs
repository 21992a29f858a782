#![no_std]

pub mod color;
pub mod error;
pub mod events;
pub mod gate;
pub mod history;
pub mod level;
pub mod node;
pub mod radio;
pub mod sample;
pub mod smoother;
pub mod state_sync;

pub use error::{QueueFull, RequestError, SensorError};
pub use events::{ButtonEvent, EventQueue, NodeEvent, Poster, RadioRequest};
pub use gate::{GateConfig, Publish, PublishState};
pub use history::History;
pub use level::{LevelCounts, LevelMeterConfig, LevelRenderer};
pub use node::{Node, NodeConfig};
pub use radio::{ChannelId, Publication, StateId};
pub use sample::SampleScale;
pub use smoother::{RollingSmoother, SampleWindow};
pub use state_sync::StateSync;

pub use color::Rgbw;
pub use embassy_time::{Duration, Instant};

/// Addressable LED strip
pub trait StripDriver {
    /// Transmit a complete frame
    fn write(&mut self, pixels: &[Rgbw]);

    /// Set the global brightness, independent of the frame content
    fn set_brightness(&mut self, brightness: u8);
}

/// Analog input sampled asynchronously
///
/// Every conversion has to be re-requested by the consumer.
pub trait AdcChannel {
    /// Start the next asynchronous conversion
    fn request_conversion(&mut self);
}

/// Digital temperature sensor
pub trait TemperatureSensor {
    /// Set how often the sensor measures
    ///
    /// After each measurement the platform posts
    /// [`NodeEvent::TemperatureUpdate`].
    fn set_update_interval(&mut self, interval: Duration);

    /// Latest temperature in degrees Celsius
    fn read_celsius(&mut self) -> Result<f32, SensorError>;
}

/// Two-state output such as a relay
pub trait Actuator {
    fn set_state(&mut self, on: bool);

    fn state(&self) -> bool;
}

/// Actuator that can also blink once, such as a status LED
pub trait Indicator: Actuator {
    /// Turn on for `duration`, then return to the previous state
    fn pulse(&mut self, duration: Duration);
}

/// Outbound side of the radio link
///
/// Fire-and-forget, there is no delivery confirmation.
pub trait RadioTransport {
    fn publish(&mut self, publication: Publication);
}

/// Hardware the node runs on
///
/// Implement this trait to bind the node to a platform.
pub trait Board {
    type Strip: StripDriver;
    type Adc: AdcChannel;
    type Temperature: TemperatureSensor;
    type Relay: Actuator;
    type Led: Indicator;
    type Radio: RadioTransport;

    fn strip(&mut self) -> &mut Self::Strip;
    fn adc(&mut self) -> &mut Self::Adc;
    fn temperature(&mut self) -> &mut Self::Temperature;
    fn relay(&mut self) -> &mut Self::Relay;
    fn led(&mut self) -> &mut Self::Led;
    fn radio(&mut self) -> &mut Self::Radio;
}

/// Route `log` output to the ESP serial console
#[cfg(feature = "esp32-log")]
pub fn init_logging(level: log::LevelFilter) {
    esp_println::logger::init_logger(level);
}
