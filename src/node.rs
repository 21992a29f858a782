//! Node application context
//!
//! Owns the board drivers and every piece of mutable state, and turns
//! events into work. All handlers run to completion on one thread, so
//! nothing here needs locking.

use embassy_time::{Duration, Instant};

use crate::color::{OFF, Rgbw};
use crate::events::{ButtonEvent, EventQueue, NodeEvent, RadioRequest};
use crate::gate::{GateConfig, PublishState};
use crate::level::{LevelCounts, LevelMeterConfig, LevelRenderer};
use crate::radio::{ChannelId, Publication};
use crate::sample::SampleScale;
use crate::smoother::{DEFAULT_FLUSH_THRESHOLD, DEFAULT_HISTORY_CAPACITY, RollingSmoother};
use crate::state_sync::StateSync;
use crate::{
    Actuator, AdcChannel, Board, Indicator, RadioTransport, StripDriver, TemperatureSensor,
};

/// How often the temperature sensor measures
pub const TEMPERATURE_UPDATE_INTERVAL: Duration = Duration::from_secs(1);

/// Status LED pulse on a button press
pub const BUTTON_PULSE: Duration = Duration::from_millis(100);

/// Status LED pulse once the node has started
pub const BOOT_PULSE: Duration = Duration::from_millis(2000);

/// Configuration for the node
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Raw ADC result to sample conversion
    pub sample: SampleScale,
    /// Samples folded into one history entry, minus one
    pub flush_threshold: u8,
    /// Level meter colors and ceiling
    pub meter: LevelMeterConfig,
    /// Temperature publish throttling
    pub temperature: GateConfig,
    /// Channel temperature readings are published on
    pub temperature_channel: ChannelId,
    /// Measurement interval handed to the temperature sensor
    pub temperature_interval: Duration,
    pub button_pulse: Duration,
    pub boot_pulse: Duration,
}

impl Default for NodeConfig {
    fn default() -> Self {
        let sample = SampleScale::default();
        Self {
            sample,
            flush_threshold: DEFAULT_FLUSH_THRESHOLD,
            meter: LevelMeterConfig {
                ceiling: sample.ceiling,
                ..LevelMeterConfig::default()
            },
            temperature: GateConfig::temperature(),
            temperature_channel: ChannelId::I2c0Alternate,
            temperature_interval: TEMPERATURE_UPDATE_INTERVAL,
            button_pulse: BUTTON_PULSE,
            boot_pulse: BOOT_PULSE,
        }
    }
}

/// Sensor node - owns the drivers and dispatches events
///
/// LEDS is the strip length, HISTORY the number of smoothed peaks kept.
pub struct Node<B: Board, const LEDS: usize, const HISTORY: usize = DEFAULT_HISTORY_CAPACITY> {
    // External dependencies and configuration
    board: B,
    scale: SampleScale,
    temperature_interval: Duration,
    button_pulse: Duration,
    boot_pulse: Duration,

    // Internal state
    smoother: RollingSmoother<HISTORY>,
    frame: [Rgbw; LEDS],
    temperature: PublishState<ChannelId>,
    states: StateSync,

    // Internal dependencies
    renderer: LevelRenderer,
}

impl<B: Board, const LEDS: usize, const HISTORY: usize> Node<B, LEDS, HISTORY> {
    pub fn new(board: B, config: &NodeConfig) -> Self {
        Self {
            board,
            scale: config.sample,
            temperature_interval: config.temperature_interval,
            button_pulse: config.button_pulse,
            boot_pulse: config.boot_pulse,
            smoother: RollingSmoother::new(config.flush_threshold),
            frame: [OFF; LEDS],
            temperature: PublishState::new(config.temperature_channel, config.temperature),
            states: StateSync::new(false),
            renderer: LevelRenderer::new(config.meter),
        }
    }

    /// Bring the hardware into its initial state
    ///
    /// Turns the status LED off, configures the temperature sensor,
    /// starts the first ADC conversion and signals readiness with a
    /// long LED pulse.
    pub fn start(&mut self) {
        self.board.led().set_state(self.states.led());
        self.board
            .temperature()
            .set_update_interval(self.temperature_interval);
        self.board.adc().request_conversion();
        self.board.led().pulse(self.boot_pulse);
        log::info!("node started, {} pixels", LEDS);
    }

    /// Dispatch a single event
    pub fn handle(&mut self, event: NodeEvent, now: Instant) {
        match event {
            NodeEvent::AdcConversion(raw) => {
                self.on_adc_conversion(raw);
            }
            NodeEvent::Button(button) => self.on_button(button),
            NodeEvent::TemperatureUpdate => self.on_temperature_update(now),
            NodeEvent::Radio(request) => self.on_radio(request),
        }
    }

    /// Drain queued events in arrival order
    ///
    /// Returns the number of events handled.
    pub fn poll<const SIZE: usize>(&mut self, events: &EventQueue<SIZE>, now: Instant) -> usize {
        let mut handled = 0;
        while let Some(event) = events.pop() {
            self.handle(event, now);
            handled += 1;
        }
        handled
    }

    /// ADC conversion finished
    ///
    /// Feeds the smoother, redraws the strip and re-arms the next
    /// conversion.
    pub fn on_adc_conversion(&mut self, raw: u16) -> LevelCounts {
        let sample = self.scale.apply(raw);
        self.smoother.feed(sample);

        let counts = self
            .renderer
            .render(sample, self.smoother.smoothed_max(), &mut self.frame);
        log::debug!("{}", counts.instant);

        self.board.strip().write(&self.frame);
        self.board.adc().request_conversion();

        counts
    }

    /// Temperature sensor finished a measurement
    pub fn on_temperature_update(&mut self, now: Instant) {
        let celsius = match self.board.temperature().read_celsius() {
            Ok(celsius) => celsius,
            Err(err) => {
                log::trace!("temperature skipped: {}", err);
                return;
            }
        };

        if let Some(publish) = self.temperature.evaluate(celsius, now) {
            log::debug!("publish temperature {} on {:?}", publish.value, publish.channel);
            self.board.radio().publish(Publication::Temperature {
                channel: publish.channel,
                celsius: publish.value,
            });
        }
    }

    pub fn on_button(&mut self, event: ButtonEvent) {
        if event == ButtonEvent::Press {
            self.board.led().pulse(self.button_pulse);
        }
    }

    /// Serve a radio request; malformed requests are ignored
    pub fn on_radio(&mut self, request: RadioRequest) {
        if let Err(err) = self.states.handle(&mut self.board, request) {
            log::debug!("ignoring {:?}: {}", request, err);
        }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    /// Last rendered frame
    pub fn frame(&self) -> &[Rgbw; LEDS] {
        &self.frame
    }

    pub fn smoother(&self) -> &RollingSmoother<HISTORY> {
        &self.smoother
    }

    pub fn temperature(&self) -> &PublishState<ChannelId> {
        &self.temperature
    }

    pub fn states(&self) -> &StateSync {
        &self.states
    }
}
