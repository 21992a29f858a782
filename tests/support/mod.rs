#![allow(dead_code)]

use std::collections::VecDeque;

use noise_node::{
    Actuator, AdcChannel, Board, Duration, Indicator, Publication, RadioTransport, Rgbw,
    SensorError, StripDriver, TemperatureSensor,
};

#[derive(Default)]
pub struct MockStrip {
    pub frames: Vec<Vec<Rgbw>>,
    pub brightness: Option<u8>,
}

impl StripDriver for MockStrip {
    fn write(&mut self, pixels: &[Rgbw]) {
        self.frames.push(pixels.to_vec());
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = Some(brightness);
    }
}

#[derive(Default)]
pub struct MockAdc {
    pub requests: usize,
}

impl AdcChannel for MockAdc {
    fn request_conversion(&mut self) {
        self.requests += 1;
    }
}

#[derive(Default)]
pub struct MockThermometer {
    pub readings: VecDeque<Result<f32, SensorError>>,
    pub interval: Option<Duration>,
    pub reads: usize,
}

impl TemperatureSensor for MockThermometer {
    fn set_update_interval(&mut self, interval: Duration) {
        self.interval = Some(interval);
    }

    fn read_celsius(&mut self) -> Result<f32, SensorError> {
        self.reads += 1;
        self.readings.pop_front().unwrap_or(Err(SensorError::NoReading))
    }
}

#[derive(Default)]
pub struct MockRelay {
    pub on: bool,
}

impl Actuator for MockRelay {
    fn set_state(&mut self, on: bool) {
        self.on = on;
    }

    fn state(&self) -> bool {
        self.on
    }
}

#[derive(Default)]
pub struct MockLed {
    pub on: bool,
    pub pulses: Vec<Duration>,
}

impl Actuator for MockLed {
    fn set_state(&mut self, on: bool) {
        self.on = on;
    }

    fn state(&self) -> bool {
        self.on
    }
}

impl Indicator for MockLed {
    fn pulse(&mut self, duration: Duration) {
        self.pulses.push(duration);
    }
}

#[derive(Default)]
pub struct MockRadio {
    pub sent: Vec<Publication>,
}

impl RadioTransport for MockRadio {
    fn publish(&mut self, publication: Publication) {
        self.sent.push(publication);
    }
}

#[derive(Default)]
pub struct MockBoard {
    pub strip: MockStrip,
    pub adc: MockAdc,
    pub thermometer: MockThermometer,
    pub relay: MockRelay,
    pub led: MockLed,
    pub radio: MockRadio,
}

impl MockBoard {
    pub fn with_readings(readings: &[Result<f32, SensorError>]) -> Self {
        let mut board = Self::default();
        board.thermometer.readings = readings.iter().copied().collect();
        board
    }
}

impl Board for MockBoard {
    type Strip = MockStrip;
    type Adc = MockAdc;
    type Temperature = MockThermometer;
    type Relay = MockRelay;
    type Led = MockLed;
    type Radio = MockRadio;

    fn strip(&mut self) -> &mut MockStrip {
        &mut self.strip
    }

    fn adc(&mut self) -> &mut MockAdc {
        &mut self.adc
    }

    fn temperature(&mut self) -> &mut MockThermometer {
        &mut self.thermometer
    }

    fn relay(&mut self) -> &mut MockRelay {
        &mut self.relay
    }

    fn led(&mut self) -> &mut MockLed {
        &mut self.led
    }

    fn radio(&mut self) -> &mut MockRadio {
        &mut self.radio
    }
}
