//! Node events and the queue that carries them.
//!
//! Interrupt handlers and the radio stack post events through a
//! [`Poster`]; the dispatcher drains them in arrival order. The queue is
//! a `heapless::Deque` guarded by `critical-section`, so posting from an
//! interrupt is safe.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::error::QueueFull;

/// Button edge reported by the debouncer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Press,
    Release,
}

/// Inbound request delivered by the radio transport
///
/// State ids are kept raw; unknown ids are dropped by the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioRequest {
    /// Report the current value of a state
    GetState(u8),
    /// Change a state and echo the new value
    SetState(u8, bool),
    /// Change the global strip brightness
    SetBrightness(u8),
}

/// Everything the node reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeEvent {
    /// Raw ADC conversion result
    AdcConversion(u16),
    /// Debounced button edge
    Button(ButtonEvent),
    /// The temperature sensor finished a measurement
    TemperatureUpdate,
    /// Request from the radio link
    Radio(RadioRequest),
}

/// Bounded, interrupt-safe event queue
pub struct EventQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<NodeEvent, SIZE>>>,
}

impl<const SIZE: usize> EventQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for producers (interrupts, radio callbacks)
    pub const fn poster(&self) -> Poster<'_, SIZE> {
        Poster { queue: self }
    }

    /// Queue an event
    ///
    /// Hands the event back if the queue is full.
    pub fn post(&self, event: NodeEvent) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            self.inner
                .borrow(cs)
                .borrow_mut()
                .push_back(event)
                .map_err(QueueFull)
        })
    }

    /// Take the oldest event, if any
    pub fn pop(&self) -> Option<NodeEvent> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for EventQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle for an [`EventQueue`]
#[derive(Clone, Copy)]
pub struct Poster<'a, const SIZE: usize> {
    queue: &'a EventQueue<SIZE>,
}

impl<const SIZE: usize> Poster<'_, SIZE> {
    pub fn post(&self, event: NodeEvent) -> Result<(), QueueFull> {
        self.queue.post(event)
    }

    pub fn adc_conversion(&self, raw: u16) -> Result<(), QueueFull> {
        self.post(NodeEvent::AdcConversion(raw))
    }

    pub fn button(&self, event: ButtonEvent) -> Result<(), QueueFull> {
        self.post(NodeEvent::Button(event))
    }

    pub fn temperature_update(&self) -> Result<(), QueueFull> {
        self.post(NodeEvent::TemperatureUpdate)
    }

    pub fn radio(&self, request: RadioRequest) -> Result<(), QueueFull> {
        self.post(NodeEvent::Radio(request))
    }
}
