//! Gemeinsame Mocks für die Host-Tests
//!
//! Alle Mocks schreiben in dasselbe Event-Log, damit die Reihenfolge von
//! Motor-, LED- und Delay-Aufrufen geprüft werden kann.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use embedded_hal_async::delay::DelayNs;
use rgb::RGB8;
use wristband_core::{
    ActuatorBank, ActuatorSet, DeviceContext, LedError, MotionLibrary, PulseSequencer,
    PulseTiming, SmartLedWriter,
};

pub const BRIGHTNESS: u8 = 10;
pub const IDLE_COLOR: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
pub const TIMING: PulseTiming = PulseTiming::new(300, 200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Apply(ActuatorSet),
    Color(RGB8),
    Delay(u32),
}

pub type EventLog = Arc<Mutex<Vec<Event>>>;

pub fn events(log: &EventLog) -> Vec<Event> {
    log.lock().unwrap().clone()
}

// ============================================================================
// Mock Actuator Bank
// ============================================================================

pub struct MockActuatorBank {
    pub log: EventLog,
    active: ActuatorSet,
}

impl MockActuatorBank {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            active: ActuatorSet::NONE,
        }
    }
}

impl ActuatorBank for MockActuatorBank {
    fn apply(&mut self, active: ActuatorSet) {
        self.log.lock().unwrap().push(Event::Apply(active));
        self.active = active;
    }

    fn active(&self) -> ActuatorSet {
        self.active
    }
}

// ============================================================================
// Mock LED Writer
// ============================================================================

pub struct MockLedWriter {
    pub log: EventLog,
    pub last_color: Option<RGB8>,
    pub write_count: usize,
    pub fail_writes: bool,
}

impl MockLedWriter {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            last_color: None,
            write_count: 0,
            fail_writes: false,
        }
    }
}

impl SmartLedWriter for MockLedWriter {
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        if self.fail_writes {
            return Err(LedError::WriteFailed);
        }

        self.log.lock().unwrap().push(Event::Color(color));
        self.last_color = Some(color);
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Delay (wartet nicht wirklich)
// ============================================================================

pub struct MockDelay {
    pub log: EventLog,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.log.lock().unwrap().push(Event::Delay(ns / 1_000_000));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.lock().unwrap().push(Event::Delay(ms));
    }
}

pub type MockSequencer = PulseSequencer<MockActuatorBank, MockLedWriter, MockDelay>;
pub type MockDevice = DeviceContext<MockActuatorBank, MockLedWriter, MockDelay>;

/// Erstellt einen Sequencer mit leerem Event-Log
///
/// Das Abschalten im Konstruktor wird aus dem Log entfernt.
pub fn sequencer() -> (MockSequencer, EventLog) {
    let log = EventLog::default();
    let sequencer = PulseSequencer::new(
        MockActuatorBank::new(log.clone()),
        MockLedWriter::new(log.clone()),
        MockDelay { log: log.clone() },
        IDLE_COLOR,
    );
    log.lock().unwrap().clear();
    (sequencer, log)
}

pub fn device() -> (MockDevice, EventLog) {
    let (sequencer, log) = sequencer();
    let device = DeviceContext::new(sequencer, MotionLibrary::new(TIMING, BRIGHTNESS), BRIGHTNESS);
    (device, log)
}
