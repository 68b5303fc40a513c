// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von wristband-core
pub use wristband_core::{
    ActuatorBank, Command, DeviceContext, DispatchOutcome, LedError, LinkStatus, MotionLibrary,
    PinActuatorBank, PulseSequencer, SmartLedWriter,
};

// Embassy Sync-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::signal::Signal;

use crate::hal::{MotorPin, RmtLedWriter};

// ============================================================================
// Type-Aliase
// ============================================================================
//
// Diese Type-Aliase vereinfachen die Lesbarkeit der Funktionssignaturen.
// Statt:  DeviceContext<PinActuatorBank<Output<'static>>, RmtLedWriter<'a>, Delay>
// Nutze:  WristbandDevice<'a>

/// Signal für Verbindungs-Status (WiFi Task → Kommando-Server)
/// Nur der letzte Status zählt, ältere werden überschrieben.
pub type LinkStatusSignal = Signal<NoopRawMutex, LinkStatus>;

/// Motor-Bank aus vier GPIO-Ausgängen
pub type MotorBank = PinActuatorBank<MotorPin>;

/// Geräte-Kontext mit echter Hardware
/// Der Lifetime-Parameter stammt vom RMT-Buffer der LED.
pub type WristbandDevice<'a> = DeviceContext<MotorBank, RmtLedWriter<'a>, embassy_time::Delay>;
