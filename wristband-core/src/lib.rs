//! Wristband Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, die Bewegungs-Tabelle und den Puls-Sequencer.
//! Alles hier läuft auch auf dem Host (x86_64) und ist damit testbar.

#![no_std]

pub mod device;
pub mod logic;
pub mod retry;
pub mod sequencer;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use device::{DeviceContext, DispatchOutcome};
pub use logic::{MotionLibrary, PulseTiming};
pub use retry::{RetryExhausted, RetryPolicy, retry_bounded};
pub use sequencer::{ExecutionReport, PulseSequencer};
pub use traits::{ActuatorBank, LedError, PinActuatorBank, SmartLedWriter};
pub use types::{
    ActuatorId, ActuatorSet, Command, IndicatorColor, LinkStatus, Motion, MotionDefinition,
    MotionStep,
};
