//! Geräte-Kontext und Kommando-Dispatcher
//!
//! Der `DeviceContext` wird einmal beim Start erzeugt und gehört genau einem
//! Task. Er ist der einzige Schreiber auf Status-LED und Motoren.

use embedded_hal_async::delay::DelayNs;

use crate::logic::MotionLibrary;
use crate::sequencer::{ExecutionReport, PulseSequencer};
use crate::traits::{ActuatorBank, LedError, SmartLedWriter};
use crate::types::{Command, IndicatorColor, LinkStatus, Motion};

/// Was ein empfangenes Byte ausgelöst hat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchOutcome {
    /// 'R', 'G' oder 'B': Status-LED gesetzt
    ColorSet {
        color: IndicatorColor,
        result: Result<(), LedError>,
    },
    /// Bewegung ausgeführt
    Motion(ExecutionReport),
    /// Unbekanntes Byte: Leerlauf ausgeführt
    Invalid { byte: u8, report: ExecutionReport },
}

pub struct DeviceContext<A, L, D> {
    sequencer: PulseSequencer<A, L, D>,
    library: MotionLibrary,
    brightness: u8,
}

impl<A: ActuatorBank, L: SmartLedWriter, D: DelayNs> DeviceContext<A, L, D> {
    pub fn new(sequencer: PulseSequencer<A, L, D>, library: MotionLibrary, brightness: u8) -> Self {
        Self {
            sequencer,
            library,
            brightness,
        }
    }

    /// Verarbeitet ein empfangenes Kommando-Byte bis zum Ende
    ///
    /// Bewegungen laufen vollständig durch, bevor die Funktion zurückkehrt.
    pub async fn dispatch(&mut self, byte: u8) -> DispatchOutcome {
        match Command::from_byte(byte) {
            Command::SetColor(color) => {
                let result = self.sequencer.set_color(color.rgb(self.brightness));
                DispatchOutcome::ColorSet { color, result }
            }
            Command::Motion(motion) => DispatchOutcome::Motion(self.run(motion).await),
            Command::Invalid(byte) => DispatchOutcome::Invalid {
                byte,
                report: self.run(Motion::Idle).await,
            },
        }
    }

    /// Zeigt den Verbindungs-Status auf der Status-LED
    pub fn show_link_status(&mut self, status: LinkStatus) -> Result<(), LedError> {
        self.sequencer
            .set_color(status.color().rgb(self.brightness))
    }

    pub fn library(&self) -> &MotionLibrary {
        &self.library
    }

    pub fn sequencer(&self) -> &PulseSequencer<A, L, D> {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut PulseSequencer<A, L, D> {
        &mut self.sequencer
    }

    async fn run(&mut self, motion: Motion) -> ExecutionReport {
        let definition = self.library.definition(motion);
        self.sequencer.execute(&definition).await
    }
}
