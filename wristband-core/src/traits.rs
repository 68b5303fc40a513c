//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;
use rgb::RGB8;

use crate::types::{ACTUATOR_COUNT, ActuatorId, ActuatorSet};

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Trait für SmartLED Hardware-Zugriff
///
/// Abstrahiert den Zugriff auf RGB LEDs (WS2812/Neopixel).
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait SmartLedWriter: Send {
    /// Schreibt eine RGB-Farbe auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;
}

/// Trait für die Motor-Ausgänge
///
/// Schreibzugriffe sind unfehlbar (direkte GPIO-Steuerung).
pub trait ActuatorBank {
    /// Bestromt genau die Motoren in `active`, alle anderen werden abgeschaltet
    fn apply(&mut self, active: ActuatorSet);

    /// Aktuell bestromte Motoren
    fn active(&self) -> ActuatorSet;

    /// Schaltet alle Motoren ab
    fn idle_all(&mut self) {
        self.apply(ActuatorSet::NONE);
    }
}

/// Motor-Bank aus vier digitalen Ausgängen
///
/// Generisch über `embedded_hal::digital::OutputPin`, damit derselbe Code
/// auf dem ESP32 (`esp_hal::gpio::Output`) und mit Mock-Pins im Test läuft.
/// `pins[0]` ist Motor 1.
pub struct PinActuatorBank<P> {
    pins: [P; ACTUATOR_COUNT as usize],
    active: ActuatorSet,
}

impl<P: OutputPin<Error = Infallible>> PinActuatorBank<P> {
    /// Übernimmt die Pins und schaltet sofort alle Motoren ab
    pub fn new(pins: [P; ACTUATOR_COUNT as usize]) -> Self {
        let mut bank = Self {
            pins,
            active: ActuatorSet::ALL,
        };
        bank.apply(ActuatorSet::NONE);
        bank
    }

    pub fn release(self) -> [P; ACTUATOR_COUNT as usize] {
        self.pins
    }
}

impl<P: OutputPin<Error = Infallible>> ActuatorBank for PinActuatorBank<P> {
    fn apply(&mut self, active: ActuatorSet) {
        for (pin, id) in self.pins.iter_mut().zip(ActuatorId::ALL) {
            let Ok(()) = if active.contains(id) {
                pin.set_high()
            } else {
                pin.set_low()
            };
        }
        self.active = active;
    }

    fn active(&self) -> ActuatorSet {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType;

    #[derive(Default)]
    struct FakePin {
        high: bool,
        writes: usize,
    }

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    fn levels(bank: PinActuatorBank<FakePin>) -> [bool; 4] {
        bank.release().map(|pin| pin.high)
    }

    #[test]
    fn test_pin_bank_starts_idle() {
        let bank = PinActuatorBank::new(Default::default());
        assert_eq!(bank.active(), ActuatorSet::NONE);
        let pins: [FakePin; 4] = bank.release();
        assert!(pins.iter().all(|pin| !pin.high && pin.writes == 1));
    }

    #[test]
    fn test_pin_bank_apply_sets_exact_levels() {
        let mut bank = PinActuatorBank::new(Default::default());
        bank.apply(ActuatorSet::single(ActuatorId::M2).with(ActuatorId::M3));
        assert_eq!(levels(bank), [false, true, true, false]);
    }

    #[test]
    fn test_pin_bank_apply_clears_previous() {
        let mut bank = PinActuatorBank::new(Default::default());
        bank.apply(ActuatorSet::ALL);
        bank.apply(ActuatorSet::single(ActuatorId::M4));
        assert_eq!(bank.active(), ActuatorSet::single(ActuatorId::M4));
        assert_eq!(levels(bank), [false, false, false, true]);
    }

    #[test]
    fn test_pin_bank_idle_all() {
        let mut bank = PinActuatorBank::new(Default::default());
        bank.apply(ActuatorSet::ALL);
        bank.idle_all();
        assert!(bank.active().is_idle());
        assert_eq!(levels(bank), [false; 4]);
    }
}
