// GPIO-Ausgänge der Vibrationsmotoren
//
// Jeder Motor hängt über einen Transistor an einem eigenen GPIO.
// High = Motor läuft.

use esp_hal::gpio::{Level, Output, OutputConfig, OutputPin};

use crate::MotorBank;

/// Ausgangs-Pin eines Motors
pub type MotorPin = Output<'static>;

/// Erstellt die Motor-Bank aus vier GPIOs (Motor 1..4)
///
/// Alle Pins starten auf Low, die Bank schaltet zusätzlich explizit ab.
pub fn motor_bank(
    m1: impl OutputPin + 'static,
    m2: impl OutputPin + 'static,
    m3: impl OutputPin + 'static,
    m4: impl OutputPin + 'static,
) -> MotorBank {
    let config = OutputConfig::default();
    MotorBank::new([
        Output::new(m1, Level::Low, config),
        Output::new(m2, Level::Low, config),
        Output::new(m3, Level::Low, config),
        Output::new(m4, Level::Low, config),
    ])
}
