// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Traits aus wristband-core
// für die echte ESP32-C6 Hardware.

pub mod led_writer;
pub mod motors;

pub use led_writer::{LED_BUFFER_SIZE, RmtLedWriter};
pub use motors::{MotorPin, motor_bank};
