//! Bewegungs-Tabelle und Kommando-Auflösung
//!
//! Alle Bewegungen sind reine Daten: eine Liste von Puls-Schritten pro
//! Kommando. Der Sequencer führt jede Tabelle mit derselben Schleife aus.

use crate::types::{ActuatorId, ActuatorSet, IndicatorColor, Motion, MotionDefinition, MotionStep};

/// Puls-Zeiten eines einzelnen Schritts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseTiming {
    /// Dauer, für die die Motoren bestromt sind
    pub on_ms: u32,
    /// Pause nach dem Puls (alle Motoren aus)
    pub off_ms: u32,
}

impl PulseTiming {
    pub const fn new(on_ms: u32, off_ms: u32) -> Self {
        Self { on_ms, off_ms }
    }
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self::new(300, 200)
    }
}

/// Farbe der Status-LED während ein Motor läuft
const fn actuator_color(id: ActuatorId) -> IndicatorColor {
    match id.index() {
        1 => IndicatorColor::Red,
        2 => IndicatorColor::Green,
        3 => IndicatorColor::Blue,
        _ => IndicatorColor::Yellow,
    }
}

const fn pulse(id: ActuatorId, timing: PulseTiming, brightness: u8) -> MotionStep {
    MotionStep {
        actuators: ActuatorSet::single(id),
        color: actuator_color(id).rgb(brightness),
        on_ms: timing.on_ms,
        off_ms: timing.off_ms,
    }
}

const fn rotation(
    order: [ActuatorId; 4],
    timing: PulseTiming,
    brightness: u8,
) -> [MotionStep; 4] {
    [
        pulse(order[0], timing, brightness),
        pulse(order[1], timing, brightness),
        pulse(order[2], timing, brightness),
        pulse(order[3], timing, brightness),
    ]
}

/// Alle Bewegungs-Definitionen des Armbands
///
/// Wird einmal beim Start erzeugt und danach nur noch gelesen.
///
/// ```
/// # use wristband_core::{MotionLibrary, PulseTiming};
/// let library = MotionLibrary::new(PulseTiming::new(100, 50), 10);
/// let cw = library.resolve(b'5');
/// let order: Vec<u8> = cw
///     .activation_order()
///     .flat_map(|set| set.iter())
///     .map(|id| id.index())
///     .collect();
/// assert_eq!(order, [1, 2, 4, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct MotionLibrary {
    up: [MotionStep; 1],
    right: [MotionStep; 1],
    left: [MotionStep; 1],
    down: [MotionStep; 1],
    clockwise: [MotionStep; 4],
    counter_clockwise: [MotionStep; 4],
    all: [MotionStep; 1],
}

impl MotionLibrary {
    /// Reihenfolge der Uhrzeigersinn-Rotation
    pub const CLOCKWISE_ORDER: [ActuatorId; 4] =
        [ActuatorId::M1, ActuatorId::M2, ActuatorId::M4, ActuatorId::M3];

    /// Reihenfolge der Gegen-Uhrzeigersinn-Rotation
    pub const COUNTER_CLOCKWISE_ORDER: [ActuatorId; 4] =
        [ActuatorId::M1, ActuatorId::M3, ActuatorId::M4, ActuatorId::M2];

    /// Erstellt die Tabelle mit einheitlichen Puls-Zeiten
    ///
    /// `brightness` skaliert die Farben der Status-LED (0-255).
    pub const fn new(timing: PulseTiming, brightness: u8) -> Self {
        Self {
            up: [pulse(ActuatorId::M1, timing, brightness)],
            right: [pulse(ActuatorId::M2, timing, brightness)],
            left: [pulse(ActuatorId::M3, timing, brightness)],
            down: [pulse(ActuatorId::M4, timing, brightness)],
            clockwise: rotation(Self::CLOCKWISE_ORDER, timing, brightness),
            counter_clockwise: rotation(Self::COUNTER_CLOCKWISE_ORDER, timing, brightness),
            all: [MotionStep {
                actuators: ActuatorSet::ALL,
                color: IndicatorColor::White.rgb(brightness),
                on_ms: timing.on_ms,
                off_ms: timing.off_ms,
            }],
        }
    }

    /// Liefert die Definition zu einer Bewegung
    pub fn definition(&self, motion: Motion) -> MotionDefinition<'_> {
        let steps: &[MotionStep] = match motion {
            Motion::Idle => &[],
            Motion::Up => &self.up,
            Motion::Right => &self.right,
            Motion::Left => &self.left,
            Motion::Down => &self.down,
            Motion::Clockwise => &self.clockwise,
            Motion::CounterClockwise => &self.counter_clockwise,
            Motion::All => &self.all,
        };
        MotionDefinition { motion, steps }
    }

    /// Löst ein Kommando-Byte in eine Definition auf
    ///
    /// Total und rein: unbekannte Bytes ergeben die Leerlauf-Definition.
    pub fn resolve(&self, symbol: u8) -> MotionDefinition<'_> {
        self.definition(Motion::from_symbol(symbol))
    }
}

impl Default for MotionLibrary {
    fn default() -> Self {
        Self::new(PulseTiming::default(), 10)
    }
}
