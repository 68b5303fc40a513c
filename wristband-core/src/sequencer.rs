//! Puls-Sequencer
//!
//! Führt eine `MotionDefinition` Schritt für Schritt aus. Ein Aufruf von
//! `execute()` kehrt erst zurück, wenn die komplette Bewegung gelaufen ist;
//! danach sind garantiert alle Motoren aus.

use embedded_hal_async::delay::DelayNs;
use rgb::RGB8;

use crate::traits::{ActuatorBank, LedError, SmartLedWriter};
use crate::types::{Motion, MotionDefinition};

/// Ergebnis einer ausgeführten Bewegung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExecutionReport {
    pub motion: Motion,
    /// Anzahl vollständig ausgeführter Schritte
    pub steps_run: usize,
    /// Fehlgeschlagene Schreibzugriffe auf die Status-LED
    pub indicator_failures: usize,
}

impl ExecutionReport {
    const fn new(motion: Motion) -> Self {
        Self {
            motion,
            steps_run: 0,
            indicator_failures: 0,
        }
    }
}

/// Puls-Sequencer: besitzt Motoren, Status-LED und Delay
///
/// # Trait-basierte Abstraktion
/// - `A: ActuatorBank` - GPIO-Motoren oder Mock
/// - `L: SmartLedWriter` - RMT-LED oder Mock
/// - `D: DelayNs` - `embassy_time::Delay` oder Mock ohne echte Wartezeit
///
/// Nicht reentrant: `execute()` braucht `&mut self`, eine zweite Bewegung
/// kann also nicht parallel starten.
pub struct PulseSequencer<A, L, D> {
    actuators: A,
    indicator: L,
    delay: D,
    idle_color: RGB8,
}

impl<A: ActuatorBank, L: SmartLedWriter, D: DelayNs> PulseSequencer<A, L, D> {
    /// Erstellt den Sequencer und schaltet alle Motoren ab
    ///
    /// `idle_color` wird in jeder Pause zwischen zwei Pulsen gezeigt.
    pub fn new(mut actuators: A, indicator: L, delay: D, idle_color: RGB8) -> Self {
        actuators.idle_all();
        Self {
            actuators,
            indicator,
            delay,
            idle_color,
        }
    }

    /// Führt eine Bewegung vollständig aus
    ///
    /// Pro Schritt:
    /// 1. genau die Motoren des Schritts bestromen
    /// 2. Status-LED auf die Schrittfarbe
    /// 3. `on_ms` warten
    /// 4. alle Motoren aus, Status-LED auf Leerlauf-Farbe
    /// 5. `off_ms` warten
    ///
    /// Eine leere Definition (Leerlauf) schaltet sofort alles ab.
    /// LED-Fehler brechen die Bewegung nicht ab, sie werden nur gezählt.
    pub async fn execute(&mut self, definition: &MotionDefinition<'_>) -> ExecutionReport {
        let mut report = ExecutionReport::new(definition.motion);

        if definition.is_idle() {
            self.idle(&mut report);
            return report;
        }

        for step in definition.steps {
            self.actuators.apply(step.actuators);
            self.show(step.color, &mut report);
            self.delay.delay_ms(step.on_ms).await;

            self.idle(&mut report);
            self.delay.delay_ms(step.off_ms).await;

            report.steps_run += 1;
        }

        report
    }

    /// Setzt die Status-LED direkt (Farb-Kommandos, Verbindungs-Status)
    pub fn set_color(&mut self, color: RGB8) -> Result<(), LedError> {
        self.indicator.write(color)
    }

    pub fn idle_color(&self) -> RGB8 {
        self.idle_color
    }

    pub fn actuators(&self) -> &A {
        &self.actuators
    }

    pub fn indicator(&self) -> &L {
        &self.indicator
    }

    pub fn indicator_mut(&mut self) -> &mut L {
        &mut self.indicator
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Gibt die Hardware wieder frei
    pub fn into_parts(self) -> (A, L, D) {
        (self.actuators, self.indicator, self.delay)
    }

    fn idle(&mut self, report: &mut ExecutionReport) {
        self.actuators.idle_all();
        self.show(self.idle_color, report);
    }

    fn show(&mut self, color: RGB8, report: &mut ExecutionReport) {
        if self.indicator.write(color).is_err() {
            report.indicator_failures += 1;
        }
    }
}
