//! Core Types für die Armband-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// Anzahl der Motoren am Armband
pub const ACTUATOR_COUNT: u8 = 4;

/// Index eines Motors (1..=4)
///
/// Die Nummerierung entspricht der Beschriftung am Armband:
/// 1 = oben, 2 = rechts, 3 = links, 4 = unten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorId(u8);

impl ActuatorId {
    pub const M1: Self = Self(1);
    pub const M2: Self = Self(2);
    pub const M3: Self = Self(3);
    pub const M4: Self = Self(4);

    /// Alle Motoren in aufsteigender Reihenfolge
    pub const ALL: [Self; ACTUATOR_COUNT as usize] = [Self::M1, Self::M2, Self::M3, Self::M4];

    /// Erstellt eine ActuatorId, `None` außerhalb von 1..=4
    pub const fn new(index: u8) -> Option<Self> {
        if index >= 1 && index <= ACTUATOR_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    const fn bit(self) -> u8 {
        1 << (self.0 - 1)
    }
}

/// Menge gleichzeitig bestromter Motoren
///
/// Intern eine Bitmaske (Bit 0 = Motor 1). Die leere Menge bedeutet
/// "alle Motoren aus".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorSet(u8);

impl ActuatorSet {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self((1 << ACTUATOR_COUNT) - 1);

    pub const fn single(id: ActuatorId) -> Self {
        Self(id.bit())
    }

    pub const fn with(self, id: ActuatorId) -> Self {
        Self(self.0 | id.bit())
    }

    pub const fn contains(self, id: ActuatorId) -> bool {
        self.0 & id.bit() != 0
    }

    /// `true` wenn kein Motor bestromt ist
    pub const fn is_idle(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Iteriert über die enthaltenen Motoren in aufsteigender Reihenfolge
    pub fn iter(self) -> impl Iterator<Item = ActuatorId> {
        ActuatorId::ALL
            .into_iter()
            .filter(move |id| self.contains(*id))
    }
}

impl FromIterator<ActuatorId> for ActuatorSet {
    fn from_iter<I: IntoIterator<Item = ActuatorId>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

/// Feste Farbpalette der Status-LED
///
/// Die Helligkeit wird erst bei `rgb()` angewendet, damit die Palette
/// unabhängig von der Firmware-Konfiguration bleibt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorColor {
    Off,
    Red,
    Green,
    Blue,
    Yellow,
    White,
}

impl IndicatorColor {
    /// Wandelt die Palettenfarbe in einen RGB-Wert mit gegebener Helligkeit um
    pub const fn rgb(self, brightness: u8) -> RGB8 {
        let (r, g, b) = match self {
            IndicatorColor::Off => (0, 0, 0),
            IndicatorColor::Red => (brightness, 0, 0),
            IndicatorColor::Green => (0, brightness, 0),
            IndicatorColor::Blue => (0, 0, brightness),
            IndicatorColor::Yellow => (brightness, brightness, 0),
            IndicatorColor::White => (brightness, brightness, brightness),
        };
        RGB8 { r, g, b }
    }

    pub const fn name(self) -> &'static str {
        match self {
            IndicatorColor::Off => "Aus",
            IndicatorColor::Red => "Rot",
            IndicatorColor::Green => "Grün",
            IndicatorColor::Blue => "Blau",
            IndicatorColor::Yellow => "Gelb",
            IndicatorColor::White => "Weiß",
        }
    }
}

/// Ein einzelner Puls-Schritt einer Bewegung
///
/// Die genannten Motoren werden für `on_ms` bestromt, danach sind
/// alle Motoren für `off_ms` aus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionStep {
    pub actuators: ActuatorSet,
    pub color: RGB8,
    pub on_ms: u32,
    pub off_ms: u32,
}

/// Alle Bewegungen, die das Armband kennt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Motion {
    /// Keine Bewegung: alle Motoren sofort aus
    Idle,
    Up,
    Right,
    Left,
    Down,
    /// Motor 1 → 2 → 4 → 3
    Clockwise,
    /// Motor 1 → 3 → 4 → 2
    CounterClockwise,
    /// Alle Motoren gleichzeitig
    All,
}

impl Motion {
    /// Bildet ein Kommando-Byte auf eine Bewegung ab
    ///
    /// Total: jedes Byte außerhalb von '1'..='7' ergibt `Motion::Idle`.
    pub const fn from_symbol(symbol: u8) -> Self {
        match symbol {
            b'1' => Motion::Up,
            b'2' => Motion::Right,
            b'3' => Motion::Left,
            b'4' => Motion::Down,
            b'5' => Motion::Clockwise,
            b'6' => Motion::CounterClockwise,
            b'7' => Motion::All,
            _ => Motion::Idle,
        }
    }

    /// Kommando-Byte für das TCP-Protokoll
    ///
    /// `Idle` wird als '0' gesendet; das Gerät behandelt es als ungültig
    /// und schaltet alle Motoren aus.
    pub const fn symbol(self) -> u8 {
        match self {
            Motion::Idle => b'0',
            Motion::Up => b'1',
            Motion::Right => b'2',
            Motion::Left => b'3',
            Motion::Down => b'4',
            Motion::Clockwise => b'5',
            Motion::CounterClockwise => b'6',
            Motion::All => b'7',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Motion::Idle => "IDLE",
            Motion::Up => "UP",
            Motion::Right => "RIGHT",
            Motion::Left => "LEFT",
            Motion::Down => "DOWN",
            Motion::Clockwise => "CW",
            Motion::CounterClockwise => "CCW",
            Motion::All => "ALL",
        }
    }
}

impl core::convert::TryFrom<&str> for Motion {
    type Error = ();

    /// Übersetzt lesbare Namen ("UP", "cw", ...) oder Ziffern ("1".."7")
    ///
    /// Groß-/Kleinschreibung und umgebende Leerzeichen werden ignoriert.
    fn try_from(name: &str) -> Result<Self, Self::Error> {
        const NAMED: [Motion; 7] = [
            Motion::Up,
            Motion::Right,
            Motion::Left,
            Motion::Down,
            Motion::Clockwise,
            Motion::CounterClockwise,
            Motion::All,
        ];

        let name = name.trim();
        if let [symbol] = name.as_bytes() {
            return match Motion::from_symbol(*symbol) {
                Motion::Idle => Err(()),
                motion => Ok(motion),
            };
        }

        NAMED
            .into_iter()
            .find(|motion| motion.name().eq_ignore_ascii_case(name))
            .ok_or(())
    }
}

/// Bewegungs-Definition: geordnete Liste von Puls-Schritten
///
/// Die Schritte liegen in der `MotionLibrary`; die Definition leiht sie nur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionDefinition<'a> {
    pub motion: Motion,
    pub steps: &'a [MotionStep],
}

impl MotionDefinition<'static> {
    /// Die Leerlauf-Definition (keine Schritte)
    pub const IDLE: Self = MotionDefinition {
        motion: Motion::Idle,
        steps: &[],
    };
}

impl MotionDefinition<'_> {
    pub fn is_idle(&self) -> bool {
        self.steps.is_empty()
    }

    /// Reihenfolge der bestromten Motor-Mengen, Schritt für Schritt
    pub fn activation_order(&self) -> impl Iterator<Item = ActuatorSet> + '_ {
        self.steps.iter().map(|step| step.actuators)
    }

    /// Gesamtdauer aller Schritte in Millisekunden
    pub fn duration_ms(&self) -> u32 {
        self.steps
            .iter()
            .map(|step| step.on_ms.saturating_add(step.off_ms))
            .fold(0, u32::saturating_add)
    }
}

/// Ein empfangenes Ein-Byte-Kommando
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// 'R', 'G', 'B': Status-LED direkt setzen
    SetColor(IndicatorColor),
    /// '1'..='7': Bewegung ausführen
    Motion(Motion),
    /// Jedes andere Byte: wird als Leerlauf behandelt
    Invalid(u8),
}

impl Command {
    pub const fn from_byte(byte: u8) -> Self {
        match byte {
            b'R' => Command::SetColor(IndicatorColor::Red),
            b'G' => Command::SetColor(IndicatorColor::Green),
            b'B' => Command::SetColor(IndicatorColor::Blue),
            b'1'..=b'7' => Command::Motion(Motion::from_symbol(byte)),
            other => Command::Invalid(other),
        }
    }
}

/// Verbindungs-Status für die Status-LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkStatus {
    Connecting,
    Connected,
    /// Verbindungsaufbau nach allen Versuchen gescheitert oder getrennt
    Failed,
}

impl LinkStatus {
    pub const fn color(self) -> IndicatorColor {
        match self {
            LinkStatus::Connecting => IndicatorColor::Yellow,
            LinkStatus::Connected => IndicatorColor::Green,
            LinkStatus::Failed => IndicatorColor::Red,
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for MotionStep {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "MotionStep {{ actuators: {=u8:#b}, rgb: ({}, {}, {}), on: {}ms, off: {}ms }}",
            self.actuators.bits(),
            self.color.r,
            self.color.g,
            self.color.b,
            self.on_ms,
            self.off_ms
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MotionDefinition<'_> {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "MotionDefinition {{ motion: {}, steps: {} }}",
            self.motion,
            self.steps.len()
        )
    }
}
