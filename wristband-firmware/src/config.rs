// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use wristband_core::{PulseTiming, RetryPolicy};

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die RGB LED (WS2812/Neopixel)
pub const LED_GPIO_PIN: u8 = 8;

/// Helligkeits-Level für die LED (0-255)
/// Wert ist gedimmt für Augenschonung
pub const LED_BRIGHTNESS: u8 = 10;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Anzahl der LEDs im Strip
pub const LED_COUNT: usize = 1;

// ============================================================================
// Motor Konfiguration
// ============================================================================

/// GPIO-Pins der vier Vibrationsmotoren (Motor 1..4)
/// Nur zur Dokumentation - die Zuordnung passiert in main.rs
pub const MOTOR_GPIO_PINS: [u8; 4] = [2, 3, 4, 5];

/// Puls-Dauer: so lange läuft ein Motor pro Schritt
pub const PULSE_ON_MS: u32 = 300;

/// Pause nach jedem Puls (alle Motoren aus)
pub const PULSE_OFF_MS: u32 = 200;

/// Einheitliche Puls-Zeiten für alle Bewegungen
pub const PULSE_TIMING: PulseTiming = PulseTiming::new(PULSE_ON_MS, PULSE_OFF_MS);

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Maximale Anzahl Verbindungsversuche pro Zyklus
pub const WIFI_CONNECT_ATTEMPTS: u32 = 20;

/// Pause zwischen zwei Verbindungsversuchen in Millisekunden
pub const WIFI_CONNECT_INTERVAL_MS: u32 = 500;

/// Retry-Policy für den WLAN-Verbindungsaufbau (20 x 500 ms)
pub const WIFI_RETRY_POLICY: RetryPolicy =
    RetryPolicy::new(WIFI_CONNECT_ATTEMPTS, WIFI_CONNECT_INTERVAL_MS);

/// Wartezeit nach gescheitertem Zyklus bzw. Disconnect bis zum nächsten Zyklus
pub const WIFI_RECONNECT_DELAY_SECS: u64 = 10;

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

// Gesamt-Heap: ~100 KB für WiFi-Stack

// ============================================================================
// Kommando-Server Konfiguration
// ============================================================================

/// TCP-Port für Ein-Byte-Kommandos
pub const COMMAND_PORT: u16 = 80;

/// Timeout für eine Client-Verbindung in Sekunden
/// Clients senden sofort nach dem Connect ein Byte
pub const COMMAND_SOCKET_TIMEOUT_SECS: u64 = 10;

/// TCP RX Buffer-Größe in Bytes
/// Es wird nur ein Byte gelesen, der Rest der Zeile wird verworfen
pub const TCP_RX_BUFFER_SIZE: usize = 256;

/// TCP TX Buffer-Größe in Bytes
/// Der Server sendet nichts zurück
pub const TCP_TX_BUFFER_SIZE: usize = 64;

// ============================================================================
// mDNS-Konfiguration
// ============================================================================

/// mDNS Hostname (ohne .local suffix)
/// Das Armband wird erreichbar sein unter: <MDNS_HOSTNAME>.local
pub const MDNS_HOSTNAME: &str = "wristband";

/// mDNS TTL (Time To Live) in Sekunden
pub const MDNS_TTL_SECS: u32 = 120;

/// mDNS Reconnect Delay in Sekunden
pub const MDNS_RECONNECT_DELAY_SECS: u64 = 5;

/// mDNS Port (Standard: 5353, RFC 6762)
pub const MDNS_PORT: u16 = 5353;

/// mDNS IPv4 Multicast-Adresse (224.0.0.251)
pub const MDNS_MULTICAST_ADDR: [u8; 4] = [224, 0, 0, 251];

/// UDP Buffer-Größen für mDNS (TX, RX in Bytes)
pub const MDNS_UDP_BUFFER_SIZE: usize = 512;

/// mDNS Receive/Send Buffer-Größen in Bytes
/// 1500 Bytes = Standard MTU für Ethernet/WiFi
pub const MDNS_PACKET_BUFFER_SIZE: usize = 1500;

// ============================================================================
// Netzwerk Konfiguration
// ============================================================================

/// Polling-Intervall beim Warten auf Link/DHCP in Millisekunden
pub const NETWORK_POLL_INTERVAL_MS: u64 = 500;
