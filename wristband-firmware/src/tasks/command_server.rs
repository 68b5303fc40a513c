// Kommando-Server Task - Ein-Byte-Kommandos über TCP
use defmt::{Debug2Format, error, info, warn};
use embassy_futures::select::{Either, select};
use embassy_net::Stack;
use embassy_net::tcp::TcpSocket;
use embassy_time::{Delay, Duration};
use esp_hal_smartled::smart_led_buffer;

use wristband_core::{IndicatorColor, LinkStatus};

use crate::config::{
    COMMAND_PORT, COMMAND_SOCKET_TIMEOUT_SECS, LED_BRIGHTNESS, PULSE_TIMING, RMT_CLOCK_MHZ,
    TCP_RX_BUFFER_SIZE, TCP_TX_BUFFER_SIZE,
};
use crate::hal::RmtLedWriter;
use crate::{
    DeviceContext, DispatchOutcome, LinkStatusSignal, MotionLibrary, MotorBank, PulseSequencer,
    WristbandDevice,
};

/// Kommando-Server Task
///
/// Besitzt den kompletten Geräte-Kontext (Motoren + Status-LED) und ist
/// damit der einzige Schreiber auf beide.
///
/// Ablauf pro Verbindung:
/// - genau einen Client annehmen
/// - genau ein Byte lesen
/// - Kommando vollständig ausführen (Bewegungen blockieren bis zum Ende)
/// - Verbindung schließen
///
/// Während eine Bewegung läuft, lauscht kein Socket. Verbindungen in dieser
/// Zeit werden vom Stack abgewiesen, Kommandos also verworfen statt gepuffert.
///
/// # Parameter
/// - `stack`: embassy-net Stack für Netzwerk-Zugriff
/// - `link_status`: Signal vom WiFi Task
/// - `gpio8` / `rmt_peripheral`: Hardware für die Status-LED
/// - `motors`: Motor-Bank (Motor 1..4)
#[embassy_executor::task]
pub async fn command_server_task(
    stack: &'static Stack<'static>,
    link_status: &'static LinkStatusSignal,
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    motors: MotorBank,
) {
    // Buffer für SmartLED Daten erstellen (1 LED)
    let mut rmt_buffer = smart_led_buffer!(1);
    let indicator = RmtLedWriter::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer)
        .expect("Failed to initialize RMT for status LED");

    let sequencer = PulseSequencer::new(
        motors,
        indicator,
        Delay,
        IndicatorColor::Off.rgb(LED_BRIGHTNESS),
    );
    let mut device: WristbandDevice<'_> = DeviceContext::new(
        sequencer,
        MotionLibrary::new(PULSE_TIMING, LED_BRIGHTNESS),
        LED_BRIGHTNESS,
    );
    show_link_status(&mut device, LinkStatus::Connecting);

    let mut rx_buffer = [0u8; TCP_RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TCP_TX_BUFFER_SIZE];

    info!("Server: Command server starting on port {}...", COMMAND_PORT);

    loop {
        let mut socket = TcpSocket::new(*stack, &mut rx_buffer, &mut tx_buffer);
        socket.set_timeout(Some(Duration::from_secs(COMMAND_SOCKET_TIMEOUT_SECS)));

        // Gleichzeitig auf Client und Verbindungs-Status warten.
        // Ein Status-Wechsel bricht das Listen ab, der Socket wird neu erstellt.
        match select(socket.accept(COMMAND_PORT), link_status.wait()).await {
            Either::First(Ok(())) => {}
            Either::First(Err(e)) => {
                warn!("Server: Accept failed: {}", Debug2Format(&e));
                continue;
            }
            Either::Second(status) => {
                show_link_status(&mut device, status);
                continue;
            }
        }

        info!(
            "Server: Client connected from {}",
            Debug2Format(&socket.remote_endpoint())
        );

        let mut command = [0u8; 1];
        match socket.read(&mut command).await {
            Ok(0) => warn!("Server: Client closed without sending a command"),
            Ok(_) => {
                let outcome = device.dispatch(command[0]).await;
                log_outcome(&outcome);
            }
            Err(e) => warn!("Server: Read failed: {}", Debug2Format(&e)),
        }

        socket.close();
        if let Err(e) = socket.flush().await {
            warn!("Server: Close failed: {}", Debug2Format(&e));
        }
    }
}

fn show_link_status(device: &mut WristbandDevice<'_>, status: LinkStatus) {
    info!("Server: Link status {}", status);
    if device.show_link_status(status).is_err() {
        error!("Failed to write to LED");
    }
}

fn log_outcome(outcome: &DispatchOutcome) {
    let report = match outcome {
        DispatchOutcome::ColorSet { color, result } => {
            match result {
                Ok(()) => info!("Command: LED set to {}", color.name()),
                Err(_) => error!("Command: Failed to set LED to {}", color.name()),
            }
            return;
        }
        DispatchOutcome::Motion(report) => {
            info!(
                "Command: {} finished after {} steps",
                report.motion.name(),
                report.steps_run
            );
            report
        }
        DispatchOutcome::Invalid { byte, report } => {
            warn!("Command: Invalid byte {=u8:#x}, all motors idle", *byte);
            report
        }
    };

    if report.indicator_failures > 0 {
        error!(
            "Command: {} LED writes failed during {}",
            report.indicator_failures,
            report.motion.name()
        );
    }
}
