//! Host-Bridge für das Armband
//!
//! Übersetzt Text-Kommandos ("UP", "cw", "5", "R") in das Ein-Byte-Protokoll
//! des Geräts und schickt jedes Kommando über eine eigene TCP-Verbindung.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpStream, UdpSocket};

use wristband_core::{Command, Motion};

/// Kommando, das jede laufende Bewegung abbricht (Gerät: ungültig → Leerlauf)
pub const CANCEL_COMMAND: u8 = b'0';

/// Maximale Größe eines UDP-Datagramms mit Text-Kommando
const UDP_BUFFER_SIZE: usize = 1024;

/// Übersetzt ein Text-Kommando in das Kommando-Byte
///
/// - Bewegungsnamen und Ziffern `1`..`7` ergeben das Bewegungs-Symbol
/// - `R`, `G`, `B` (auch klein) werden als Farb-Kommando durchgereicht
/// - alles andere wird zu `CANCEL_COMMAND`
pub fn translate_command(input: &str) -> u8 {
    let input = input.trim();

    if let Ok(motion) = Motion::try_from(input) {
        return motion.symbol();
    }

    if let [letter] = input.as_bytes() {
        let letter = letter.to_ascii_uppercase();
        if let Command::SetColor(_) = Command::from_byte(letter) {
            return letter;
        }
    }

    CANCEL_COMMAND
}

/// Sendet ein Kommando-Byte an das Gerät
///
/// Pro Kommando eine neue Verbindung: Byte + Zeilenende schreiben, schließen.
pub async fn send_command(device: &str, command: u8) -> Result<()> {
    debug!("Connecting to {device}");
    let mut stream = TcpStream::connect(device)
        .await
        .with_context(|| format!("failed to connect to {device}"))?;

    stream
        .write_all(&[command, b'\n'])
        .await
        .context("failed to write command")?;
    stream.shutdown().await.context("failed to close connection")?;

    debug!("Sent command '{}'", command as char);
    Ok(())
}

/// Übersetzt und sendet; Fehler werden nur geloggt
pub async fn forward(device: &str, input: &str) {
    let command = translate_command(input);
    info!("'{}' -> '{}'", input.trim(), command as char);

    if let Err(e) = send_command(device, command).await {
        warn!("Error sending command: {e:#}");
    }
}

/// Empfängt Text-Kommandos per UDP und leitet sie an das Gerät weiter
///
/// Läuft endlos; nur das Binden des Sockets kann fehlschlagen.
pub async fn run_udp_listener(bind: &str, device: &str) -> Result<()> {
    let socket = UdpSocket::bind(bind)
        .await
        .with_context(|| format!("failed to bind UDP socket on {bind}"))?;
    info!("UDP listener started on {}", socket.local_addr()?);

    let mut buf = [0u8; UDP_BUFFER_SIZE];
    loop {
        let (len, peer) = match socket.recv_from(&mut buf).await {
            Ok(received) => received,
            Err(e) => {
                warn!("Error in UDP listener: {e}");
                continue;
            }
        };

        match std::str::from_utf8(&buf[..len]) {
            Ok(text) => {
                debug!("Received UDP command from {peer}: {}", text.trim());
                forward(device, text).await;
            }
            Err(e) => warn!("Ignoring non-UTF-8 datagram from {peer}: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[test]
    fn test_translate_motion_names() {
        assert_eq!(translate_command("UP"), b'1');
        assert_eq!(translate_command("right"), b'2');
        assert_eq!(translate_command("Left"), b'3');
        assert_eq!(translate_command("DOWN"), b'4');
        assert_eq!(translate_command("cw"), b'5');
        assert_eq!(translate_command("CCW"), b'6');
        assert_eq!(translate_command("all"), b'7');
    }

    #[test]
    fn test_translate_digits_and_whitespace() {
        assert_eq!(translate_command("5"), b'5');
        assert_eq!(translate_command("  6\n"), b'6');
        assert_eq!(translate_command("7"), b'7');
    }

    #[test]
    fn test_translate_colors() {
        assert_eq!(translate_command("R"), b'R');
        assert_eq!(translate_command("g"), b'G');
        assert_eq!(translate_command("B"), b'B');
    }

    #[test]
    fn test_translate_unknown_cancels() {
        assert_eq!(translate_command(""), CANCEL_COMMAND);
        assert_eq!(translate_command("0"), CANCEL_COMMAND);
        assert_eq!(translate_command("9"), CANCEL_COMMAND);
        assert_eq!(translate_command("IDLE"), CANCEL_COMMAND);
        assert_eq!(translate_command("jump"), CANCEL_COMMAND);
        assert_eq!(translate_command("Y"), CANCEL_COMMAND);
    }

    #[tokio::test]
    async fn test_send_command_writes_byte_and_newline() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            stream.read_to_end(&mut received).await.unwrap();
            received
        });

        send_command(&addr, b'5').await.unwrap();
        assert_eq!(server.await.unwrap(), b"5\n");
    }

    #[tokio::test]
    async fn test_send_command_reports_unreachable_device() {
        // Port eines gerade geschlossenen Listeners ist nicht erreichbar
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        drop(listener);

        assert!(send_command(&addr, b'1').await.is_err());
    }

    #[tokio::test]
    async fn test_udp_datagram_is_forwarded() {
        let device = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let device_addr = device.local_addr().unwrap().to_string();

        // Freien UDP-Port ermitteln
        let probe = std::net::UdpSocket::bind("127.0.0.1:0").unwrap();
        let udp_addr = probe.local_addr().unwrap().to_string();
        drop(probe);

        let listener_addr = udp_addr.clone();
        let bridge =
            tokio::spawn(async move { run_udp_listener(&listener_addr, &device_addr).await });

        let sender = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let mut stream = loop {
            // Listener ist evtl. noch nicht gebunden, dann erneut senden
            let _ = sender.send_to(b"ccw", &udp_addr).await;
            let accept = tokio::time::timeout(
                std::time::Duration::from_millis(200),
                device.accept(),
            );
            if let Ok(result) = accept.await {
                break result.unwrap().0;
            }
        };

        let mut received = Vec::new();
        stream.read_to_end(&mut received).await.unwrap();
        assert_eq!(received, b"6\n");

        bridge.abort();
    }
}
