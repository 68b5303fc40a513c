use anyhow::Result;
use clap::Parser;
use log::{error, info};
use tokio::io::{AsyncBufReadExt, BufReader};

use wristband_bridge::{forward, run_udp_listener};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Kommando-Server des Armbands (host:port)
    #[arg(long, default_value = "wristband.local:80")]
    device: String,

    /// Adresse für eingehende UDP-Text-Kommandos
    #[arg(long, default_value = "0.0.0.0:5005")]
    udp: String,

    /// Nur UDP, keine Eingabe über die Konsole
    #[arg(long)]
    no_console: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    info!("Forwarding commands to {}", args.device);

    let udp_device = args.device.clone();
    let udp_bind = args.udp.clone();
    let listener = tokio::spawn(async move {
        if let Err(e) = run_udp_listener(&udp_bind, &udp_device).await {
            error!("UDP listener stopped: {e:#}");
        }
    });

    if args.no_console {
        listener.await?;
        return Ok(());
    }

    run_console(&args.device).await
}

/// Liest Kommandos zeilenweise von stdin, bis "exit" oder EOF
async fn run_console(device: &str) -> Result<()> {
    println!("Wristband bridge (console mode)");
    println!("Commands: UP, RIGHT, LEFT, DOWN, CW, CCW, ALL (or 1-7), R, G, B. Type 'exit' to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().eq_ignore_ascii_case("exit") {
            break;
        }
        forward(device, &line).await;
    }

    println!("Exiting wristband bridge...");
    Ok(())
}
