// WiFi Task - Verbindet mit WLAN und meldet den Verbindungs-Status
use defmt::{Debug2Format, error, info, warn};
use embassy_net::{Runner, Stack};
use embassy_time::{Delay, Duration, Timer};
use esp_radio::wifi::{ClientConfig, ModeConfig, WifiController, WifiDevice, WifiEvent};

use wristband_core::{LinkStatus, retry_bounded};

use crate::LinkStatusSignal;
use crate::config::{
    NETWORK_POLL_INTERVAL_MS, WIFI_CONNECT_ATTEMPTS, WIFI_PASSWORD, WIFI_RECONNECT_DELAY_SECS,
    WIFI_RETRY_POLICY, WIFI_SSID,
};

/// WiFi Connection Task
///
/// Ein Zyklus besteht aus:
/// 1. Status `Connecting` melden (gelb)
/// 2. Bis zu `WIFI_CONNECT_ATTEMPTS` Verbindungsversuche im Abstand von
///    `WIFI_CONNECT_INTERVAL_MS`
/// 3. Erfolg: `Connected` (grün) und auf Disconnect warten
/// 4. Aufgabe oder Disconnect: `Failed` (rot)
///
/// Nach `WIFI_RECONNECT_DELAY_SECS` beginnt der nächste Zyklus.
#[embassy_executor::task]
pub async fn connection_task(
    mut controller: WifiController<'static>,
    link_status: &'static LinkStatusSignal,
) {
    info!("WiFi: Starting connection task");

    loop {
        if matches!(controller.is_started(), Ok(false)) {
            info!("WiFi: Configuring and starting...");

            let client_config = ModeConfig::Client(
                ClientConfig::default()
                    .with_ssid(WIFI_SSID.into())
                    .with_password(WIFI_PASSWORD.into()),
            );

            if let Err(e) = controller.set_config(&client_config) {
                error!("WiFi: Failed to set configuration: {}", Debug2Format(&e));
                link_status.signal(LinkStatus::Failed);
                Timer::after(Duration::from_secs(WIFI_RECONNECT_DELAY_SECS)).await;
                continue;
            }

            if let Err(e) = controller.start_async().await {
                error!("WiFi: Failed to start: {}", Debug2Format(&e));
                link_status.signal(LinkStatus::Failed);
                Timer::after(Duration::from_secs(WIFI_RECONNECT_DELAY_SECS)).await;
                continue;
            }

            info!("WiFi: Started successfully");
        }

        link_status.signal(LinkStatus::Connecting);
        info!("WiFi: Connecting to '{}'...", WIFI_SSID);

        let joined = retry_bounded(WIFI_RETRY_POLICY, &mut Delay, async |attempt| {
            let result = controller.connect_async().await;
            if let Err(e) = &result {
                warn!(
                    "WiFi: Attempt {}/{} failed: {}",
                    attempt,
                    WIFI_CONNECT_ATTEMPTS,
                    Debug2Format(e)
                );
            }
            result
        })
        .await;

        match joined {
            Ok(()) => {
                info!("WiFi: Connected successfully!");
                link_status.signal(LinkStatus::Connected);

                controller.wait_for_event(WifiEvent::StaDisconnected).await;
                warn!("WiFi: Disconnected from AP");
                link_status.signal(LinkStatus::Failed);
            }
            Err(exhausted) => {
                error!(
                    "WiFi: Giving up after {} attempts: {}",
                    exhausted.attempts,
                    Debug2Format(&exhausted.last_error)
                );
                link_status.signal(LinkStatus::Failed);
            }
        }

        info!("WiFi: Next connection cycle in {}s", WIFI_RECONNECT_DELAY_SECS);
        Timer::after(Duration::from_secs(WIFI_RECONNECT_DELAY_SECS)).await;
    }
}

/// Network Task
///
/// Prozessiert Netzwerk-Pakete für den embassy-net Stack
#[embassy_executor::task]
pub async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) -> ! {
    runner.run().await
}

/// Wartet bis Link und DHCP-Adresse verfügbar sind und loggt die Adresse
pub async fn wait_for_network(stack: &'static Stack<'static>) {
    loop {
        if stack.is_link_up() {
            if let Some(config) = stack.config_v4() {
                info!("WiFi: Got IP {}", Debug2Format(&config.address.address()));
                return;
            }
        }
        Timer::after(Duration::from_millis(NETWORK_POLL_INTERVAL_MS)).await;
    }
}
