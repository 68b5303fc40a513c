//! Begrenzte Wiederholung mit festem Intervall
//!
//! Wird für den WLAN-Verbindungsaufbau genutzt: N Versuche, dazwischen
//! eine feste Pause, danach Aufgabe bis zum nächsten Zyklus.

use embedded_hal_async::delay::DelayNs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub interval_ms: u32,
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32, interval_ms: u32) -> Self {
        Self {
            max_attempts,
            interval_ms,
        }
    }
}

/// Alle Versuche sind fehlgeschlagen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RetryExhausted<E> {
    pub attempts: u32,
    pub last_error: E,
}

/// Führt `op` bis zu `policy.max_attempts` mal aus
///
/// `op` bekommt die Nummer des Versuchs (ab 1). Zwischen zwei
/// fehlgeschlagenen Versuchen wird `policy.interval_ms` gewartet, nach dem
/// letzten nicht mehr. Mindestens ein Versuch findet immer statt.
pub async fn retry_bounded<T, E, D, F>(
    policy: RetryPolicy,
    delay: &mut D,
    mut op: F,
) -> Result<T, RetryExhausted<E>>
where
    D: DelayNs,
    F: AsyncFnMut(u32) -> Result<T, E>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(last_error) if attempt >= max_attempts => {
                return Err(RetryExhausted {
                    attempts: attempt,
                    last_error,
                });
            }
            Err(_) => {
                delay.delay_ms(policy.interval_ms).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    #[derive(Default)]
    struct CountingDelay {
        total_ms: u32,
        calls: u32,
    }

    impl DelayNs for CountingDelay {
        async fn delay_ns(&mut self, ns: u32) {
            self.total_ms += ns / 1_000_000;
            self.calls += 1;
        }

        async fn delay_ms(&mut self, ms: u32) {
            self.total_ms += ms;
            self.calls += 1;
        }
    }

    #[test]
    fn test_retry_succeeds_first_try() {
        let mut delay = CountingDelay::default();
        let result: Result<u32, RetryExhausted<()>> =
            block_on(retry_bounded(RetryPolicy::new(20, 500), &mut delay, async |n| Ok(n)));
        assert_eq!(result, Ok(1));
        assert_eq!(delay.calls, 0);
    }

    #[test]
    fn test_retry_succeeds_after_failures() {
        let mut delay = CountingDelay::default();
        let result = block_on(retry_bounded(
            RetryPolicy::new(20, 500),
            &mut delay,
            async |n| if n < 4 { Err(n) } else { Ok("connected") },
        ));
        assert_eq!(result, Ok("connected"));
        assert_eq!(delay.calls, 3);
        assert_eq!(delay.total_ms, 1500);
    }

    #[test]
    fn test_retry_exhausted() {
        let mut delay = CountingDelay::default();
        let mut seen = 0;
        let result: Result<(), _> = block_on(retry_bounded(
            RetryPolicy::new(20, 500),
            &mut delay,
            async |n| {
                seen = n;
                Err("no ap")
            },
        ));
        assert_eq!(
            result,
            Err(RetryExhausted {
                attempts: 20,
                last_error: "no ap"
            })
        );
        assert_eq!(seen, 20);
        // Keine Pause nach dem letzten Versuch
        assert_eq!(delay.calls, 19);
        assert_eq!(delay.total_ms, 19 * 500);
    }

    #[test]
    fn test_retry_zero_attempts_still_tries_once() {
        let mut delay = CountingDelay::default();
        let result: Result<(), _> = block_on(retry_bounded(
            RetryPolicy::new(0, 500),
            &mut delay,
            async |_| Err(()),
        ));
        assert_eq!(
            result,
            Err(RetryExhausted {
                attempts: 1,
                last_error: ()
            })
        );
        assert_eq!(delay.calls, 0);
    }
}
