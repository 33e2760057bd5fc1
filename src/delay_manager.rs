use std::time::Duration;
use std::thread;
use log::info;

/// Pauses between keywords to stay under the API rate limit.
pub fn request_delay(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    info!("Waiting for {:.1} seconds (Request Delay)...", delay.as_secs_f64());
    thread::sleep(delay);
}

/// How the orchestrator waits between downloads.
pub trait Pacer {
    fn pause(&self, delay: Duration);
}

/// Blocks the calling thread via [`request_delay`].
pub struct ThreadSleep;

impl Pacer for ThreadSleep {
    fn pause(&self, delay: Duration) {
        request_delay(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_thread_sleep_waits_at_least_the_delay() {
        let start = Instant::now();
        ThreadSleep.pause(Duration::from_millis(30));
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_zero_delay_returns_immediately() {
        let start = Instant::now();
        request_delay(Duration::ZERO);
        assert!(start.elapsed() < Duration::from_millis(20));
    }
}
