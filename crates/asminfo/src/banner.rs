//! Startup and shutdown banners.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Local, TimeDelta, Utc};

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wall-clock bounds of one program run.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    started: DateTime<Utc>,
}

impl Session {
    /// Starts timing a run now.
    #[must_use]
    pub fn start() -> Self {
        Self::started_at(Utc::now())
    }

    fn started_at(started: DateTime<Utc>) -> Self {
        Self { started }
    }

    /// Renders the banner printed before anything else.
    #[must_use]
    pub fn startup_banner(&self) -> String {
        format!(
            "{NAME}, version {VERSION}\n{}\nStarted {}\n",
            env!("CARGO_PKG_DESCRIPTION"),
            timestamps(self.started),
        )
    }

    /// Renders the banner printed after processing, as of `finished`.
    #[must_use]
    pub fn shutdown_banner_at(&self, finished: DateTime<Utc>) -> String {
        format!(
            "\n{NAME} Done, {}\nRunning time = {}\n",
            timestamps(finished),
            format_elapsed(finished - self.started),
        )
    }

    /// Renders the banner printed after processing.
    #[must_use]
    pub fn shutdown_banner(&self) -> String {
        self.shutdown_banner_at(Utc::now())
    }
}

fn timestamps(at: DateTime<Utc>) -> String {
    format!(
        "{} ({} UTC)",
        at.with_timezone(&Local).format(TIME_FORMAT),
        at.format(TIME_FORMAT)
    )
}

fn format_elapsed(elapsed: TimeDelta) -> String {
    let millis = elapsed.num_milliseconds().max(0);
    let (secs, millis) = (millis / 1000, millis % 1000);
    format!(
        "{:02}:{:02}:{:02}.{millis:03}",
        secs / 3600,
        secs / 60 % 60,
        secs % 60
    )
}

/// Waits for the user to press Return.
pub fn await_return() {
    println!("Please press Return to fully stop the program.");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_startup_banner() {
        let session = Session::start();
        let banner = session.startup_banner();
        assert!(banner.starts_with(&format!("{NAME}, version {VERSION}")));
        assert!(banner.contains("UTC)"));
    }

    #[test]
    fn test_shutdown_banner_running_time() {
        let started = Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap();
        let session = Session::started_at(started);
        let finished = started + TimeDelta::milliseconds(3_725_042);

        let banner = session.shutdown_banner_at(finished);
        assert!(banner.contains("(2023-05-01 13:02:05 UTC)"));
        assert!(banner.contains("Running time = 01:02:05.042"));
    }

    #[test]
    fn test_negative_elapsed_clamped() {
        assert_eq!(format_elapsed(TimeDelta::seconds(-5)), "00:00:00.000");
    }
}
