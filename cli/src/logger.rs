use tracing_subscriber::{filter::LevelFilter, EnvFilter};

pub fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn verbosity_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::default().add_directive(level_filter(verbosity).into())
}

/// Sends log records to stderr, keeping stdout for the results
///
/// `RUST_LOG` takes precedence over the verbosity flag when it is set. Records from the `log`
/// macros are forwarded to the subscriber.
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| verbosity_filter(verbosity));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}

/// Logs how far along a computation is, once per whole percent
pub struct ProgressLog {
    label: &'static str,
    last_percent: Option<u64>,
}

impl ProgressLog {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            last_percent: None,
        }
    }

    // Some(percent) when it moved on since the last report
    fn step(&mut self, completed: u64, total: u64) -> Option<u64> {
        let percent = (u128::from(completed) * 100 / u128::from(total.max(1))) as u64;
        if self.last_percent == Some(percent) {
            return None;
        }
        self.last_percent = Some(percent);
        Some(percent)
    }
}

impl dice_odds_core::Progress for ProgressLog {
    fn report(&mut self, completed: u64, total: u64) {
        if let Some(percent) = self.step(completed, total) {
            log::info!("{percent}% of the {} completed", self.label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0 => LevelFilter::WARN)]
    #[test_case(1 => LevelFilter::INFO)]
    #[test_case(2 => LevelFilter::DEBUG)]
    #[test_case(3 => LevelFilter::TRACE)]
    #[test_case(9 => LevelFilter::TRACE)]
    fn verbosity(verbosity: u8) -> LevelFilter {
        level_filter(verbosity)
    }

    #[test_case(0 => Some(LevelFilter::WARN))]
    #[test_case(2 => Some(LevelFilter::DEBUG))]
    fn filter_caps_at_the_verbosity(verbosity: u8) -> Option<LevelFilter> {
        verbosity_filter(verbosity).max_level_hint()
    }

    #[test]
    fn progress_steps_once_per_percent() {
        let mut progress = ProgressLog::new("test");
        let steps: Vec<u64> = (1..=1000)
            .filter_map(|completed| progress.step(completed, 1000))
            .collect();
        pretty_assertions::assert_eq!(steps, (0..=100).collect::<Vec<_>>());
    }

    #[test]
    fn progress_with_few_steps() {
        let mut progress = ProgressLog::new("test");
        pretty_assertions::assert_eq!(progress.step(1, 3), Some(33));
        pretty_assertions::assert_eq!(progress.step(2, 3), Some(66));
        pretty_assertions::assert_eq!(progress.step(3, 3), Some(100));
        pretty_assertions::assert_eq!(progress.step(3, 3), None);
    }
}
