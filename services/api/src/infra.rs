use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use zengen::workflows::blueprint::{Indicator, Jdi8Score, ScoreStore};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-wide latest-score slot. Starts at zero; last writer wins.
#[derive(Debug, Default)]
pub(crate) struct InMemoryScoreStore {
    latest: AtomicU8,
}

impl ScoreStore for InMemoryScoreStore {
    fn record(&self, score: Jdi8Score) {
        self.latest.store(score.value(), Ordering::Release);
    }

    fn latest(&self) -> Jdi8Score {
        Jdi8Score::saturating(u64::from(self.latest.load(Ordering::Acquire)))
    }
}

/// Command-line spelling of an indicator. Case and padding are forgiven here,
/// unlike the JSON answers.
pub(crate) fn parse_indicator(raw: &str) -> Result<Indicator, String> {
    let needle = raw.trim().to_ascii_lowercase();
    Indicator::from_key(&needle).ok_or_else(|| {
        let known: Vec<&str> = Indicator::ordered()
            .into_iter()
            .map(Indicator::key)
            .collect();
        format!("unknown indicator '{raw}' (expected one of: {})", known.join(", "))
    })
}
