//! Sequential first-success-wins walk over the configured sources.

use crate::domain::model::PartialVesselRecord;
use crate::domain::ports::SourceAdapter;
use crate::utils::error::TrackerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Resolved,
    Failed,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAttempt {
    pub source: String,
    pub outcome: AttemptOutcome,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Resolution {
    pub record: PartialVesselRecord,
    pub attempts: Vec<SourceAttempt>,
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        !self.record.error
    }
}

enum State {
    Trying(usize),
    Resolved(PartialVesselRecord),
    Exhausted,
}

pub struct FallbackOrchestrator {
    adapters: Vec<Box<dyn SourceAdapter>>,
}

impl FallbackOrchestrator {
    pub fn new(adapters: Vec<Box<dyn SourceAdapter>>) -> Self {
        Self { adapters }
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.adapters.iter().map(|a| a.name()).collect()
    }

    /// Calls each adapter once, in order, and stops at the first usable record.
    pub async fn resolve(&self) -> Resolution {
        let mut attempts = Vec::with_capacity(self.adapters.len());
        let mut state = State::Trying(0);

        loop {
            state = match state {
                State::Trying(i) if i >= self.adapters.len() => State::Exhausted,
                State::Trying(i) => {
                    let adapter = &self.adapters[i];
                    tracing::debug!("Trying source {} ({}/{})", adapter.name(), i + 1, self.adapters.len());
                    let record = adapter.fetch_and_parse().await;

                    let outcome = if record.is_usable() {
                        AttemptOutcome::Resolved
                    } else if record.error {
                        AttemptOutcome::Failed
                    } else {
                        AttemptOutcome::Empty
                    };
                    attempts.push(SourceAttempt {
                        source: adapter.name().to_string(),
                        outcome,
                        message: record.message.clone(),
                    });

                    if outcome == AttemptOutcome::Resolved {
                        State::Resolved(record)
                    } else {
                        tracing::info!(
                            "{} gave no usable data{}",
                            adapter.name(),
                            record
                                .message
                                .as_deref()
                                .map(|m| format!(": {}", m))
                                .unwrap_or_default()
                        );
                        State::Trying(i + 1)
                    }
                }
                State::Resolved(record) => {
                    tracing::info!(
                        "Vessel status resolved from {}",
                        record.source.as_deref().unwrap_or("unknown source")
                    );
                    return Resolution { record, attempts };
                }
                State::Exhausted => {
                    let err = TrackerError::SourcesExhausted;
                    tracing::warn!("{} ({} sources tried)", err, attempts.len());
                    return Resolution {
                        record: PartialVesselRecord {
                            error: true,
                            message: Some(err.to_string()),
                            ..Default::default()
                        },
                        attempts,
                    };
                }
            };
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::model::{RawSourcePayload, Reading};
    use crate::utils::error::Result;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Adapter returning a canned record and counting its calls.
    pub(crate) struct StubAdapter {
        pub name: &'static str,
        pub record: Option<PartialVesselRecord>,
        pub calls: Arc<AtomicUsize>,
    }

    impl StubAdapter {
        pub(crate) fn ok(name: &'static str, record: PartialVesselRecord) -> Self {
            Self {
                name,
                record: Some(record),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub(crate) fn failing(name: &'static str) -> Self {
            Self {
                name,
                record: None,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl SourceAdapter for StubAdapter {
        fn name(&self) -> &str {
            self.name
        }

        async fn fetch(&self) -> Result<RawSourcePayload> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.record {
                Some(_) => Ok(RawSourcePayload::Html(String::new())),
                None => Err(TrackerError::HttpStatus {
                    source_name: self.name.to_string(),
                    status: 500,
                }),
            }
        }

        fn parse(&self, _raw: RawSourcePayload) -> PartialVesselRecord {
            self.record.clone().unwrap_or_default()
        }
    }

    pub(crate) fn two_field_record() -> PartialVesselRecord {
        PartialVesselRecord {
            speed: Some(Reading::Number(12.0)),
            destination: Some("Lisbon".to_string()),
            ..Default::default()
        }
    }

    pub(crate) fn six_field_record() -> PartialVesselRecord {
        PartialVesselRecord {
            latitude: Some(50.0),
            longitude: Some(-2.0),
            speed: Some(Reading::Number(15.0)),
            course: Some(Reading::Number(90.0)),
            destination: Some("Dover".to_string()),
            eta: Some(Reading::from("Jul 16, 09:00")),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_first_success_wins_over_richer_later_source() {
        let c = StubAdapter::ok("C", six_field_record());
        let c_calls = c.calls.clone();
        let orchestrator = FallbackOrchestrator::new(vec![
            Box::new(StubAdapter::failing("A")),
            Box::new(StubAdapter::ok("B", two_field_record())),
            Box::new(c),
        ]);

        let resolution = orchestrator.resolve().await;

        let mut expected = two_field_record();
        expected.source = Some("B".to_string());
        assert_eq!(resolution.record, expected);
        assert_eq!(c_calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            resolution.attempts.iter().map(|a| a.outcome).collect::<Vec<_>>(),
            vec![AttemptOutcome::Failed, AttemptOutcome::Resolved]
        );
    }

    #[tokio::test]
    async fn test_empty_record_advances() {
        let orchestrator = FallbackOrchestrator::new(vec![
            Box::new(StubAdapter::ok("Empty", PartialVesselRecord::default())),
            Box::new(StubAdapter::ok("Full", six_field_record())),
        ]);

        let resolution = orchestrator.resolve().await;

        assert!(resolution.is_resolved());
        assert_eq!(resolution.record.source.as_deref(), Some("Full"));
        assert_eq!(resolution.attempts[0].outcome, AttemptOutcome::Empty);
    }

    #[tokio::test]
    async fn test_exhausted() {
        let a = StubAdapter::failing("A");
        let a_calls = a.calls.clone();
        let orchestrator =
            FallbackOrchestrator::new(vec![Box::new(a), Box::new(StubAdapter::failing("B"))]);

        let resolution = orchestrator.resolve().await;

        assert!(!resolution.is_resolved());
        assert!(!resolution.record.has_payload());
        assert_eq!(
            resolution.record.message.as_deref(),
            Some("Unable to fetch real-time data from vessel tracking services")
        );
        assert_eq!(resolution.attempts.len(), 2);
        assert_eq!(a_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_no_adapters_is_exhausted() {
        let resolution = FallbackOrchestrator::new(Vec::new()).resolve().await;
        assert!(resolution.record.error);
        assert!(resolution.attempts.is_empty());
    }
}
