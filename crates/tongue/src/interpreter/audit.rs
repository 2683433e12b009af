//! Audit events and sinks.
//!
//! The engine never fails a lookup. Instead it reports what happened to an
//! [`AuditSink`], which a host may ignore, log, or turn into telemetry.

use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::types::TranslationId;

/// The outcome of a lookup or resolution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditEvent {
    /// A stored template was found and used.
    KeyUsed,
    /// No template is stored for the key, or an operator's count parameter
    /// was not supplied.
    KeyMiss,
    /// The key is not syntactically valid.
    KeyInvalid,
    /// No plural rule is registered for the language; the default was used.
    PluralizerMiss,
    /// An operator's gender parameter was not supplied.
    KeywordMiss,
}

impl AuditEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditEvent::KeyUsed => "key_used",
            AuditEvent::KeyMiss => "key_miss",
            AuditEvent::KeyInvalid => "key_invalid",
            AuditEvent::PluralizerMiss => "pluralizer_miss",
            AuditEvent::KeywordMiss => "keyword_miss",
        }
    }
}

impl std::fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiver of audit events.
///
/// Any `Fn(&TranslationId, AuditEvent)` closure is a sink.
pub trait AuditSink: Send + Sync {
    fn log(&self, id: &TranslationId, event: AuditEvent);
}

impl<F> AuditSink for F
where
    F: Fn(&TranslationId, AuditEvent) + Send + Sync,
{
    fn log(&self, id: &TranslationId, event: AuditEvent) {
        self(id, event);
    }
}

/// A sink that discards every event. The engine's default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAuditSink;

impl AuditSink for NullAuditSink {
    fn log(&self, _id: &TranslationId, _event: AuditEvent) {}
}

/// A sink that emits each event through `tracing`.
///
/// Hits are logged at `trace`, missing gender parameters at `debug`, and
/// every other miss at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn log(&self, id: &TranslationId, event: AuditEvent) {
        let key = id.key();
        let language = id.language();
        let section = id.section();
        match event {
            AuditEvent::KeyUsed => {
                trace!(key, language, %section, %event, "translation used");
            }
            AuditEvent::KeyMiss => {
                warn!(key, language, %section, %event, "translation or count parameter missing");
            }
            AuditEvent::KeyInvalid => {
                warn!(key, language, %section, %event, "invalid translation key");
            }
            AuditEvent::PluralizerMiss => {
                warn!(key, language, %section, %event, "no pluralizer for language, using default");
            }
            AuditEvent::KeywordMiss => {
                debug!(key, language, %section, %event, "gender parameter missing");
            }
        }
    }
}

/// A sink that keeps every event in memory, in order.
///
/// # Example
///
/// ```
/// use tongue::{AuditEvent, AuditSink, RecordingAuditSink, TranslationId};
///
/// let sink = RecordingAuditSink::new();
/// sink.log(&TranslationId::new("a", "en"), AuditEvent::KeyMiss);
/// assert_eq!(sink.count(AuditEvent::KeyMiss), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingAuditSink {
    events: Mutex<Vec<(TranslationId, AuditEvent)>>,
}

impl RecordingAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of the recorded events.
    pub fn events(&self) -> Vec<(TranslationId, AuditEvent)> {
        self.lock().clone()
    }

    /// The recorded event kinds, without identities.
    pub fn kinds(&self) -> Vec<AuditEvent> {
        self.lock().iter().map(|(_, event)| *event).collect()
    }

    /// How many times `event` was recorded.
    pub fn count(&self, event: AuditEvent) -> usize {
        self.lock().iter().filter(|(_, e)| *e == event).count()
    }

    /// Remove and return all recorded events.
    pub fn take(&self) -> Vec<(TranslationId, AuditEvent)> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(TranslationId, AuditEvent)>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AuditSink for RecordingAuditSink {
    fn log(&self, id: &TranslationId, event: AuditEvent) {
        self.lock().push((id.clone(), event));
    }
}
