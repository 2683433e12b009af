//! Evaluation context for one interpolation pass.

use std::collections::HashMap;

use crate::interpreter::{AuditEvent, AuditSink};
use crate::types::{TranslationId, Value};

/// State carried through the interpolation of a single template.
///
/// The context tracks:
/// - The identity being translated (attached to every audit event)
/// - Parameters available to placeholders and operators
/// - Where audit events go, and whether missing gender parameters are reported
pub struct EvalContext<'a> {
    id: &'a TranslationId,
    params: &'a HashMap<String, Value>,
    auditor: &'a dyn AuditSink,
    report_missing_gender: bool,
}

impl<'a> EvalContext<'a> {
    /// Create a context that reports missing gender parameters.
    pub fn new(
        id: &'a TranslationId,
        params: &'a HashMap<String, Value>,
        auditor: &'a dyn AuditSink,
    ) -> Self {
        Self {
            id,
            params,
            auditor,
            report_missing_gender: true,
        }
    }

    /// Set whether a missing gender parameter emits [`AuditEvent::KeywordMiss`].
    pub fn with_missing_gender_reports(mut self, report: bool) -> Self {
        self.report_missing_gender = report;
        self
    }

    /// Get a parameter value by name.
    pub fn get_param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    /// Whether missing gender parameters are reported.
    pub fn reports_missing_gender(&self) -> bool {
        self.report_missing_gender
    }

    /// Report an event for the identity being translated.
    pub fn audit(&self, event: AuditEvent) {
        self.auditor.log(self.id, event);
    }
}
