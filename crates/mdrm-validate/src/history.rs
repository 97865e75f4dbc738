use std::collections::BTreeMap;

use mdrm_model::{MdrmId, Report};

/// A prior report together with its submitted values.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorReport {
    pub report: Report,
    pub values: BTreeMap<MdrmId, String>,
}

/// Ordered report lookup by (series, institution).
///
/// The storage layer owns report persistence; the engine only needs this
/// one read: the report with the largest identifier strictly below the
/// current one, for the same series and institution. Absence means a
/// first-ever submission, which historical rules treat as vacuously valid.
pub trait ReportHistory {
    fn previous_report(
        &self,
        series_id: i64,
        institution_id: i64,
        before_report_id: i64,
    ) -> Option<PriorReport>;
}

/// In-memory implementation of [`ReportHistory`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    reports: Vec<PriorReport>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, report: Report, values: BTreeMap<MdrmId, String>) {
        self.reports.push(PriorReport { report, values });
    }
}

impl ReportHistory for InMemoryHistory {
    fn previous_report(
        &self,
        series_id: i64,
        institution_id: i64,
        before_report_id: i64,
    ) -> Option<PriorReport> {
        self.reports
            .iter()
            .filter(|prior| {
                prior.report.series_id == series_id
                    && prior.report.institution_id == institution_id
                    && prior.report.id < before_report_id
            })
            .max_by_key(|prior| prior.report.id)
            .cloned()
    }
}
