use serde::{Deserialize, Serialize};

/// One institution's submission of a series for one period.
///
/// Reports within the same (series, institution) pair are ordered by
/// `id`: the "previous report" is the one with the largest identifier
/// strictly below the current report's. The historical evaluator relies
/// on that ordering contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub series_id: i64,
    pub institution_id: i64,
}

impl Report {
    pub fn new(id: i64, series_id: i64, institution_id: i64) -> Self {
        Self {
            id,
            series_id,
            institution_id,
        }
    }
}
