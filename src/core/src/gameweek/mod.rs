use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One scheduling period. `simulated` is a one-way flag: once an upstream
/// result feed has produced final scores for the week it can never flip
/// back, and everything gated on it (transfers, captain changes, squad
/// creation) stays locked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gameweek {
    pub code: String,
    pub number: u8,
    pub start_date: NaiveDate,
    pub simulated: bool,
    pub transfers_open: bool,
}

impl Gameweek {
    pub fn new(code: String, number: u8, start_date: NaiveDate) -> Self {
        Gameweek {
            code,
            number,
            start_date,
            simulated: false,
            transfers_open: true,
        }
    }

    pub fn is_window_open(&self) -> bool {
        !self.simulated && self.transfers_open
    }

    /// Marks the week as scored and closes its transfer window.
    pub fn finalize(&mut self) {
        self.simulated = true;
        self.transfers_open = false;
    }
}
