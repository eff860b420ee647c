use serde::{Deserialize, Serialize};

/// One invitation recipient, loaded from the guest list file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    pub phone: String,
}

/// Outcome counts for one full run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub loaded: usize,
    pub sent: usize,
    pub failed: usize,
}
