use crate::domain::model::Guest;
use crate::domain::ports::GuestSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;

/// Reads the guest list from a CSV file with `name` and `phone` columns.
pub struct CsvGuestSource {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct GuestRow {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    phone: Option<String>,
}

impl CsvGuestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl GuestSource for CsvGuestSource {
    async fn load_guests(&self) -> Result<Vec<Guest>> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut guests = Vec::new();

        for row in reader.deserialize() {
            let row: GuestRow = row?;
            let name = row.name.as_deref().map(str::trim).unwrap_or("");
            let phone = row.phone.as_deref().map(str::trim).unwrap_or("");

            // Rows missing either field are dropped silently
            if name.is_empty() || phone.is_empty() {
                continue;
            }

            guests.push(Guest {
                name: name.to_string(),
                phone: phone.to_string(),
            });
        }

        tracing::info!("Loaded {} guests from {}", guests.len(), self.path.display());
        Ok(guests)
    }
}
