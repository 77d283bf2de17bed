//! Weekly progress report types

use super::timestamp;
use super::validation::{check_positive_max, check_range};
use crate::config::Validate;
use crate::utils::error::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub id: String,
    pub patient_id: String,
    pub week_start: NaiveDate,
    pub weight_kg: f64,
    #[serde(default)]
    pub waist_cm: Option<f64>,
    #[serde(default)]
    pub photos: Vec<String>,
    pub adherence_pct: u8,
    pub energy_levels: u8,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /patients/progress`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReportCreate {
    pub patient_id: String,
    pub week_start: NaiveDate,
    pub weight_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
    #[serde(default)]
    pub photos: Vec<String>,
    pub adherence_pct: u8,
    pub energy_levels: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Validate for ProgressReportCreate {
    fn validate(&self) -> Result<()> {
        check_positive_max("weight_kg", self.weight_kg, 500.0)?;
        if let Some(waist) = self.waist_cm {
            check_positive_max("waist_cm", waist, 200.0)?;
        }
        check_range("adherence_pct", self.adherence_pct, 0, 100)?;
        check_range("energy_levels", self.energy_levels, 1, 10)?;
        Ok(())
    }
}

/// Weight trend for one patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub patient_id: String,
    pub start_weight: f64,
    pub current_weight: f64,
    pub total_weight_lost: f64,
    pub total_weeks: u32,
    pub average_weekly_loss: f64,
    #[serde(default)]
    pub last_report_date: Option<NaiveDate>,
}
