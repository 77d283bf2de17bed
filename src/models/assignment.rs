//! Patient/nutritionist assignments

use super::timestamp;
use crate::config::Validate;
use crate::utils::error::{ClientError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub patient_id: String,
    pub nutritionist_id: String,
    #[serde(with = "timestamp")]
    pub start_date: DateTime<Utc>,
    #[serde(default, with = "timestamp::option")]
    pub end_date: Option<DateTime<Utc>>,
    pub active: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /assignments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentCreate {
    pub patient_id: String,
    pub nutritionist_id: String,
    #[serde(with = "timestamp")]
    pub start_date: DateTime<Utc>,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AssignmentCreate {
    /// Assignment starting now with no end date
    pub fn starting_now(patient_id: impl Into<String>, nutritionist_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            nutritionist_id: nutritionist_id.into(),
            start_date: Utc::now(),
            end_date: None,
            notes: None,
        }
    }
}

impl Validate for AssignmentCreate {
    fn validate(&self) -> Result<()> {
        if self.patient_id.trim().is_empty() {
            return Err(ClientError::validation("patient_id is required"));
        }
        if self.nutritionist_id.trim().is_empty() {
            return Err(ClientError::validation("nutritionist_id is required"));
        }
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(ClientError::validation(
                    "end_date must not be before start_date",
                ));
            }
        }
        Ok(())
    }
}

/// Body of `PUT /assignments/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentUpdate {
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AssignmentUpdate {
    /// Deactivate and stamp the end date
    pub fn end_now() -> Self {
        Self {
            end_date: Some(Utc::now()),
            active: Some(false),
            notes: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end_date.is_none() && self.active.is_none() && self.notes.is_none()
    }
}

impl Validate for AssignmentUpdate {
    fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(ClientError::validation("assignment update has no fields"));
        }
        Ok(())
    }
}

/// Optional filters for `GET /assignments`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentFilter {
    pub patient_id: Option<String>,
    pub nutritionist_id: Option<String>,
    pub active: Option<bool>,
}

impl AssignmentFilter {
    pub fn active_only() -> Self {
        Self {
            active: Some(true),
            ..Self::default()
        }
    }

    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(id) = &self.patient_id {
            query.push(("patient_id", id.clone()));
        }
        if let Some(id) = &self.nutritionist_id {
            query.push(("nutritionist_id", id.clone()));
        }
        if let Some(active) = self.active {
            query.push(("active", active.to_string()));
        }
        query
    }
}
