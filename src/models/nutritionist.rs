//! Nutritionist profile and roster types

use super::timestamp;
use super::validation::{check_len, check_min_len, check_positive, check_range};
use super::user::UserStatus;
use crate::config::Validate;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored nutritionist profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionistProfile {
    pub id: String,
    pub user_id: String,
    pub registration_no: String,
    pub qualifications: String,
    pub years_experience: u32,
    pub bio: String,
    pub rate_week_inr: f64,
    #[serde(default)]
    pub verified: bool,
}

/// Body of `PUT /nutritionists/profile`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionistProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_week_inr: Option<f64>,
}

impl Validate for NutritionistProfileUpdate {
    fn validate(&self) -> Result<()> {
        if let Some(v) = &self.registration_no {
            check_len("registration_no", v, 1, 50)?;
        }
        if let Some(v) = &self.qualifications {
            check_min_len("qualifications", v, 1)?;
        }
        if let Some(v) = self.years_experience {
            check_range("years_experience", v, 0, 50)?;
        }
        if let Some(v) = &self.bio {
            check_len("bio", v, 10, 1000)?;
        }
        if let Some(v) = self.rate_week_inr {
            check_positive("rate_week_inr", v)?;
        }
        Ok(())
    }
}

/// One row of `GET /nutritionists/patients`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedPatient {
    pub assignment_id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub patient_email: String,
    #[serde(with = "timestamp")]
    pub start_date: DateTime<Utc>,
    pub current_weight: f64,
    pub status: UserStatus,
}

/// Figures shown on the nutritionist dashboard, aggregated client-side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionistDashboardStats {
    pub total_patients: usize,
    pub active_patients: usize,
    pub total_meal_plans: usize,
    pub published_meal_plans: usize,
    pub draft_meal_plans: usize,
}
