//! Patient profile types

use super::validation::{check_len, check_positive_max};
use crate::config::Validate;
use crate::utils::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    Veg,
    NonVeg,
    Vegan,
    Keto,
    Paleo,
}

/// Stored patient profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub id: String,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub height_cm: f64,
    pub start_weight_kg: f64,
    pub gender: Gender,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub dietary_prefs: Vec<DietaryPreference>,
    #[serde(default)]
    pub medical_notes: Option<String>,
}

impl PatientProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body of `POST /patients/profile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfileCreate {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub height_cm: f64,
    pub start_weight_kg: f64,
    pub gender: Gender,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub dietary_prefs: Vec<DietaryPreference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_notes: Option<String>,
}

impl Validate for PatientProfileCreate {
    fn validate(&self) -> Result<()> {
        check_len("first_name", &self.first_name, 1, 50)?;
        check_len("last_name", &self.last_name, 1, 50)?;
        check_positive_max("height_cm", self.height_cm, 300.0)?;
        check_positive_max("start_weight_kg", self.start_weight_kg, 500.0)?;
        Ok(())
    }
}

/// Body of `PUT /patients/profile`; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_prefs: Option<Vec<DietaryPreference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_notes: Option<String>,
}

impl Validate for PatientProfileUpdate {
    fn validate(&self) -> Result<()> {
        if let Some(v) = &self.first_name {
            check_len("first_name", v, 1, 50)?;
        }
        if let Some(v) = &self.last_name {
            check_len("last_name", v, 1, 50)?;
        }
        if let Some(v) = self.height_cm {
            check_positive_max("height_cm", v, 300.0)?;
        }
        if let Some(v) = self.start_weight_kg {
            check_positive_max("start_weight_kg", v, 500.0)?;
        }
        Ok(())
    }
}
