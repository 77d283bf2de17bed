//! Meal plan types

use super::timestamp;
use super::validation::{check_len, check_non_negative, check_range};
use crate::config::Validate;
use crate::utils::error::{ClientError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealPlanStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl std::str::FromStr for MealPlanStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(MealPlanStatus::Draft),
            "published" => Ok(MealPlanStatus::Published),
            "archived" => Ok(MealPlanStatus::Archived),
            _ => Err(format!("Invalid meal plan status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub meal_type: MealType,
    pub title: String,
    pub calories: u32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Validate for Meal {
    fn validate(&self) -> Result<()> {
        check_len("title", &self.title, 1, 100)?;
        check_non_negative("protein_g", self.protein_g)?;
        check_non_negative("carbs_g", self.carbs_g)?;
        check_non_negative("fat_g", self.fat_g)?;
        Ok(())
    }
}

/// Meals for one weekday; 0 is Monday, 6 is Sunday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day_of_week: u8,
    #[serde(default)]
    pub meals: Vec<Meal>,
}

impl Validate for DayPlan {
    fn validate(&self) -> Result<()> {
        check_range("day_of_week", self.day_of_week, 0, 6)?;
        for meal in &self.meals {
            meal.validate()?;
        }
        Ok(())
    }
}

/// Calorie and macro totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: u64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl MacroTotals {
    pub fn of_days(days: &[DayPlan]) -> Self {
        days.iter()
            .flat_map(|day| day.meals.iter())
            .fold(Self::default(), |mut acc, meal| {
                acc.calories += u64::from(meal.calories);
                acc.protein_g += meal.protein_g;
                acc.carbs_g += meal.carbs_g;
                acc.fat_g += meal.fat_g;
                acc
            })
    }
}

/// Full meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub id: String,
    pub patient_id: String,
    pub nutritionist_id: String,
    pub week_start: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: MealPlanStatus,
    #[serde(default)]
    pub days: Vec<DayPlan>,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MealPlan {
    pub fn totals(&self) -> MacroTotals {
        MacroTotals::of_days(&self.days)
    }

    /// Meals for a weekday (0 = Monday)
    pub fn day(&self, day_of_week: u8) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.day_of_week == day_of_week)
    }
}

/// Body of `POST /meal-plans`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanCreate {
    pub patient_id: String,
    pub nutritionist_id: String,
    pub week_start: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: MealPlanStatus,
    pub days: Vec<DayPlan>,
}

fn validate_days(days: &[DayPlan]) -> Result<()> {
    let mut seen = [false; 7];
    for day in days {
        day.validate()?;
        let slot = &mut seen[usize::from(day.day_of_week)];
        if *slot {
            return Err(ClientError::validation(format!(
                "day_of_week {} appears more than once",
                day.day_of_week
            )));
        }
        *slot = true;
    }
    Ok(())
}

impl Validate for MealPlanCreate {
    fn validate(&self) -> Result<()> {
        if self.patient_id.trim().is_empty() {
            return Err(ClientError::validation("patient_id is required"));
        }
        if self.nutritionist_id.trim().is_empty() {
            return Err(ClientError::validation("nutritionist_id is required"));
        }
        validate_days(&self.days)
    }
}

/// Body of `PUT /meal-plans/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlanUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MealPlanStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<DayPlan>>,
}

impl Validate for MealPlanUpdate {
    fn validate(&self) -> Result<()> {
        match &self.days {
            Some(days) => validate_days(days),
            None => Ok(()),
        }
    }
}

/// One row of `GET /meal-plans`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanSummary {
    pub id: String,
    pub patient_id: String,
    pub nutritionist_id: String,
    pub week_start: NaiveDate,
    pub status: MealPlanStatus,
    pub total_calories: u64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
}

/// Optional filters for `GET /meal-plans`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealPlanFilter {
    pub patient_id: Option<String>,
}
