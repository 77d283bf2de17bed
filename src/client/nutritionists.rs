//! Nutritionist endpoints

use super::client::ApiClient;
use super::request::resource_path;
use crate::config::Validate;
use crate::models::{
    AssignedPatient, MealPlanFilter, MealPlanStatus, NutritionistDashboardStats,
    NutritionistProfile, NutritionistProfileUpdate, Page, ProgressReport, UserStatus, defaults,
};
use crate::utils::error::Result;
use tracing::debug;

/// `/nutritionists/*`, nutritionist role only
#[derive(Debug, Clone, Copy)]
pub struct Nutritionists<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn nutritionists(&self) -> Nutritionists<'_> {
        Nutritionists { client: self }
    }
}

impl Nutritionists<'_> {
    pub async fn get_profile(&self) -> Result<NutritionistProfile> {
        self.client.get("/nutritionists/profile", Vec::new()).await
    }

    pub async fn update_profile(
        &self,
        update: &NutritionistProfileUpdate,
    ) -> Result<NutritionistProfile> {
        update.validate()?;
        self.client.put("/nutritionists/profile", update).await
    }

    /// Patients with an active assignment to the caller
    pub async fn patients(&self, page: Page) -> Result<Vec<AssignedPatient>> {
        self.client
            .get("/nutritionists/patients", page.to_query())
            .await
    }

    pub async fn patient_progress(
        &self,
        patient_id: &str,
        page: Page,
    ) -> Result<Vec<ProgressReport>> {
        let path = resource_path(&["nutritionists", "patients", patient_id, "progress"])?;
        self.client.get(&path, page.to_query()).await
    }

    /// Dashboard figures built from the first page of patients and meal plans
    pub async fn dashboard_stats(&self) -> Result<NutritionistDashboardStats> {
        let patients = self.patients(defaults::PATIENTS).await?;
        let plans = self
            .client
            .meal_plans()
            .list(&MealPlanFilter::default(), defaults::MEAL_PLANS)
            .await?;

        let count_status =
            |status: MealPlanStatus| plans.iter().filter(|p| p.status == status).count();

        let stats = NutritionistDashboardStats {
            total_patients: patients.len(),
            active_patients: patients
                .iter()
                .filter(|p| p.status == UserStatus::Active)
                .count(),
            total_meal_plans: plans.len(),
            published_meal_plans: count_status(MealPlanStatus::Published),
            draft_meal_plans: count_status(MealPlanStatus::Draft),
        };
        debug!("Dashboard stats: {:?}", stats);
        Ok(stats)
    }
}
