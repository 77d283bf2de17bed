//! Meal plan endpoints

use super::client::ApiClient;
use super::request::resource_path;
use crate::config::Validate;
use crate::models::{
    MealPlan, MealPlanCreate, MealPlanFilter, MealPlanSummary, MealPlanUpdate, Page,
};
use crate::utils::error::Result;

/// `/meal-plans/*`
#[derive(Debug, Clone, Copy)]
pub struct MealPlans<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn meal_plans(&self) -> MealPlans<'_> {
        MealPlans { client: self }
    }
}

impl MealPlans<'_> {
    pub async fn create(&self, plan: &MealPlanCreate) -> Result<MealPlan> {
        plan.validate()?;
        self.client.post("/meal-plans", plan).await
    }

    pub async fn update(&self, id: &str, update: &MealPlanUpdate) -> Result<MealPlan> {
        update.validate()?;
        let path = resource_path(&["meal-plans", id])?;
        self.client.put(&path, update).await
    }

    pub async fn list(&self, filter: &MealPlanFilter, page: Page) -> Result<Vec<MealPlanSummary>> {
        let mut query = Vec::new();
        if let Some(patient_id) = &filter.patient_id {
            query.push(("patient_id", patient_id.clone()));
        }
        query.extend(page.to_query());
        self.client.get("/meal-plans", query).await
    }

    pub async fn get(&self, id: &str) -> Result<MealPlan> {
        let path = resource_path(&["meal-plans", id])?;
        self.client.get(&path, Vec::new()).await
    }
}
