//! Patient self-service endpoints

use super::client::ApiClient;
use crate::config::Validate;
use crate::models::{
    MealPlan, Page, PatientProfile, PatientProfileCreate, PatientProfileUpdate, ProgressReport,
    ProgressReportCreate,
};
use crate::utils::error::Result;

/// `/patients/*`, patient role only
#[derive(Debug, Clone, Copy)]
pub struct Patients<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn patients(&self) -> Patients<'_> {
        Patients { client: self }
    }
}

impl Patients<'_> {
    pub async fn get_profile(&self) -> Result<PatientProfile> {
        self.client.get("/patients/profile", Vec::new()).await
    }

    pub async fn create_profile(&self, profile: &PatientProfileCreate) -> Result<PatientProfile> {
        profile.validate()?;
        self.client.post("/patients/profile", profile).await
    }

    pub async fn update_profile(&self, update: &PatientProfileUpdate) -> Result<PatientProfile> {
        update.validate()?;
        self.client.put("/patients/profile", update).await
    }

    /// Latest published plan; `NotFound` when none exists
    pub async fn current_meal_plan(&self) -> Result<MealPlan> {
        self.client.get("/patients/current-plan", Vec::new()).await
    }

    pub async fn create_progress_report(
        &self,
        report: &ProgressReportCreate,
    ) -> Result<ProgressReport> {
        report.validate()?;
        self.client.post("/patients/progress", report).await
    }

    pub async fn progress_reports(&self, page: Page) -> Result<Vec<ProgressReport>> {
        self.client.get("/patients/progress", page.to_query()).await
    }
}
