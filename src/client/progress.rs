//! Progress report endpoints

use super::client::ApiClient;
use super::request::resource_path;
use crate::models::{Page, ProgressReport, ProgressSummary};
use crate::utils::error::Result;

/// `/progress/*`
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn progress(&self) -> Progress<'_> {
        Progress { client: self }
    }
}

impl Progress<'_> {
    /// Reports visible to the caller, optionally for one patient
    pub async fn reports(&self, patient_id: Option<&str>, page: Page) -> Result<Vec<ProgressReport>> {
        let mut query = Vec::new();
        if let Some(id) = patient_id {
            query.push(("patient_id", id.to_string()));
        }
        query.extend(page.to_query());
        self.client.get("/progress", query).await
    }

    pub async fn summary(&self, patient_id: &str) -> Result<ProgressSummary> {
        let path = resource_path(&["progress", "summary", patient_id])?;
        self.client.get(&path, Vec::new()).await
    }
}
