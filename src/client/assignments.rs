//! Assignment endpoints, admin role only

use super::client::ApiClient;
use super::request::resource_path;
use crate::config::Validate;
use crate::models::{
    Assignment, AssignmentCreate, AssignmentFilter, AssignmentUpdate, MessageResponse, Page,
};
use crate::utils::error::Result;

/// `/assignments/*`
#[derive(Debug, Clone, Copy)]
pub struct Assignments<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn assignments(&self) -> Assignments<'_> {
        Assignments { client: self }
    }
}

impl Assignments<'_> {
    pub async fn create(&self, assignment: &AssignmentCreate) -> Result<Assignment> {
        assignment.validate()?;
        self.client.post("/assignments", assignment).await
    }

    pub async fn list(&self, filter: &AssignmentFilter, page: Page) -> Result<Vec<Assignment>> {
        let mut query = filter.to_query();
        query.extend(page.to_query());
        self.client.get("/assignments", query).await
    }

    pub async fn update(&self, id: &str, update: &AssignmentUpdate) -> Result<Assignment> {
        update.validate()?;
        let path = resource_path(&["assignments", id])?;
        self.client.put(&path, update).await
    }

    pub async fn delete(&self, id: &str) -> Result<MessageResponse> {
        let path = resource_path(&["assignments", id])?;
        self.client.delete(&path).await
    }
}
