//! Platform administration endpoints

use super::client::ApiClient;
use super::request::{ApiRequest, resource_path};
use crate::config::Validate;
use crate::models::{
    MessageResponse, Page, PendingNutritionist, PlatformMetrics, User, UserFilter, UserUpdate,
};
use crate::utils::error::Result;

/// `/admin/*`
#[derive(Debug, Clone, Copy)]
pub struct Admin<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn admin(&self) -> Admin<'_> {
        Admin { client: self }
    }
}

impl Admin<'_> {
    pub async fn users(&self, filter: UserFilter, page: Page) -> Result<Vec<User>> {
        let mut query = filter.to_query();
        query.extend(page.to_query());
        self.client.get("/admin/users", query).await
    }

    pub async fn update_user(&self, user_id: &str, update: &UserUpdate) -> Result<User> {
        update.validate()?;
        let path = resource_path(&["admin", "users", user_id])?;
        self.client.put(&path, update).await
    }

    /// Mark the nutritionist profile of `user_id` as verified
    pub async fn verify_nutritionist(&self, user_id: &str) -> Result<MessageResponse> {
        let path = resource_path(&["admin", "nutritionists", user_id, "verify"])?;
        self.client.execute(ApiRequest::post(path)).await
    }

    pub async fn metrics(&self) -> Result<PlatformMetrics> {
        self.client.get("/admin/metrics", Vec::new()).await
    }

    pub async fn pending_nutritionists(&self, page: Page) -> Result<Vec<PendingNutritionist>> {
        self.client
            .get("/admin/nutritionists/pending", page.to_query())
            .await
    }
}
