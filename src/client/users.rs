//! Own account endpoints

use super::client::ApiClient;
use crate::config::Validate;
use crate::models::{User, UserUpdate};
use crate::utils::error::Result;

/// `/users/*`
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }
}

impl Users<'_> {
    pub async fn me(&self) -> Result<User> {
        self.client.get("/users/me", Vec::new()).await
    }

    pub async fn update_me(&self, update: &UserUpdate) -> Result<User> {
        update.validate()?;
        self.client.put("/users/me", update).await
    }
}
