//! Subscription and payment endpoints

use super::client::ApiClient;
use crate::config::Validate;
use crate::models::{Page, PaymentOrder, PaymentResponse, Subscription, SubscriptionCreate};
use crate::utils::error::Result;

/// `/subscriptions/*`
#[derive(Debug, Clone, Copy)]
pub struct Subscriptions<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions { client: self }
    }
}

impl Subscriptions<'_> {
    pub async fn create_order(&self, order: &PaymentOrder) -> Result<PaymentResponse> {
        order.validate()?;
        self.client.post("/subscriptions/create-order", order).await
    }

    pub async fn create(&self, subscription: &SubscriptionCreate) -> Result<Subscription> {
        subscription.validate()?;
        self.client.post("/subscriptions", subscription).await
    }

    pub async fn list(&self, page: Page) -> Result<Vec<Subscription>> {
        self.client.get("/subscriptions", page.to_query()).await
    }

    /// Active subscription; `NotFound` when there is none
    pub async fn current(&self) -> Result<Subscription> {
        self.client.get("/subscriptions/current", Vec::new()).await
    }
}
