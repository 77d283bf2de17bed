//! Subscriptions and payment orders

use super::timestamp;
use super::validation::check_positive;
use crate::config::Validate;
use crate::utils::error::{ClientError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionPlan {
    Weekly,
    Monthly,
    Consult,
}

impl std::str::FromStr for SubscriptionPlan {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(SubscriptionPlan::Weekly),
            "monthly" => Ok(SubscriptionPlan::Monthly),
            "consult" => Ok(SubscriptionPlan::Consult),
            _ => Err(format!("Invalid subscription plan: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    Expired,
    #[default]
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub user_id: String,
    pub plan: SubscriptionPlan,
    pub price_inr: f64,
    #[serde(default)]
    pub status: SubscriptionStatus,
    #[serde(with = "timestamp")]
    pub current_period_start: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub current_period_end: DateTime<Utc>,
    #[serde(default)]
    pub gateway_customer_id: Option<String>,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.status == SubscriptionStatus::Active
    }
}

/// Body of `POST /subscriptions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionCreate {
    pub user_id: String,
    pub plan: SubscriptionPlan,
    pub price_inr: f64,
    #[serde(default)]
    pub status: SubscriptionStatus,
    #[serde(with = "timestamp")]
    pub current_period_start: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub current_period_end: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_customer_id: Option<String>,
}

impl Validate for SubscriptionCreate {
    fn validate(&self) -> Result<()> {
        check_positive("price_inr", self.price_inr)?;
        if self.current_period_end <= self.current_period_start {
            return Err(ClientError::validation(
                "current_period_end must be after current_period_start",
            ));
        }
        Ok(())
    }
}

fn default_currency() -> String {
    "INR".to_string()
}

/// Body of `POST /subscriptions/create-order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOrder {
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub receipt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PaymentOrder {
    pub fn inr(amount: f64, receipt: impl Into<String>) -> Self {
        Self {
            amount,
            currency: default_currency(),
            receipt: receipt.into(),
            notes: None,
        }
    }
}

impl Validate for PaymentOrder {
    fn validate(&self) -> Result<()> {
        check_positive("amount", self.amount)?;
        if self.receipt.trim().is_empty() {
            return Err(ClientError::validation("receipt is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub order_id: String,
    pub amount: f64,
    pub currency: String,
    pub payment_url: String,
}
