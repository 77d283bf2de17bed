//! Admin-only views

use super::timestamp;
use super::user::{UserRole, UserStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GET /admin/metrics`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformMetrics {
    pub users: UserMetrics,
    pub subscriptions: SubscriptionMetrics,
    pub meal_plans: MealPlanMetrics,
    pub progress: ProgressMetrics,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetrics {
    pub total_patients: u64,
    pub total_nutritionists: u64,
    pub total_admins: u64,
    pub recent_signups_30d: u64,
}

impl UserMetrics {
    pub fn total(&self) -> u64 {
        self.total_patients + self.total_nutritionists + self.total_admins
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionMetrics {
    pub active_subscriptions: u64,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanMetrics {
    pub total_meal_plans: u64,
    pub published_meal_plans: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressMetrics {
    pub total_progress_reports: u64,
}

/// Nutritionist profile awaiting verification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingNutritionist {
    pub user_id: String,
    pub email: String,
    pub registration_no: String,
    pub qualifications: String,
    pub years_experience: u32,
    pub rate_week_inr: f64,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Optional filters for `GET /admin/users`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

impl UserFilter {
    pub fn role(role: UserRole) -> Self {
        Self {
            role: Some(role),
            status: None,
        }
    }

    pub(crate) fn to_query(self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(role) = self.role {
            query.push(("role", role.as_str().to_string()));
        }
        if let Some(status) = self.status {
            query.push(("status", status.as_str().to_string()));
        }
        query
    }
}
