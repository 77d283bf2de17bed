//! Limit/skip pagination

use serde::{Deserialize, Serialize};

/// `limit` / `skip` query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub limit: u32,
    pub skip: u32,
}

impl Page {
    pub const fn new(limit: u32, skip: u32) -> Self {
        Self { limit, skip }
    }

    pub const fn first(limit: u32) -> Self {
        Self { limit, skip: 0 }
    }

    /// The page after this one
    pub const fn next(self) -> Self {
        Self {
            limit: self.limit,
            skip: self.skip + self.limit,
        }
    }

    pub(crate) fn to_query(self) -> Vec<(&'static str, String)> {
        vec![
            ("limit", self.limit.to_string()),
            ("skip", self.skip.to_string()),
        ]
    }
}

/// Default page sizes used by the screens of each list
pub mod defaults {
    use super::Page;

    pub const PROGRESS: Page = Page::first(10);
    pub const SUBSCRIPTIONS: Page = Page::first(10);
    pub const PATIENTS: Page = Page::first(20);
    pub const MEAL_PLANS: Page = Page::first(20);
    pub const ASSIGNMENTS: Page = Page::first(20);
    pub const PENDING_NUTRITIONISTS: Page = Page::first(20);
    pub const ADMIN_USERS: Page = Page::first(50);
}
