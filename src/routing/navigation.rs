//! Role homes and menus

use super::routes::{AdminPage, NutritionistPage, Route};
use crate::models::UserRole;

/// One entry of the side menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavItem {
    const fn new(label: &'static str, path: &'static str) -> Self {
        Self { label, path }
    }

    pub fn route(&self) -> Option<Route> {
        Route::parse(self.path)
    }
}

const PATIENT_MENU: &[NavItem] = &[
    NavItem::new("Dashboard", "/patient"),
    NavItem::new("My Profile", "/patient/profile"),
    NavItem::new("Meal Plans", "/patient/meal-plans"),
    NavItem::new("Progress", "/patient/progress"),
];

const NUTRITIONIST_MENU: &[NavItem] = &[
    NavItem::new("Dashboard", "/nutritionist"),
    NavItem::new("My Profile", "/nutritionist/profile"),
    NavItem::new("My Patients", "/nutritionist/patients"),
    NavItem::new("Meal Plans", "/nutritionist/meal-plans"),
    NavItem::new("Progress Reports", "/nutritionist/progress"),
];

const ADMIN_MENU: &[NavItem] = &[
    NavItem::new("Dashboard", "/admin"),
    NavItem::new("Users", "/admin/users"),
    NavItem::new("Nutritionists", "/admin/nutritionists"),
    NavItem::new("Assignments", "/admin/assignments"),
    NavItem::new("Metrics", "/admin/metrics"),
];

/// Where `/dashboard` sends each role
pub fn home_for(role: UserRole) -> Route {
    match role {
        UserRole::Patient => Route::Patient(String::new()),
        UserRole::Nutritionist => Route::Nutritionist(NutritionistPage::Home),
        UserRole::Admin => Route::Admin(AdminPage::Home),
    }
}

pub fn menu_for(role: UserRole) -> &'static [NavItem] {
    match role {
        UserRole::Patient => PATIENT_MENU,
        UserRole::Nutritionist => NUTRITIONIST_MENU,
        UserRole::Admin => ADMIN_MENU,
    }
}
