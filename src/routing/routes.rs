//! Route table

use crate::models::UserRole;
use std::fmt;

/// Screens of the nutritionist area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NutritionistPage {
    Home,
    Profile,
    Patients,
    MealPlans,
    Progress,
}

/// Screens of the admin area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminPage {
    Home,
    Users,
    Nutritionists,
    Assignments,
    Metrics,
}

/// A known screen
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Signup,
    /// `/`, always forwarded to the dashboard
    Root,
    /// `/dashboard`, forwarded to the role home
    Dashboard,
    /// Anything under `/patient`; the field is the rest of the path, empty
    /// for the patient home
    Patient(String),
    Nutritionist(NutritionistPage),
    Admin(AdminPage),
}

const ALL_ROLES: &[UserRole] = &UserRole::ALL;
const PATIENT_ONLY: &[UserRole] = &[UserRole::Patient];
const NUTRITIONIST_ONLY: &[UserRole] = &[UserRole::Nutritionist];
const ADMIN_ONLY: &[UserRole] = &[UserRole::Admin];

impl Route {
    /// Parse a path; `None` for unknown paths
    ///
    /// Query strings, fragments and trailing slashes are ignored.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        if !path.starts_with('/') {
            return None;
        }

        let route = match segments.as_slice() {
            [] => Self::Root,
            ["login"] => Self::Login,
            ["signup"] => Self::Signup,
            ["dashboard"] => Self::Dashboard,
            ["patient", rest @ ..] => Self::Patient(rest.join("/")),
            ["nutritionist"] => Self::Nutritionist(NutritionistPage::Home),
            ["nutritionist", "profile"] => Self::Nutritionist(NutritionistPage::Profile),
            ["nutritionist", "patients"] => Self::Nutritionist(NutritionistPage::Patients),
            ["nutritionist", "meal-plans"] => Self::Nutritionist(NutritionistPage::MealPlans),
            ["nutritionist", "progress"] => Self::Nutritionist(NutritionistPage::Progress),
            ["admin"] => Self::Admin(AdminPage::Home),
            ["admin", "users"] => Self::Admin(AdminPage::Users),
            ["admin", "nutritionists"] => Self::Admin(AdminPage::Nutritionists),
            ["admin", "assignments"] => Self::Admin(AdminPage::Assignments),
            ["admin", "metrics"] => Self::Admin(AdminPage::Metrics),
            _ => return None,
        };
        Some(route)
    }

    /// Canonical path
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Signup => "/signup".to_string(),
            Self::Root => "/".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Patient(rest) if rest.is_empty() => "/patient".to_string(),
            Self::Patient(rest) => format!("/patient/{}", rest),
            Self::Nutritionist(page) => match page {
                NutritionistPage::Home => "/nutritionist",
                NutritionistPage::Profile => "/nutritionist/profile",
                NutritionistPage::Patients => "/nutritionist/patients",
                NutritionistPage::MealPlans => "/nutritionist/meal-plans",
                NutritionistPage::Progress => "/nutritionist/progress",
            }
            .to_string(),
            Self::Admin(page) => match page {
                AdminPage::Home => "/admin",
                AdminPage::Users => "/admin/users",
                AdminPage::Nutritionists => "/admin/nutritionists",
                AdminPage::Assignments => "/admin/assignments",
                AdminPage::Metrics => "/admin/metrics",
            }
            .to_string(),
        }
    }

    /// Roles allowed to see this screen; `None` for the public screens
    pub fn allowed_roles(&self) -> Option<&'static [UserRole]> {
        match self {
            Self::Login | Self::Signup => None,
            Self::Root | Self::Dashboard => Some(ALL_ROLES),
            Self::Patient(_) => Some(PATIENT_ONLY),
            Self::Nutritionist(_) => Some(NUTRITIONIST_ONLY),
            Self::Admin(_) => Some(ADMIN_ONLY),
        }
    }

    pub fn is_public(&self) -> bool {
        self.allowed_roles().is_none()
    }

    pub fn allows(&self, role: UserRole) -> bool {
        self.allowed_roles()
            .is_none_or(|roles| roles.contains(&role))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
