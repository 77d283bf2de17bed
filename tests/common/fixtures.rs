//! Test fixtures and data factories
//!
//! Factories return the JSON the API would send, so tests exercise the
//! real deserialisation path.

use serde_json::{Value, json};
use uuid::Uuid;

fn short_id() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_string()
}

/// Factory for `/auth/me` payloads
pub struct UserFactory;

impl UserFactory {
    pub fn with_role(role: &str) -> Value {
        let id = short_id();
        json!({
            "id": id,
            "email": format!("{}-{}@example.com", role, &id[..6]),
            "phone": "9876543210",
            "role": role,
            "status": "active",
            "created_at": "2024-05-01T08:30:00.000000",
            "updated_at": "2024-05-01T08:30:00.000000"
        })
    }

    pub fn patient() -> Value {
        Self::with_role("patient")
    }

    pub fn nutritionist() -> Value {
        Self::with_role("nutritionist")
    }

    pub fn admin() -> Value {
        Self::with_role("admin")
    }
}

/// Token pair payload
pub fn tokens(access: &str, refresh: &str) -> Value {
    json!({
        "access_token": access,
        "refresh_token": refresh,
        "token_type": "bearer"
    })
}

/// FastAPI style error body
pub fn detail(message: &str) -> Value {
    json!({ "detail": message })
}

pub fn meal_plan(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "patient_id": "p1",
        "nutritionist_id": "n1",
        "week_start": "2024-06-03",
        "notes": "High protein week",
        "status": status,
        "days": [
            {
                "day_of_week": 0,
                "meals": [
                    {"meal_type": "breakfast", "title": "Besan chilla", "calories": 320, "protein_g": 18, "carbs_g": 30, "fat_g": 12},
                    {"meal_type": "lunch", "title": "Dal and rice", "calories": 540, "protein_g": 20, "carbs_g": 85, "fat_g": 10}
                ]
            },
            {
                "day_of_week": 1,
                "meals": [
                    {"meal_type": "dinner", "title": "Paneer tikka", "calories": 450, "protein_g": 28, "carbs_g": 12, "fat_g": 30, "notes": "Less oil"}
                ]
            }
        ],
        "created_at": "2024-06-01T09:00:00",
        "updated_at": "2024-06-01T09:00:00"
    })
}

pub fn meal_plan_summary(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "patient_id": "p1",
        "nutritionist_id": "n1",
        "week_start": "2024-06-03",
        "status": status,
        "total_calories": 1310,
        "total_protein": 66.0,
        "total_carbs": 127.0,
        "total_fat": 52.0
    })
}

pub fn assigned_patient(status: &str) -> Value {
    json!({
        "assignment_id": short_id(),
        "patient_id": short_id(),
        "patient_name": "Asha Rao",
        "patient_email": "asha@example.com",
        "start_date": "2024-05-20T00:00:00",
        "current_weight": 72.4,
        "status": status
    })
}

pub fn progress_report(week_start: &str, weight: f64) -> Value {
    json!({
        "id": short_id(),
        "patient_id": "p1",
        "week_start": week_start,
        "weight_kg": weight,
        "waist_cm": null,
        "photos": [],
        "adherence_pct": 80,
        "energy_levels": 7,
        "notes": null
    })
}

pub fn assignment(id: &str, active: bool) -> Value {
    json!({
        "id": id,
        "patient_id": "p1",
        "nutritionist_id": "n1",
        "start_date": "2024-05-20T00:00:00",
        "end_date": null,
        "active": active,
        "notes": null,
        "created_at": "2024-05-20T10:00:00.000000",
        "updated_at": "2024-05-20T10:00:00.000000"
    })
}
