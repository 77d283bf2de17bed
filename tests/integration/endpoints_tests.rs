//! Endpoint group integration tests
//!
//! Paths, query parameters and payload shapes sent by the typed groups.

#[cfg(test)]
mod tests {
    use crate::common::MockApi;
    use crate::common::fixtures::{self, UserFactory};
    use chrono::NaiveDate;
    use nutricare_client::models::{
        AssignmentFilter, AssignmentUpdate, MealPlanFilter, MealPlanStatus, Page, PaymentOrder,
        ProgressReportCreate, UserFilter, UserRole, UserStatus, UserUpdate, defaults,
    };
    use nutricare_client::{ClientError, MemoryStore};
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn test_signup_stores_tokens_and_sends_json() {
        let api = MockApi::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/signup"))
            .and(body_json(json!({
                "email": "new@example.com",
                "phone": "9876543210",
                "role": "nutritionist",
                "password": "longenough"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::tokens("a1", "r1")))
            .expect(1)
            .mount(&api.server)
            .await;

        let client = api.client(Arc::new(MemoryStore::new()));
        let request = nutricare_client::models::SignupRequest {
            email: "new@example.com".to_string(),
            phone: "9876543210".to_string(),
            role: UserRole::Nutritionist,
            password: "longenough".to_string(),
        };
        client.auth().signup(&request).await.unwrap();
        assert!(client.session().is_authenticated().await.unwrap());
    }

    #[tokio::test]
    async fn test_signup_conflict_is_not_renewed() {
        let api = MockApi::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/signup"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(fixtures::detail("Email already registered")),
            )
            .mount(&api.server)
            .await;
        api.mount_refresh(ResponseTemplate::new(200), 0).await;

        let client = api.client(Arc::new(MemoryStore::new()));
        let request = nutricare_client::models::SignupRequest {
            email: "taken@example.com".to_string(),
            phone: "9876543210".to_string(),
            role: UserRole::Patient,
            password: "longenough".to_string(),
        };
        let err = client.auth().signup(&request).await.unwrap_err();
        assert_eq!(err.user_message(), "Email already registered");
    }

    #[tokio::test]
    async fn test_current_meal_plan_totals() {
        let api = MockApi::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/patients/current-plan"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixtures::meal_plan("m1", "published")),
            )
            .mount(&api.server)
            .await;

        let client = api.client_with_tokens("a1", "r1").await;
        let plan = client.patients().current_meal_plan().await.unwrap();
        assert_eq!(plan.status, MealPlanStatus::Published);
        let totals = plan.totals();
        assert_eq!(totals.calories, 1310);
        assert!((totals.protein_g - 66.0).abs() < 1e-9);
        assert_eq!(plan.day(1).map(|d| d.meals.len()), Some(1));
    }

    #[tokio::test]
    async fn test_progress_report_validated_before_sending() {
        let api = MockApi::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/patients/progress"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(fixtures::progress_report("2024-06-03", 70.4)),
            )
            .expect(1)
            .mount(&api.server)
            .await;

        let client = api.client_with_tokens("a1", "r1").await;
        let mut report = ProgressReportCreate {
            patient_id: "p1".to_string(),
            week_start: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            weight_kg: 70.4,
            waist_cm: None,
            photos: vec![],
            adherence_pct: 80,
            energy_levels: 11,
            notes: None,
        };
        let err = client
            .patients()
            .create_progress_report(&report)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(ref m) if m.contains("energy_levels")));

        report.energy_levels = 7;
        let saved = client
            .patients()
            .create_progress_report(&report)
            .await
            .unwrap();
        assert!((saved.weight_kg - 70.4).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_nutritionist_dashboard_stats() {
        let api = MockApi::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/nutritionists/patients"))
            .and(query_param("limit", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                fixtures::assigned_patient("active"),
                fixtures::assigned_patient("active"),
                fixtures::assigned_patient("suspended"),
            ])))
            .mount(&api.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/meal-plans"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                fixtures::meal_plan_summary("m1", "published"),
                fixtures::meal_plan_summary("m2", "draft"),
                fixtures::meal_plan_summary("m3", "draft"),
                fixtures::meal_plan_summary("m4", "archived"),
            ])))
            .mount(&api.server)
            .await;

        let client = api.client_with_tokens("a1", "r1").await;
        let stats = client.nutritionists().dashboard_stats().await.unwrap();
        assert_eq!(stats.total_patients, 3);
        assert_eq!(stats.active_patients, 2);
        assert_eq!(stats.total_meal_plans, 4);
        assert_eq!(stats.published_meal_plans, 1);
        assert_eq!(stats.draft_meal_plans, 2);
    }

    #[tokio::test]
    async fn test_meal_plan_filter_sent_only_when_present() {
        let api = MockApi::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/meal-plans"))
            .and(query_param("patient_id", "p1"))
            .and(query_param("skip", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                fixtures::meal_plan_summary("m1", "published")
            ])))
            .expect(1)
            .mount(&api.server)
            .await;

        let client = api.client_with_tokens("a1", "r1").await;
        let filter = MealPlanFilter {
            patient_id: Some("p1".to_string()),
        };
        let rows = client
            .meal_plans()
            .list(&filter, defaults::MEAL_PLANS.next())
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_assignment_lifecycle() {
        let api = MockApi::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/assignments"))
            .and(body_partial_json(json!({"patient_id": "p1", "nutritionist_id": "n1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::assignment("a1", true)))
            .expect(1)
            .mount(&api.server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/assignments/a1"))
            .and(body_partial_json(json!({"active": false})))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::assignment("a1", false)))
            .expect(1)
            .mount(&api.server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/assignments/a1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": "Assignment deleted successfully"})),
            )
            .expect(1)
            .mount(&api.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/assignments"))
            .and(query_param("nutritionist_id", "n1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([fixtures::assignment("a1", true)])),
            )
            .expect(1)
            .mount(&api.server)
            .await;

        let client = api.client_with_tokens("a1", "r1").await;
        let assignments = client.assignments();

        let created = assignments
            .create(&nutricare_client::models::AssignmentCreate::starting_now("p1", "n1"))
            .await
            .unwrap();
        assert!(created.active);

        let filter = AssignmentFilter {
            nutritionist_id: Some("n1".to_string()),
            ..Default::default()
        };
        assert_eq!(assignments.list(&filter, Page::first(20)).await.unwrap().len(), 1);

        let ended = assignments
            .update("a1", &AssignmentUpdate::end_now())
            .await
            .unwrap();
        assert!(!ended.active);

        let deleted = assignments.delete("a1").await.unwrap();
        assert_eq!(deleted.message, "Assignment deleted successfully");
    }

    #[tokio::test]
    async fn test_admin_user_management() {
        let api = MockApi::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/admin/users"))
            .and(query_param("role", "nutritionist"))
            .and(query_param("limit", "50"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([UserFactory::nutritionist()])),
            )
            .expect(1)
            .mount(&api.server)
            .await;
        let mut suspended = UserFactory::patient();
        suspended["status"] = json!("suspended");
        Mock::given(method("PUT"))
            .and(path("/api/v1/admin/users/u9"))
            .and(body_json(json!({"status": "suspended"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(suspended))
            .expect(1)
            .mount(&api.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/admin/nutritionists/n1/verify"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": "Nutritionist verified successfully"})),
            )
            .expect(1)
            .mount(&api.server)
            .await;

        let client = api.client_with_tokens("a1", "r1").await;
        let admin = client.admin();

        let users = admin
            .users(UserFilter::role(UserRole::Nutritionist), defaults::ADMIN_USERS)
            .await
            .unwrap();
        assert_eq!(users[0].role, UserRole::Nutritionist);

        let user = admin
            .update_user("u9", &UserUpdate::status(UserStatus::Suspended))
            .await
            .unwrap();
        assert!(!user.is_active());

        let verified = admin.verify_nutritionist("n1").await.unwrap();
        assert!(verified.message.contains("verified"));
    }

    #[tokio::test]
    async fn test_forbidden_maps_to_error() {
        let api = MockApi::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/admin/metrics"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(fixtures::detail("Not enough permissions")),
            )
            .mount(&api.server)
            .await;

        let client = api.client_with_tokens("a1", "r1").await;
        let err = client.admin().metrics().await.unwrap_err();
        assert!(matches!(err, ClientError::Forbidden(_)));
        assert_eq!(err.status(), Some(403));
    }

    #[tokio::test]
    async fn test_payment_order() {
        let api = MockApi::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/subscriptions/create-order"))
            .and(body_json(json!({"amount": 2999.0, "currency": "INR", "receipt": "rcpt-7"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "order_id": "order_123",
                "amount": 2999.0,
                "currency": "INR",
                "payment_url": "https://payments.example.com/order_123"
            })))
            .expect(1)
            .mount(&api.server)
            .await;

        let client = api.client_with_tokens("a1", "r1").await;
        let response = client
            .subscriptions()
            .create_order(&PaymentOrder::inr(2999.0, "rcpt-7"))
            .await
            .unwrap();
        assert_eq!(response.order_id, "order_123");
    }

    #[tokio::test]
    async fn test_progress_summary() {
        let api = MockApi::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/progress/summary/p1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "patient_id": "p1",
                "start_weight": 76.0,
                "current_weight": 71.0,
                "total_weight_lost": 5.0,
                "total_weeks": 6,
                "average_weekly_loss": 0.83,
                "last_report_date": "2024-06-03"
            })))
            .mount(&api.server)
            .await;

        let client = api.client_with_tokens("a1", "r1").await;
        let summary = client.progress().summary("p1").await.unwrap();
        assert_eq!(summary.total_weeks, 6);
        assert_eq!(
            summary.last_report_date,
            NaiveDate::from_ymd_opt(2024, 6, 3)
        );
    }
}
