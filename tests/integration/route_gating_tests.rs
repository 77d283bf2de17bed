//! Route gating through the application context
//!
//! Each role is signed in against the mock API and walked over every
//! screen, checking where navigation finally lands.

#[cfg(test)]
mod tests {
    use crate::common::MockApi;
    use crate::common::fixtures::UserFactory;
    use nutricare_client::models::UserRole;
    use nutricare_client::routing::{AdminPage, GuardOutcome, NutritionistPage, Route, home_for};
    use nutricare_client::{AppContext, MemoryStore};
    use serde_json::Value;
    use std::sync::Arc;

    const ALL_PATHS: &[&str] = &[
        "/patient",
        "/patient/profile",
        "/patient/meal-plans",
        "/patient/progress",
        "/nutritionist",
        "/nutritionist/profile",
        "/nutritionist/patients",
        "/nutritionist/meal-plans",
        "/nutritionist/progress",
        "/admin",
        "/admin/users",
        "/admin/nutritionists",
        "/admin/assignments",
        "/admin/metrics",
    ];

    fn fixture_for(role: UserRole) -> Value {
        match role {
            UserRole::Patient => UserFactory::patient(),
            UserRole::Nutritionist => UserFactory::nutritionist(),
            UserRole::Admin => UserFactory::admin(),
        }
    }

    fn namespace(role: UserRole) -> &'static str {
        match role {
            UserRole::Patient => "/patient",
            UserRole::Nutritionist => "/nutritionist",
            UserRole::Admin => "/admin",
        }
    }

    async fn signed_in(api: &MockApi, role: UserRole) -> AppContext {
        api.mount_me(&fixture_for(role)).await;
        let mut app = api.context_with_tokens("a1", "r1").await;
        let user = app.bootstrap().await.unwrap();
        assert_eq!(user.map(|u| u.role), Some(role));
        app
    }

    #[tokio::test]
    async fn test_every_role_against_every_screen() {
        for role in UserRole::ALL {
            let api = MockApi::start().await;
            let mut app = signed_in(&api, role).await;

            for path in ALL_PATHS {
                let nav = app.navigate(path).unwrap();
                let own = path.starts_with(namespace(role));
                if own {
                    assert_eq!(
                        nav.rendered().map(Route::path).as_deref(),
                        Some(*path),
                        "{} should open {}",
                        role,
                        path
                    );
                    assert!(!nav.was_redirected());
                } else {
                    assert_eq!(
                        nav.redirects,
                        vec![Route::Dashboard, home_for(role)],
                        "{} should be sent home from {}",
                        role,
                        path
                    );
                    assert_eq!(nav.rendered(), Some(&home_for(role)));
                }
            }
        }
    }

    #[tokio::test]
    async fn test_anonymous_user_lands_on_login() {
        let api = MockApi::start().await;
        let mut app = AppContext::new(api.client(Arc::new(MemoryStore::new())));
        assert!(app.bootstrap().await.unwrap().is_none());

        for path in ALL_PATHS.iter().chain(["/", "/dashboard"].iter()) {
            let nav = app.navigate(path).unwrap();
            assert_eq!(nav.rendered(), Some(&Route::Login), "{}", path);
        }

        let nav = app.navigate("/signup").unwrap();
        assert_eq!(nav.rendered(), Some(&Route::Signup));
        assert!(!nav.was_redirected());
    }

    #[tokio::test]
    async fn test_signed_in_user_skips_public_screens() {
        let api = MockApi::start().await;
        let mut app = signed_in(&api, UserRole::Nutritionist).await;

        for path in ["/login", "/signup", "/", "/dashboard"] {
            let nav = app.navigate(path).unwrap();
            assert_eq!(
                nav.rendered(),
                Some(&Route::Nutritionist(NutritionistPage::Home)),
                "{}",
                path
            );
        }
    }

    #[tokio::test]
    async fn test_screens_wait_for_bootstrap() {
        let api = MockApi::start().await;
        let mut app = api.context_with_tokens("a1", "r1").await;

        let nav = app.navigate("/admin").unwrap();
        assert_eq!(nav.outcome, GuardOutcome::Loading);
        assert!(nav.rendered().is_none());

        let nav = app.navigate("/login").unwrap();
        assert_eq!(nav.rendered(), Some(&Route::Login));
    }

    #[tokio::test]
    async fn test_unknown_paths_are_not_found() {
        let api = MockApi::start().await;
        let mut app = signed_in(&api, UserRole::Admin).await;

        for path in ["/admin/settings", "/nutritionists", "/reports", "admin"] {
            let nav = app.navigate(path).unwrap();
            assert_eq!(nav.outcome, GuardOutcome::NotFound, "{}", path);
        }

        let nav = app.navigate("/admin/metrics/?tab=users").unwrap();
        assert_eq!(nav.rendered(), Some(&Route::Admin(AdminPage::Metrics)));
    }

    #[tokio::test]
    async fn test_menu_items_open_for_their_role() {
        for role in UserRole::ALL {
            let api = MockApi::start().await;
            let mut app = signed_in(&api, role).await;

            let menu = app.menu();
            assert!(!menu.is_empty());
            assert_eq!(menu[0].label, "Dashboard");
            for item in menu {
                let nav = app.navigate(item.path).unwrap();
                assert_eq!(nav.rendered(), item.route().as_ref(), "{}", item.label);
                assert!(!nav.was_redirected(), "{}", item.label);
            }
        }
    }

    #[tokio::test]
    async fn test_menu_empty_after_logout() {
        let api = MockApi::start().await;
        let mut app = signed_in(&api, UserRole::Patient).await;
        assert_eq!(app.menu().len(), 4);

        app.logout().await.unwrap();
        assert!(app.menu().is_empty());
        let nav = app.navigate("/patient").unwrap();
        assert_eq!(nav.rendered(), Some(&Route::Login));
    }
}
