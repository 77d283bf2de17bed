//! Configuration integration tests
//!
//! Configuration files on disk driving a real client.

#[cfg(test)]
mod tests {
    use crate::common::MockApi;
    use crate::common::fixtures::UserFactory;
    use nutricare_client::config::{ClientConfig, ENV_SESSION_FILE, SessionConfig};
    use nutricare_client::{AppContext, ClientError, FileStore, SessionStore};
    use nutricare_client::session::ACCESS_TOKEN_KEY;
    use std::io::Write;
    use std::path::Path;
    use tempfile::{NamedTempFile, TempDir};

    fn write_config(base_url: &str, session_file: &Path) -> NamedTempFile {
        let yaml = format!(
            "api:\n  base_url: \"{}\"\n  timeout: 5\nsession:\n  backend: file\n  path: \"{}\"\nlogging:\n  level: debug\n",
            base_url,
            session_file.display()
        );
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_shipped_example_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/nutricare.yaml.example");
        let config = ClientConfig::from_file(&path).await.unwrap();
        assert!(config.api.base_url.ends_with("/api/v1"));
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_file_session_survives_restart() {
        let api = MockApi::start().await;
        api.mount_login("a1", "r1").await;
        api.mount_me(&UserFactory::patient()).await;

        let dir = TempDir::new().unwrap();
        let session_file = dir.path().join("state/session.json");
        let config_file = write_config(&api.base_url(), &session_file);
        let config = ClientConfig::from_file(config_file.path()).await.unwrap();
        assert!(config.session.is_persistent());

        {
            let mut app = AppContext::from_config(&config).unwrap();
            app.bootstrap().await.unwrap();
            app.login("pat@example.com", "correct horse").await.unwrap();
        }
        assert!(session_file.exists());

        let store = FileStore::new(&session_file);
        assert_eq!(
            store.get(ACCESS_TOKEN_KEY).await.unwrap().as_deref(),
            Some("a1")
        );

        let mut restarted = AppContext::from_config(&config).unwrap();
        let user = restarted.bootstrap().await.unwrap();
        assert!(user.is_some());
        assert!(restarted.state().is_authenticated());
    }

    #[test]
    fn test_env_session_file_overrides_memory_backend() {
        let dir = TempDir::new().unwrap();
        let session_file = dir.path().join("session.json");
        let session_path = session_file.to_string_lossy().to_string();

        let config = ClientConfig::with_base_url("https://api.nutricare.test/api/v1")
            .with_env_overrides(|key| (key == ENV_SESSION_FILE).then(|| session_path.clone()))
            .unwrap();
        assert_eq!(config.session, SessionConfig::file(&session_file));
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_invalid_base_url_rejected_before_any_request() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"api:\n  base_url: \"localhost:8001/api/v1\"\n")
            .unwrap();

        let err = ClientConfig::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[tokio::test]
    async fn test_timeout_bounds() {
        for (timeout, ok) in [(0, false), (1, true), (600, true), (601, false)] {
            let mut file = NamedTempFile::new().unwrap();
            write!(file, "api:\n  timeout: {}\n", timeout).unwrap();
            let result = ClientConfig::from_file(file.path()).await;
            assert_eq!(result.is_ok(), ok, "timeout {}", timeout);
        }
    }

    #[tokio::test]
    async fn test_yaml_round_trip_through_disk() {
        let dir = TempDir::new().unwrap();
        let mut config = ClientConfig::with_base_url("https://api.nutricare.test/api/v1");
        config.session = SessionConfig::file(dir.path().join("session.json"));
        config.logging.json = true;

        let path = dir.path().join("nutricare.yaml");
        tokio::fs::write(&path, config.to_yaml().unwrap())
            .await
            .unwrap();

        let loaded = ClientConfig::from_file(&path).await.unwrap();
        assert_eq!(loaded, config);
    }
}
