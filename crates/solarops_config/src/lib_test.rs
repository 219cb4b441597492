#[cfg(test)]
mod tests {
    use crate::{load_config_from, CorruptStorePolicy};
    use std::fs;
    use tempfile::TempDir;

    fn write_default(dir: &TempDir, body: &str) {
        fs::write(dir.path().join("default.toml"), body).expect("write default.toml");
    }

    #[test]
    fn test_load_config_from_default_file() {
        let dir = TempDir::new().unwrap();
        write_default(
            &dir,
            r#"
use_calendar = true

[server]
host = "127.0.0.1"
port = 8080

[calendar]
time_zone = "America/Los_Angeles"
business_start_hour = 7
business_end_hour = 21
store_path = "calendar.json"
"#,
        );

        let config = load_config_from(dir.path(), "debug", "SOLAROPS_TEST_DEFAULT").unwrap();

        assert_eq!(config.server.port, 8080);
        assert!(config.server.cors_origins.is_empty());
        assert!(config.use_calendar);
        let calendar = config.calendar.expect("calendar section");
        assert_eq!(calendar.time_zone.as_deref(), Some("America/Los_Angeles"));
        assert_eq!(calendar.business_start_hour, Some(7));
        assert_eq!(calendar.business_end_hour, Some(21));
        assert_eq!(calendar.on_corrupt, CorruptStorePolicy::TreatAsEmpty);
        assert!(config.logging.is_none());
    }

    #[test]
    fn test_run_env_file_overrides_default() {
        let dir = TempDir::new().unwrap();
        write_default(
            &dir,
            "[server]\nhost = \"127.0.0.1\"\nport = 8080\n",
        );
        fs::write(
            dir.path().join("release.toml"),
            "[server]\nport = 80\n\n[calendar]\non_corrupt = \"fail\"\n",
        )
        .unwrap();

        let config = load_config_from(dir.path(), "release", "SOLAROPS_TEST_RUN_ENV").unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 80);
        assert_eq!(
            config.calendar.map(|c| c.on_corrupt),
            Some(CorruptStorePolicy::Fail)
        );
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        write_default(
            &dir,
            "[server]\nhost = \"127.0.0.1\"\nport = 8080\n",
        );
        // Unique prefix so parallel tests do not observe each other's variables
        std::env::set_var("SOLAROPS_TEST_ENV__SERVER__PORT", "9123");

        let config = load_config_from(dir.path(), "debug", "SOLAROPS_TEST_ENV").unwrap();

        assert_eq!(config.server.port, 9123);
        std::env::remove_var("SOLAROPS_TEST_ENV__SERVER__PORT");
    }

    #[test]
    fn test_missing_server_section_is_an_error() {
        let dir = TempDir::new().unwrap();
        write_default(&dir, "use_calendar = true\n");

        let result = load_config_from(dir.path(), "debug", "SOLAROPS_TEST_MISSING");

        assert!(result.is_err(), "server section is mandatory");
    }
}
