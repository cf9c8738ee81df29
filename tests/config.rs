#[cfg(test)]
mod tests {
    use std::time::Duration;
    use taskman::libs::config::{Config, DatabaseConfig, DisplayConfig, CONFIG_FILE_NAME};
    use taskman::libs::formatter::DEFAULT_DATE_FORMAT;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_reads_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.database().busy_timeout(), Duration::from_millis(5000));
        assert_eq!(config.display().date_format, DEFAULT_DATE_FORMAT);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_back(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join(CONFIG_FILE_NAME);
        let config = Config {
            database: Some(DatabaseConfig {
                path: Some("/tmp/work.db".to_string()),
                busy_timeout_ms: 250,
            }),
            display: Some(DisplayConfig {
                date_format: "%Y-%m-%d".to_string(),
                timestamp_format: "%F %R".to_string(),
                description_width: 30,
            }),
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::read_from(&path).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_database_section_uses_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "database": { "path": "tasks.db" } }"#).unwrap();

        let config = Config::read_from(&path).unwrap();
        assert_eq!(config.database().path.as_deref(), Some("tasks.db"));
        assert_eq!(config.database().busy_timeout_ms, 5000);
        assert_eq!(config.display(), DisplayConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();

        assert!(Config::read_from(&path).is_err());
    }
}

#[cfg(test)]
mod data_storage_tests {
    use taskman::libs::data_storage::DataStorage;

    #[test]
    fn test_get_path_creates_base_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let base = temp_dir.path().join("nested").join("taskman");

        let path = DataStorage::with_base(&base).get_path("taskman.db").unwrap();

        assert!(base.is_dir());
        assert_eq!(path, base.join("taskman.db"));
    }
}
