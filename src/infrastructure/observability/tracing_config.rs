/// Log output settings derived from the runtime environment.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
}

impl TracingConfig {
    /// Json output everywhere except local development; `LOG_FORMAT` wins
    /// when set.
    pub fn for_environment(environment: &str) -> Self {
        let json_default = !environment.eq_ignore_ascii_case("local");
        let json_format = match std::env::var("LOG_FORMAT") {
            Ok(value) => value.to_lowercase() == "json",
            Err(_) => json_default,
        };

        Self {
            environment: environment.to_string(),
            json_format,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::for_environment(
            &std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
        )
    }
}
