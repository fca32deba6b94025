use chrono::Weekday;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_database: String,
    pub identity_grpc_endpoint: String,
    pub identity_timeout_ms: u64,
    pub identity_decode_cache_ttl_ms: u64,
    pub notification_grpc_endpoint: String,
    pub notification_timeout_ms: u64,
    pub mail_from_address: String,
    pub report_base_url: String,
    pub report_token_secret: String,
    pub report_weekday: Weekday,
    pub report_hour_utc: u32,
    pub weekly_report_scheduler_enabled: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            postgres_host: std::env::var("POSTGRES_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            postgres_port: std::env::var("POSTGRES_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .unwrap_or(5432),
            postgres_user: std::env::var("POSTGRES_USER")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_password: std::env::var("POSTGRES_PASSWORD")
                .unwrap_or_else(|_| "admin".to_string()),
            postgres_database: std::env::var("POSTGRES_DATABASE")
                .unwrap_or_else(|_| "education".to_string()),
            identity_grpc_endpoint: std::env::var("IDENTITY_GRPC_ENDPOINT")
                .unwrap_or_else(|_| "http://127.0.0.1:50051".to_string()),
            identity_timeout_ms: std::env::var("IDENTITY_TIMEOUT_MS")
                .unwrap_or_else(|_| "2000".to_string())
                .parse()
                .unwrap_or(2000),
            identity_decode_cache_ttl_ms: std::env::var("IDENTITY_DECODE_CACHE_TTL_MS")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
            notification_grpc_endpoint: std::env::var("NOTIFICATION_GRPC_ENDPOINT")
                .unwrap_or_else(|_| "http://127.0.0.1:50052".to_string()),
            notification_timeout_ms: std::env::var("NOTIFICATION_TIMEOUT_MS")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
            mail_from_address: std::env::var("MAIL_FROM_ADDRESS")
                .unwrap_or_else(|_| "no-reply@plataforma.edu".to_string()),
            report_base_url: std::env::var("REPORT_BASE_URL")
                .unwrap_or_else(|_| "https://plataforma.edu".to_string()),
            report_token_secret: std::env::var("REPORT_TOKEN_SECRET")
                .unwrap_or_else(|_| "cambia-este-secreto".to_string()),
            report_weekday: std::env::var("REPORT_WEEKDAY")
                .unwrap_or_else(|_| "mon".to_string())
                .parse()
                .unwrap_or(Weekday::Mon),
            report_hour_utc: std::env::var("REPORT_HOUR_UTC")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .unwrap_or(7),
            weekly_report_scheduler_enabled: std::env::var("WEEKLY_REPORT_SCHEDULER_ENABLED")
                .map(|value| value.eq_ignore_ascii_case("true"))
                .unwrap_or(true),
        }
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_database
        )
    }
}
