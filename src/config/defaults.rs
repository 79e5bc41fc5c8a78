pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: i64 = 3000;
pub const DEFAULT_SITE_NAME: &str = "Mon Projet";
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_RUST_LOG: &str = "info,tower_http=info";
pub const DEFAULT_DB_MAX_CONNECTIONS: i64 = 10;
pub const DEFAULT_DB_MIN_IDLE: i64 = 2;
pub const DEFAULT_CONTACT_MAX_MESSAGE_LEN: i64 = 5000;
pub const DEFAULT_CONTACT_EMAIL: &str = "contact@monprojet.com";
pub const DEFAULT_CONTACT_PHONE: &str = "+33 1 23 45 67 89";
