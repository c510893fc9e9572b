use dotenvy::dotenv;
use lazy_static::lazy_static;
use secrecy::Secret;
use std::env as std_env;

lazy_static! {
    pub static ref DATABASE_URL: Secret<String> = Secret::new(
        load_or_default(env::DATABASE_URL_ENV_VAR, DEFAULT_DATABASE_URL)
    );
    pub static ref APP_ADDRESS: String =
        load_or_default(env::APP_ADDRESS_ENV_VAR, prod::APP_ADDRESS);
    pub static ref CLIENT_BUILD_DIR: Option<String> =
        load_optional(env::CLIENT_BUILD_DIR_ENV_VAR);
}

fn load_env() {
    dotenv().ok();
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_optional(variable_name).unwrap_or_else(|| String::from(default_value))
}

fn load_optional(variable_name: &str) -> Option<String> {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

pub mod env {
    pub const APP_ADDRESS_ENV_VAR: &str = "APP_ADDRESS";
    pub const CLIENT_BUILD_DIR_ENV_VAR: &str = "CLIENT_BUILD_DIR";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
}

pub const DEFAULT_DATABASE_URL: &str = "sqlite:database.db";
pub const MAX_DB_CONNECTIONS: u32 = 5;

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3001";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
