use chrono_tz::Tz;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub event_store_url: String,
    pub event_store_write_url: Option<String>,
    pub event_store_token: Option<String>,
    pub admin_pin: String,
    pub timezone: Tz,
    pub event_refresh_secs: u64,
    pub whatsapp_number: String,
    pub store_name: String,
}

pub const MIN_PIN_LENGTH: usize = 4;

/// Where the JSON log file rolls. Read before `Config` so that config
/// panics are logged too.
#[derive(Clone, Debug)]
pub struct LogConfig {
    pub dir: String,
    pub file_prefix: String,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self {
            dir: env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()),
            file_prefix: env::var("LOG_FILE").unwrap_or_else(|_| "storefront.log".to_string()),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let admin_pin = env::var("ADMIN_PIN").expect("ADMIN_PIN must be set");
        if admin_pin.trim().chars().count() < MIN_PIN_LENGTH {
            panic!("ADMIN_PIN must be at least {} characters", MIN_PIN_LENGTH);
        }

        Self {
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            event_store_url: env::var("EVENT_STORE_URL").unwrap_or_else(|_| "./data/events.json".to_string()),
            event_store_write_url: env::var("EVENT_STORE_WRITE_URL").ok(),
            event_store_token: env::var("EVENT_STORE_TOKEN").ok(),
            admin_pin,
            timezone: env::var("STORE_TIMEZONE")
                .unwrap_or_else(|_| "Asia/Kolkata".to_string())
                .parse()
                .expect("STORE_TIMEZONE must be an IANA time zone"),
            event_refresh_secs: env::var("EVENT_REFRESH_SECS").unwrap_or_else(|_| "60".to_string()).parse().expect("EVENT_REFRESH_SECS must be a number"),
            whatsapp_number: env::var("WHATSAPP_NUMBER").unwrap_or_else(|_| "919526689880".to_string()),
            store_name: env::var("STORE_NAME").unwrap_or_else(|_| "Hamper World".to_string()),
        }
    }
}
