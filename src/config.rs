use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub upload_folder: PathBuf,
    /// Seconds a generated document stays downloadable
    pub delete_delay_secs: u64,
    pub max_content_length: usize,
    pub log_level: String,
    /// Ceiling applied to a request's copy count
    pub max_copy_count: u32,
    // QR rendering
    pub qr_box_size: u32,
    pub qr_border: u32,
    // Preview cache
    pub qr_cache_ttl_secs: u64,
    pub cache_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            upload_folder: PathBuf::from("uploads"),
            delete_delay_secs: 600,
            max_content_length: 16 * 1024 * 1024,
            log_level: "info".to_string(),
            max_copy_count: crate::application::use_cases::DEFAULT_MAX_COPIES,
            qr_box_size: 10,
            qr_border: 2,
            qr_cache_ttl_secs: 600,
            cache_enabled: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            upload_folder: std::env::var("UPLOAD_FOLDER")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_folder),
            delete_delay_secs: std::env::var("DELETE_DELAY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.delete_delay_secs),
            max_content_length: std::env::var("MAX_CONTENT_LENGTH")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_content_length),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            max_copy_count: std::env::var("MAX_COPY_COUNT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_copy_count),
            qr_box_size: std::env::var("QR_BOX_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.qr_box_size),
            qr_border: std::env::var("QR_BORDER")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.qr_border),
            qr_cache_ttl_secs: std::env::var("QR_CACHE_TTL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.qr_cache_ttl_secs),
            cache_enabled: std::env::var("CACHE_ENABLED")
                .ok()
                .and_then(|s| parse_flag(&s))
                .unwrap_or(defaults.cache_enabled),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.listen_addr.is_empty() {
            return Err("LISTEN_ADDR cannot be empty".to_string());
        }

        if self.upload_folder.as_os_str().is_empty() {
            return Err("UPLOAD_FOLDER cannot be empty".to_string());
        }

        if self.delete_delay_secs < 60 {
            return Err("DELETE_DELAY must be at least 60 seconds".to_string());
        }

        if self.max_content_length == 0 {
            return Err("MAX_CONTENT_LENGTH must be greater than 0".to_string());
        }

        if self.max_copy_count == 0 {
            return Err("MAX_COPY_COUNT must be greater than 0".to_string());
        }

        if self.qr_box_size == 0 {
            return Err("QR_BOX_SIZE must be greater than 0".to_string());
        }

        if self.qr_cache_ttl_secs < 60 {
            return Err("QR_CACHE_TTL must be at least 60 seconds".to_string());
        }

        Ok(())
    }

    pub fn delete_delay(&self) -> Duration {
        Duration::from_secs(self.delete_delay_secs)
    }

    pub fn qr_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.qr_cache_ttl_secs)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.listen_addr, "0.0.0.0:5000");
        assert_eq!(config.max_content_length, 16_777_216);
        assert_eq!(config.delete_delay(), Duration::from_secs(600));
    }

    #[test]
    fn test_short_delays_rejected() {
        let config = Config {
            delete_delay_secs: 30,
            ..Config::default()
        };
        assert!(config.validate().unwrap_err().contains("DELETE_DELAY"));

        let config = Config {
            qr_cache_ttl_secs: 59,
            ..Config::default()
        };
        assert!(config.validate().unwrap_err().contains("QR_CACHE_TTL"));
    }

    #[test]
    fn test_zero_copy_ceiling_rejected() {
        assert_eq!(Config::default().max_copy_count, 100);

        let config = Config {
            max_copy_count: 0,
            ..Config::default()
        };
        assert!(config.validate().unwrap_err().contains("MAX_COPY_COUNT"));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("True"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
