//! API server configuration.
//!
//! Populated by the server binary from its CLI arguments (each backed by an
//! environment variable).

/// Default TCP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind interface.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Configuration for the API server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:8080").
    pub bind_addr: String,
    /// Reject non-numeric user ids on chat lookup instead of falling back to 0.
    pub strict_user_id: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: format!("{DEFAULT_HOST}:{DEFAULT_PORT}"),
            strict_user_id: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_all_interfaces_on_8080() {
        let cfg = ApiConfig::default();
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080");
        assert!(!cfg.strict_user_id);
    }
}
