//! Client configuration

/// Default API prefix; the dev server proxies it to the backend.
pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every request path is appended to
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Config with the build-time `LIBTASK_API_BASE` override applied.
    pub fn from_build_env() -> Self {
        match option_env!("LIBTASK_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::new(base.trim()),
            _ => Self::default(),
        }
    }

    pub fn is_relative(&self) -> bool {
        !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://"))
    }

    /// Prefix a relative base with an origin such as `https://libtask.example`.
    pub fn with_origin(self, origin: &str) -> Self {
        if !self.is_relative() {
            return self;
        }
        let origin = origin.trim_end_matches('/');
        let base = self.api_base.trim_start_matches('/');
        Self::new(format!("{}/{}", origin, base))
    }

    /// Join a request path onto the base.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
