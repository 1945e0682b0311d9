//! Build-time configuration for the posts page

/// Public REST source used when no override is compiled in
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Employee shown when the selector value can't be parsed
pub const FALLBACK_EMPLOYEE_ID: u32 = 1;

pub const SELECT_MENU_ID: &str = "selectMenu";
pub const POST_CONTAINER_TAG: &str = "main";

#[derive(Clone, Debug, PartialEq)]
pub struct GatewayConfig {
    pub base_url: String,
}

impl GatewayConfig {
    /// Reads `EMPLOYEE_POSTS_API_URL` at compile time. The browser has no
    /// process environment, so the override has to be baked into the bundle.
    pub fn from_build_env() -> Self {
        Self::with_override(option_env!("EMPLOYEE_POSTS_API_URL"))
    }

    fn with_override(base_url: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);

        Self {
            base_url: base_url.to_string(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::with_override(None)
    }
}
