use serde::{Deserialize, Serialize};

/// Which slice of the catalogue to request from the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    /// Every listing (`GET /Properties`)
    All,
    /// Listings owned by one landlord (`GET /Properties/Landlord/{id}`)
    Landlord(i64),
}

impl Scope {
    pub fn path(&self) -> String {
        match self {
            Scope::All => "/Properties".to_string(),
            Scope::Landlord(id) => format!("/Properties/Landlord/{}", id),
        }
    }
}

/// Connection parameters for the rental REST API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiParams {
    /// Base URL, e.g. `http://localhost:5000/api`
    pub base_url: String,
    pub scope: Scope,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ApiParams {
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.scope.path())
    }
}

impl Default for ApiParams {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            scope: Scope::All,
            timeout_secs: 30,
        }
    }
}
