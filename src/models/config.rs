use serde::Deserialize;

/// Runtime configuration loaded from `config.yaml` and the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_address: String,
    /// Key material for signing the session cookie.
    pub secret_key: String,
    pub media: MediaConfig,
}

/// Where uploaded media lands and how it is served back.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaConfig {
    /// Directory served statically under `base_url`.
    pub root: String,
    /// Public prefix uploads are addressed by, e.g. `http://localhost:8080/media`.
    pub base_url: String,
    /// Logical folder hint inside the root.
    pub folder: String,
}
