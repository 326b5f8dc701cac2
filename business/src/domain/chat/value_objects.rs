use serde::{Deserialize, Serialize};

/// Placeholder secret sent when no credentials are supplied.
///
/// This is a development convenience only. Anything shipped to production must
/// pass real [`Credentials`]; the client logs a warning whenever this value is used.
pub const DEVELOPMENT_SECRET_KEY: &str = "Marinara";

/// Deployment target. Fixes the base URL for every request a client sends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Production,
    Staging,
    Development,
}

impl Environment {
    pub const ALL: [Environment; 3] = [
        Environment::Production,
        Environment::Staging,
        Environment::Development,
    ];

    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://www.pizzagpt.it",
            Environment::Staging => "https://staging.pizzagpt.it",
            Environment::Development => "https://dev.pizzagpt.it",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Staging => write!(f, "staging"),
            Environment::Development => write!(f, "development"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(Environment::Production),
            "staging" => Ok(Environment::Staging),
            "development" => Ok(Environment::Development),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}

/// Server-side operation a request targets, expressed as a path suffix under `/api/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ChatCompletion,
}

impl Endpoint {
    pub const ALL: [Endpoint; 1] = [Endpoint::ChatCompletion];

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::ChatCompletion => "chatx-completion",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Secret and origin sent with every request for authentication and allow-listing.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    secret_key: String,
    origin: String,
}

impl Credentials {
    pub fn new(secret_key: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            origin: origin.into(),
        }
    }

    /// Credentials used when the caller supplies none: the placeholder secret and
    /// the environment's own base URL as origin.
    pub fn development_default(environment: Environment) -> Self {
        Self::new(DEVELOPMENT_SECRET_KEY, environment.base_url())
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn is_development_default(&self) -> bool {
        self.secret_key == DEVELOPMENT_SECRET_KEY
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("secret_key", &"<redacted>")
            .field("origin", &self.origin)
            .finish()
    }
}
