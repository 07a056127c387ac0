
use std::env;
use std::fmt;

const DEFAULT_REF: &str = "main";
const DEFAULT_API_URL: &str = "https://api.github.com";

// Read once per cold start. Missing values never fail the function, they only
// make the affected route reject or fail its dispatch.
#[derive(Clone, Default)]
pub struct BridgeConfig {
    pub secret_key: Option<String>,
    pub discord_public_key: String,
    pub repository: String,
    pub workflow: String,
    pub git_ref: String,
    pub token: String,
    pub api_url: String,
}

impl BridgeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());
        Self {
            secret_key: non_empty("SECRET_KEY"),
            discord_public_key: lookup("DISCORD_PUBLIC_KEY").unwrap_or_default(),
            repository: lookup("GH_REPO").unwrap_or_default(),
            workflow: lookup("GH_WORKFLOW").unwrap_or_default(),
            git_ref: non_empty("GH_REF").unwrap_or_else(|| DEFAULT_REF.into()),
            token: lookup("GH_TOKEN").unwrap_or_default(),
            api_url: non_empty("GH_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into()),
        }
    }

    // https://docs.github.com/en/rest/actions/workflows#create-a-workflow-dispatch-event
    pub fn dispatch_url(&self) -> String {
        format!(
            "{}/repos/{}/actions/workflows/{}/dispatches",
            self.api_url.trim_end_matches('/'),
            self.repository,
            self.workflow,
        )
    }
}

impl fmt::Debug for BridgeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeConfig")
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("discord_public_key", &"<redacted>")
            .field("repository", &self.repository)
            .field("workflow", &self.workflow)
            .field("git_ref", &self.git_ref)
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}
