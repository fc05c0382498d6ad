use url::Url;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Malformed GitHub API URL: '{0}'. Make sure you entered a valid HTTP(S) URL.")]
    MalformedApiUrl(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    github_api_url: Url,
}

impl Config {
    pub fn new(github_api_url: Url) -> Self {
        Self { github_api_url }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let github_api_url = match env_to_str("GHA_GITHUB_API_URL") {
            Some(value) => parse_api_url(&value)?,
            None => parse_api_url(DEFAULT_GITHUB_API_URL)?,
        };

        Ok(Self { github_api_url })
    }

    pub fn github_api_url(&self) -> &Url {
        &self.github_api_url
    }

    pub fn set_github_api_url(&mut self, value: Url) {
        self.github_api_url = value;
    }

    pub fn validate_configuration(&self) -> Result<(), ConfigError> {
        // The events path is appended as URL segments, which needs a base URL.
        if self.github_api_url.cannot_be_a_base() {
            return Err(ConfigError::MalformedApiUrl(self.github_api_url.to_string()));
        }

        Ok(())
    }
}

fn env_to_str(env_key: &str) -> Option<String> {
    std::env::var(env_key).ok().filter(|s| !s.is_empty())
}

fn parse_api_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|_| ConfigError::MalformedApiUrl(value.to_owned()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::MalformedApiUrl(value.to_owned()));
    }

    Ok(url)
}
