use clap::Parser;
use url::Url;

/// Show recent public GitHub activity for a user
#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Args {
    /// GitHub username to look up
    pub username: Option<String>,

    /// GitHub API URL (https://api.github.com as default)
    #[clap(long)]
    pub github_api_url: Option<Url>,
}
