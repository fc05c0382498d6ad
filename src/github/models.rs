use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct Repository {
    pub name: String,
}

/// Only the number of commits is used; their contents stay untyped.
#[derive(Debug, Deserialize)]
pub struct PushPayload {
    pub commits: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ActionPayload {
    pub action: String,
}

/// One activity record from the events API, keyed by its `type` tag.
/// Tags outside the known set are kept as [`Event::Unknown`] with the raw tag.
#[derive(Debug)]
pub enum Event {
    Push {
        repo: Repository,
        payload: PushPayload,
    },
    Issues {
        repo: Repository,
        payload: ActionPayload,
    },
    Watch {
        repo: Repository,
    },
    Create {
        repo: Repository,
    },
    Fork {
        repo: Repository,
    },
    PullRequest {
        repo: Repository,
        payload: ActionPayload,
    },
    Unknown(String),
}

#[derive(Debug, Deserialize)]
struct TaggedEvent<P> {
    repo: Repository,
    payload: P,
}

#[derive(Debug, Deserialize)]
struct RepoEvent {
    repo: Repository,
}

impl Event {
    /// Decodes one element of the events array, dispatching on its `type` tag.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        #[derive(Deserialize)]
        struct Envelope {
            #[serde(rename = "type")]
            kind: String,
        }

        let Envelope { kind } = Envelope::deserialize(&value)?;

        let event = match kind.as_str() {
            "PushEvent" => {
                let TaggedEvent { repo, payload } = serde_json::from_value(value)?;
                Event::Push { repo, payload }
            }
            "IssuesEvent" => {
                let TaggedEvent { repo, payload } = serde_json::from_value(value)?;
                Event::Issues { repo, payload }
            }
            "WatchEvent" => {
                let RepoEvent { repo } = serde_json::from_value(value)?;
                Event::Watch { repo }
            }
            "CreateEvent" => {
                let RepoEvent { repo } = serde_json::from_value(value)?;
                Event::Create { repo }
            }
            "ForkEvent" => {
                let RepoEvent { repo } = serde_json::from_value(value)?;
                Event::Fork { repo }
            }
            "PullRequestEvent" => {
                let TaggedEvent { repo, payload } = serde_json::from_value(value)?;
                Event::PullRequest { repo, payload }
            }
            _ => Event::Unknown(kind),
        };

        Ok(event)
    }
}
