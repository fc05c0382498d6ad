use crate::github::Event;

/// Renders one event as a single human-readable line.
/// Unsupported event kinds yield `None` and are skipped by the caller.
pub fn format_event(event: &Event) -> Option<String> {
    let line = match event {
        Event::Push { repo, payload } => {
            format!("Pushed {} commits to {}", payload.commits.len(), repo.name)
        }
        Event::Issues { repo, payload } if payload.action == "opened" => {
            format!("Opened a new issue in {}", repo.name)
        }
        Event::Issues { repo, payload } => {
            format!("{} an issue in {}", capitalize(&payload.action), repo.name)
        }
        Event::Watch { repo } => format!("Starred {}", repo.name),
        Event::Create { repo } => format!("Created repository {}", repo.name),
        Event::Fork { repo } => format!("Forked {}", repo.name),
        Event::PullRequest { repo, payload } => {
            format!(
                "{} a pull request in {}",
                capitalize(&payload.action),
                repo.name
            )
        }
        Event::Unknown(_) => return None,
    };

    Some(line)
}

/// Uppercases the first character only, so "reOpened" becomes "ReOpened".
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
