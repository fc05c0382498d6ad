pub mod cmdargs;
pub mod config;
pub mod formatter;
pub mod github;
pub mod logging;
