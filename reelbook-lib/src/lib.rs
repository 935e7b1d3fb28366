//! Interactive movie library session: command parsing, prompting, and
//! the add/delete/edit loop, plus shared settings resolution.

pub mod command;
pub mod error;
pub mod prompt;
pub mod session;
pub mod settings;

pub use command::Command;
pub use error::{SessionError, SettingsError};
pub use prompt::Prompter;
pub use session::{ErrorPolicy, Flow, Session};
pub use settings::{Settings, load_settings, resolve_database_path, resolve_error_policy};
