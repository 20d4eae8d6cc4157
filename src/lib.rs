pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, LogFormat};

pub use adapters::{ConsoleOutput, MemoryOutput};
pub use config::ProxySettings;
pub use core::policy::{AllowAll, DenyAll, StaticPolicy};
pub use core::{proxy::Proxy, real_subject::RealSubject};
pub use core::{AccessDecision, AccessPolicy, Event, Output, SharedOutput, Subject};
pub use utils::error::{ProxyError, Result};
