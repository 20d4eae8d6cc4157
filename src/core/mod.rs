pub mod policy;
pub mod proxy;
pub mod real_subject;

pub use crate::domain::model::{AccessDecision, Event};
pub use crate::domain::ports::{AccessPolicy, Output, Subject};

use std::sync::Arc;

/// Output sink shared between a proxy and the subject it wraps.
pub type SharedOutput = Arc<dyn Output>;
