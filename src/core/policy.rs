use crate::core::{AccessDecision, AccessPolicy};

/// Grants every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AccessPolicy for AllowAll {
    fn check(&self) -> AccessDecision {
        AccessDecision::Allow
    }
}

/// Refuses every request with a fixed reason.
#[derive(Debug, Clone)]
pub struct DenyAll {
    reason: String,
}

impl DenyAll {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl AccessPolicy for DenyAll {
    fn check(&self) -> AccessDecision {
        AccessDecision::deny(self.reason.clone())
    }
}

/// Allows or denies according to a flag fixed at construction.
#[derive(Debug, Clone)]
pub struct StaticPolicy {
    allow: bool,
    reason: String,
}

impl StaticPolicy {
    pub fn new(allow: bool, reason: impl Into<String>) -> Self {
        Self {
            allow,
            reason: reason.into(),
        }
    }
}

impl AccessPolicy for StaticPolicy {
    fn check(&self) -> AccessDecision {
        if self.allow {
            AccessDecision::Allow
        } else {
            AccessDecision::deny(self.reason.clone())
        }
    }
}
