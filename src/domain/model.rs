use std::fmt;

/// Observable effects of a request, in the order they are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    ClientRequest,
    CheckingAccess,
    Handling,
    AccessLogged,
    AccessDenied,
}

impl Event {
    pub fn message(&self) -> &'static str {
        match self {
            Event::ClientRequest => "Client: Using the proxy to request service...",
            Event::CheckingAccess => "Proxy: Checking access...",
            Event::Handling => "RealSubject: Handling request...",
            Event::AccessLogged => "Proxy: Logging access...",
            Event::AccessDenied => "Proxy: Access denied.",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny { reason: String },
}

impl AccessDecision {
    pub fn deny(reason: impl Into<String>) -> Self {
        AccessDecision::Deny {
            reason: reason.into(),
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}

impl From<bool> for AccessDecision {
    fn from(allowed: bool) -> Self {
        if allowed {
            AccessDecision::Allow
        } else {
            AccessDecision::deny("access check returned false")
        }
    }
}
