use crate::core::policy::AllowAll;
use crate::core::{AccessDecision, AccessPolicy, Event, SharedOutput, Subject};
use tracing::{info, warn};

/// Access-control wrapper around exactly one subject.
///
/// Every request is checked against the policy first. Allowed requests are
/// forwarded to the inner subject and then logged; denied ones never reach it.
pub struct Proxy<S: Subject, P: AccessPolicy = AllowAll> {
    subject: S,
    policy: P,
    output: SharedOutput,
}

impl<S: Subject> Proxy<S, AllowAll> {
    pub fn new(subject: S, output: SharedOutput) -> Self {
        Self::with_policy(subject, AllowAll, output)
    }
}

impl<S: Subject, P: AccessPolicy> Proxy<S, P> {
    pub fn with_policy(subject: S, policy: P, output: SharedOutput) -> Self {
        Self {
            subject,
            policy,
            output,
        }
    }

    pub fn inner(&self) -> &S {
        &self.subject
    }

    pub fn into_inner(self) -> S {
        self.subject
    }

    pub fn check_access(&self) -> bool {
        self.decide().is_allowed()
    }

    pub fn log_access(&self) {
        info!("access granted and forwarded");
        self.output.emit(Event::AccessLogged);
    }

    fn decide(&self) -> AccessDecision {
        self.output.emit(Event::CheckingAccess);
        self.policy.check()
    }
}

impl<S: Subject, P: AccessPolicy> Subject for Proxy<S, P> {
    fn request(&self) {
        match self.decide() {
            AccessDecision::Allow => {
                self.subject.request();
                self.log_access();
            }
            AccessDecision::Deny { reason } => {
                warn!(%reason, "access denied");
                self.output.emit(Event::AccessDenied);
            }
        }
    }
}
