use crate::domain::model::{AccessDecision, Event};

/// Anything that can serve a request.
pub trait Subject: Send + Sync {
    fn request(&self);
}

impl<S: Subject + ?Sized> Subject for Box<S> {
    fn request(&self) {
        (**self).request()
    }
}

/// Decides whether a request may reach the wrapped subject.
pub trait AccessPolicy: Send + Sync {
    fn check(&self) -> AccessDecision;
}

impl<F> AccessPolicy for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn check(&self) -> AccessDecision {
        AccessDecision::from(self())
    }
}

/// Sink for the events a request produces.
pub trait Output: Send + Sync {
    fn emit(&self, event: Event);
}
