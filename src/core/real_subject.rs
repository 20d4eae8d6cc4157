use crate::core::{Event, SharedOutput, Subject};

/// The subject that actually handles requests.
pub struct RealSubject {
    output: SharedOutput,
}

impl RealSubject {
    pub fn new(output: SharedOutput) -> Self {
        Self { output }
    }
}

impl Subject for RealSubject {
    fn request(&self) {
        tracing::debug!("RealSubject handling request");
        self.output.emit(Event::Handling);
    }
}
