use crate::errors::InvocationError;

/// Receives the outcome of one invocation.
///
/// Exactly one of `text` or `error` is called per invocation. The sink may
/// copy `value` immediately; it is not guaranteed to outlive the call.
pub trait ResultSink {
    fn text(&mut self, value: &str);

    fn error(&mut self, error: &InvocationError);
}

/// Sink that keeps the outcome, for in-process hosts and tests.
#[derive(Debug, Default)]
pub struct CapturedResult {
    pub outcome: Option<Result<String, InvocationError>>,
    /// Number of times either sink method was called.
    pub deliveries: usize,
}

impl ResultSink for CapturedResult {
    fn text(&mut self, value: &str) {
        self.deliveries += 1;
        self.outcome = Some(Ok(value.to_string()));
    }

    fn error(&mut self, error: &InvocationError) {
        self.deliveries += 1;
        self.outcome = Some(Err(error.clone()));
    }
}
