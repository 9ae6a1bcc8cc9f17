use crate::ports::{SourceStore, StepOutput};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: SourceStore, O: StepOutput> {
    store: S,
    output: O,
}

impl<S: SourceStore, O: StepOutput> AppContext<S, O> {
    /// Create a new application context.
    pub fn new(store: S, output: O) -> Self {
        Self { store, output }
    }

    /// Get a reference to the source store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the step output channel.
    pub fn output(&self) -> &O {
        &self.output
    }
}
