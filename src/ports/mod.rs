mod source_store;
mod step_output;

pub use source_store::SourceStore;
pub use step_output::StepOutput;
