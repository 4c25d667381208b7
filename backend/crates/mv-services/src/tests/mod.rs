mod analysis_workflow;
mod error;
