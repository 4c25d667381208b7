use clap::Subcommand;

#[derive(Subcommand)]
pub enum DiagnosisCommands {
    /// Show one diagnosis with its notes
    Show {
        /// Diagnosis ID (UUID)
        id: String,
    },
}
