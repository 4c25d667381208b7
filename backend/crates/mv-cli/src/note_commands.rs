use clap::Subcommand;

#[derive(Subcommand)]
pub enum NoteCommands {
    /// Add a note to a diagnosis
    Add {
        /// Diagnosis ID (UUID)
        #[arg(long)]
        diagnosis_id: String,

        /// Note text
        #[arg(long)]
        text: String,
    },

    /// List notes on a diagnosis, oldest first
    List {
        /// Diagnosis ID (UUID)
        diagnosis_id: String,
    },
}
