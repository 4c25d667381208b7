use crate::{
    auth_commands::AuthCommands, diagnosis_commands::DiagnosisCommands,
    note_commands::NoteCommands,
};

use std::path::PathBuf;

use clap::Subcommand;
use mv_core::ImagingType;

#[derive(Subcommand)]
pub enum Commands {
    /// Account and session operations
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Upload and analyze a scan for the signed-in user
    Analyze {
        /// Patient name
        #[arg(long)]
        patient: String,

        /// Imaging type (xray, ct, mri, skin)
        #[arg(long = "type")]
        imaging_type: ImagingType,

        /// Body region, e.g. "Chest"
        #[arg(long, default_value = "")]
        region: String,

        /// Path to the image file
        #[arg(long)]
        image: PathBuf,
    },

    /// List the signed-in user's diagnoses, newest first
    History {
        /// Case-insensitive match on patient or disease name
        #[arg(long, default_value = "")]
        search: String,

        /// Only this imaging type (xray, ct, mri, skin)
        #[arg(long = "type")]
        imaging_type: Option<ImagingType>,
    },

    /// Diagnosis operations
    Diagnosis {
        #[command(subcommand)]
        action: DiagnosisCommands,
    },

    /// Doctor note operations
    Note {
        #[command(subcommand)]
        action: NoteCommands,
    },

    /// Summary statistics over the signed-in user's diagnoses
    Analytics,
}
