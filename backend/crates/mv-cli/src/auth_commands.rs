use clap::Subcommand;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create an account and sign in
    SignUp {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Name shown on the profile (defaults to the email's local part)
        #[arg(long)]
        display_name: Option<String>,
    },

    /// Sign in to an existing account
    SignIn {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// End the current session
    SignOut,

    /// Show the signed-in user
    Whoami,
}
