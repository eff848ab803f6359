use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password.
    Login(AuthLoginArgs),
    /// Create an account and log in.
    Signup(AuthSignupArgs),
    /// Log in with a Google ID token.
    Google {
        /// ID token from Google sign-in.
        token: String,
    },
    /// Clear stored credentials.
    Logout,
    /// Show current auth status.
    Status {
        /// Also ask the auth service whether the token is still valid.
        #[arg(long)]
        verify: bool,
    },
    /// Request a password-reset email.
    ForgotPassword { email: String },
    /// Set a new password using the emailed reset token.
    ResetPassword {
        token: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthSignupArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub role: Option<String>,
}
