use auras_core::entities::User;
use auras_core::payloads::{AuthResponse, LoginCredentials, SignupData};
use auras_services::Services;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    backend: &'static str,
    user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token_valid: Option<bool>,
}

/// Login result as shown to the user. The token stays in the session store.
#[derive(Serialize)]
struct AuthLoginResponse {
    success: bool,
    backend: &'static str,
    user: Option<User>,
}

impl AuthLoginResponse {
    fn new(response: AuthResponse, services: &Services) -> Self {
        Self {
            success: response.success,
            backend: services.session().backend_name(),
            user: response.user,
        }
    }
}

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

/// Handle `auras auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    services: &Services,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let auth = &services.auth;
    match action {
        AuthCommands::Login(args) => {
            let credentials = LoginCredentials {
                email: args.email.clone(),
                password: args.password.clone(),
            };
            let response = auth.login(&credentials).await?;
            output(&AuthLoginResponse::new(response, services), flags.format)
        }
        AuthCommands::Signup(args) => {
            let data = SignupData {
                name: args.name.clone(),
                email: args.email.clone(),
                password: args.password.clone(),
                role: args.role.clone(),
            };
            let response = auth.signup(&data).await?;
            output(&AuthLoginResponse::new(response, services), flags.format)
        }
        AuthCommands::Google { token } => {
            let response = auth.google_login(token).await?;
            output(&AuthLoginResponse::new(response, services), flags.format)
        }
        AuthCommands::Logout => {
            auth.logout()?;
            output(&AuthLogoutResponse { cleared: true }, flags.format)
        }
        AuthCommands::Status { verify } => {
            let token_valid = if *verify && auth.is_authenticated() {
                Some(auth.verify_token().await)
            } else {
                None
            };
            let session = services.session();
            let status = AuthStatusResponse {
                authenticated: auth.is_authenticated(),
                backend: session.backend_name(),
                user: session.user(),
                token_valid,
            };
            output(&status, flags.format)
        }
        AuthCommands::ForgotPassword { email } => {
            output(&auth.forgot_password(email).await?, flags.format)
        }
        AuthCommands::ResetPassword { token, password } => {
            output(&auth.reset_password(token, password).await?, flags.format)
        }
    }
}
