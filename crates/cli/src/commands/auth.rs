//! `morsel auth`

use std::io;

use clap::{Args, Subcommand, ValueEnum};
use morsel::{
    secret::Secret,
    users::{Credentials, ProfileUpdate, Registration, Role},
};
use morsel_client::context::AppContext;
use tracing::info;

use crate::{commands::require_session, errors::CliError, render};

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Sign in and print the session token
    Login(LoginArgs),

    /// Create an account and sign in
    Register(RegisterArgs),

    /// Show your profile, or update it when any field is given
    Profile(ProfileArgs),
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long, env = "MORSEL_PASSWORD", hide_env_values = true)]
    password: String,
}

/// Role requested at sign-up.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AccountRole {
    /// Order food
    Customer,

    /// Manage a restaurant
    RestaurantOwner,
}

impl From<AccountRole> for Role {
    fn from(role: AccountRole) -> Self {
        match role {
            AccountRole::Customer => Role::Customer,
            AccountRole::RestaurantOwner => Role::RestaurantOwner,
        }
    }
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Full name
    #[arg(long)]
    name: String,

    /// Account email
    #[arg(long)]
    email: String,

    /// Password (at least 6 characters)
    #[arg(long, env = "MORSEL_PASSWORD", hide_env_values = true)]
    password: String,

    /// Password again
    #[arg(long)]
    confirm_password: String,

    /// Account role
    #[arg(long, value_enum, default_value_t = AccountRole::Customer)]
    role: AccountRole,
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// New full name
    #[arg(long)]
    name: Option<String>,

    /// New phone number
    #[arg(long)]
    phone: Option<String>,
}

pub(crate) async fn run(
    context: &AppContext,
    command: AuthCommand,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    match command {
        AuthCommand::Login(args) => {
            context
                .auth
                .sign_in(Credentials {
                    email: args.email,
                    password: Secret::new(args.password),
                })
                .await?;

            signed_in(context, out)
        }
        AuthCommand::Register(args) => {
            let confirm = Secret::new(args.confirm_password);

            context
                .auth
                .sign_up(
                    Registration {
                        full_name: args.name,
                        email: args.email,
                        password: Secret::new(args.password),
                        role: args.role.into(),
                    },
                    confirm.expose(),
                )
                .await?;

            signed_in(context, out)
        }
        AuthCommand::Profile(args) => {
            require_session(context)?;

            let update = ProfileUpdate {
                full_name: args.name,
                phone: args.phone,
                address: None,
            };

            if update.is_empty() {
                context.auth.load_profile().await?;
            } else {
                context.auth.update_profile(update).await?;
                info!("profile updated");
            }

            context.auth.read(|resource| match &resource.data().user {
                Some(user) => render::profile(out, user),
                None => {
                    writeln!(out, "No profile loaded.")?;
                    Ok(())
                }
            })
        }
    }
}

fn signed_in(context: &AppContext, out: &mut impl io::Write) -> Result<(), CliError> {
    let role = context
        .auth
        .read(|resource| resource.data().role)
        .unwrap_or_default();

    writeln!(out, "Signed in as {}.", render::role_label(role))?;

    if let Some(token) = context.session().token() {
        writeln!(out, "export MORSEL_TOKEN={}", token.expose())?;
    }

    Ok(())
}
