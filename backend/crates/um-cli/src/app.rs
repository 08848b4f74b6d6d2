//! Wiring from parsed arguments to dashboard operations.

use crate::cli::Cli;
use crate::commands::Commands;
use crate::error::{CliError, Result as CliResult};
use crate::terminal::{OutputFormat, TableRenderer, TerminalConfirmer, TerminalNotifier};
use crate::user_commands::UserCommands;
use crate::Client;

use um_config::Config;
use um_core::{Confirmer, ImageSource, NewUser, Notifier, Renderer, UserPatch};
use um_dashboard::UserDashboard;
use um_db::{FileStorage, KeyValueStorage};

use log::debug;

/// Run one command against the configured storage directory.
pub async fn run(cli: Cli, config: &Config) -> CliResult<()> {
    let server_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.client.server_url.clone());

    let assume_yes = matches!(
        cli.command,
        Commands::User {
            action: UserCommands::Delete { yes: true, .. }
        }
    );
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };

    let storage = FileStorage::open(config.storage_path()?)?;
    debug!("Using storage at {}", storage.dir().display());

    let mut dashboard = UserDashboard::open(
        storage,
        TerminalNotifier,
        TerminalConfirmer::new(assume_yes),
        TableRenderer::new(format),
    )?;

    match cli.command {
        Commands::Login { username, password } => {
            let client = Client::new(&server_url);
            dashboard.login(&username, &password, &client).await?;
        }
        Commands::Logout => dashboard.logout()?,
        Commands::Status => {
            if !dashboard.check_auth()? {
                println!("Not logged in.");
            }
        }
        Commands::User { action } => {
            if !dashboard.is_logged_in()? {
                return Err(CliError::not_logged_in());
            }
            run_user_command(&mut dashboard, action).await?;
        }
    }

    Ok(())
}

async fn run_user_command<S, N, C, R>(
    dashboard: &mut UserDashboard<S, N, C, R>,
    action: UserCommands,
) -> CliResult<()>
where
    S: KeyValueStorage,
    N: Notifier,
    C: Confirmer,
    R: Renderer,
{
    match action {
        UserCommands::Add {
            name,
            role,
            email,
            contact,
            id,
            image,
        } => {
            let mut input = NewUser::new(name, role, email, contact);
            input.id = id;
            input.image = image.map(ImageSource::File);
            dashboard.create(input).await?;
        }
        UserCommands::Update {
            id,
            name,
            role,
            email,
            contact,
            image,
        } => {
            let image = image.map(ImageSource::File);
            match dashboard.begin_edit(&id) {
                Some(form) => {
                    let name = name.unwrap_or_else(|| form.name.clone());
                    let role = role.unwrap_or_else(|| form.role.clone());
                    let email = email.unwrap_or_else(|| form.email.clone());
                    let contact = contact.unwrap_or_else(|| form.contact.clone());
                    dashboard
                        .submit_edit(&form, &name, &role, &email, &contact, image)
                        .await?;
                }
                None => {
                    let patch = UserPatch {
                        name,
                        role,
                        email,
                        contact,
                        image,
                    };
                    dashboard.update(&id, patch).await?;
                }
            }
        }
        UserCommands::Delete { id, .. } => {
            dashboard.delete(&id)?;
        }
        UserCommands::Get { id } => {
            match dashboard.find(&id) {
                Some(user) => dashboard.renderer().render(std::slice::from_ref(user)),
                None => println!("No user with id {id}."),
            }
        }
        UserCommands::List => dashboard.render_all(),
        UserCommands::Search { term, role } => {
            dashboard.search(&term, role.as_deref());
        }
    }

    Ok(())
}
