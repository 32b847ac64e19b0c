// # contacts - Contact list client
//
// This binary is a THIN front-end over contacts-core:
// - List, search and page through contacts
// - Add, edit and delete contacts
//
// All list, form and error-message behavior lives in contacts-core; the
// HTTP transport lives in contacts-http.
//
// ## Configuration
//
// All configuration is done via environment variables:
//
// - `CONTACTS_API_BASE_URL`: Contact service base URL (default `http://localhost:8000`)
// - `CONTACTS_HTTP_TIMEOUT_SECS`: Request timeout in seconds, 1-300 (default 30)
// - `CONTACTS_PAGE_SIZE`: Contacts per page (default 5)
// - `CONTACTS_SEARCH_SCOPE`: `collection` or `page` (default `collection`)
// - `CONTACTS_LOG_LEVEL`: trace, debug, info, warn, error (default `warn`)
//
// ## Example
//
// ```bash
// export CONTACTS_API_BASE_URL=http://localhost:8000
//
// contacts list --page 2 --search eng
// contacts add --full-name "Ada Lovelace" --work-profile Engineer \
//     --contact-no 5550100 --email ada@example.com
// contacts edit 65f1c0ffee --email ada@lovelace.dev
// contacts delete 65f1c0ffee
// ```

mod config;
mod render;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use config::Config;
use contacts_core::{
    ContactField, ContactForm, ContactId, ContactListController, ListEvent, ViewConfig,
};
use contacts_http::HttpContactRepository;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
///
/// - 0: Command completed
/// - 1: Configuration or startup error
/// - 2: Command failed
/// - 130: Interrupted with Ctrl-C
#[derive(Debug, Clone, Copy)]
enum ContactsExitCode {
    /// Command completed
    CleanShutdown = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Service or input error while running the command
    RuntimeError = 2,
    /// Interrupted before the command finished
    Cancelled = 130,
}

impl From<ContactsExitCode> for ExitCode {
    fn from(code: ContactsExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Manage the contacts held by a contact service"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List contacts, newest first
    List {
        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Only show contacts whose name, profile, email or number contains this text
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Add a contact
    Add(FieldArgs),

    /// Change fields of an existing contact
    Edit {
        /// Contact ID
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a contact
    Delete {
        /// Contact ID
        id: String,
    },
}

/// Contact field values given on the command line
#[derive(Args)]
struct FieldArgs {
    /// Full name
    #[arg(long)]
    full_name: Option<String>,

    /// Work profile
    #[arg(long)]
    work_profile: Option<String>,

    /// Contact number
    #[arg(long)]
    contact_no: Option<String>,

    /// Email address
    #[arg(long)]
    email: Option<String>,
}

impl FieldArgs {
    /// Fields that were given, in form order
    fn values(&self) -> Vec<(ContactField, &str)> {
        [
            (ContactField::FullName, &self.full_name),
            (ContactField::WorkProfile, &self.work_profile),
            (ContactField::ContactNo, &self.contact_no),
            (ContactField::Email, &self.email),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            return ContactsExitCode::ConfigError.into();
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {:#}", e);
        return ContactsExitCode::ConfigError.into();
    }

    // Initialize tracing; stdout is kept for command output
    let log_level = config.log_level().unwrap_or(Level::WARN);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return ContactsExitCode::ConfigError.into();
    }

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return ContactsExitCode::RuntimeError.into();
        }
    };

    let result = rt.block_on(async {
        // Dropping the command future cancels the request in flight
        tokio::select! {
            outcome = run_command(cli.command, &config) => match outcome {
                Ok(()) => ContactsExitCode::CleanShutdown,
                Err(e) => {
                    error!("{:#}", e);
                    ContactsExitCode::RuntimeError
                }
            },
            _ = tokio::signal::ctrl_c() => {
                warn!("Interrupted, abandoning the command");
                ContactsExitCode::Cancelled
            }
        }
    });

    result.into()
}

/// Run a single command against the configured service
async fn run_command(command: Command, config: &Config) -> Result<()> {
    let contacts_config = config.contacts_config();
    let repository = Arc::new(HttpContactRepository::new(&contacts_config.api)?);
    info!("Using contact service at {}", repository.base_url());

    match command {
        Command::List { page, search } => {
            let (mut controller, events) = load(repository, &contacts_config.view).await?;
            controller.set_search(search);
            if page != controller.page() && !controller.select_page(page) {
                eprintln!(
                    "Page {} does not exist; showing page {}.",
                    page,
                    controller.page()
                );
            }
            drain_events(events);

            render::print_list(&controller.view())
        }
        Command::Add(fields) => {
            let mut form = ContactForm::new();
            for (field, value) in fields.values() {
                form.set(field, value);
            }

            let contact = form.submit(repository.as_ref()).await?;
            println!("Contact added successfully!");
            render::print_contact(&contact);
            Ok(())
        }
        Command::Edit { id, fields } => {
            let id = ContactId::new(id);
            let (mut controller, events) = load(repository, &contacts_config.view).await?;

            let Some(form) = controller.edit(&id) else {
                anyhow::bail!("Contact {} not found", id);
            };
            for (field, value) in fields.values() {
                form.set(field, value);
            }
            if !form.is_dirty() {
                println!("Nothing to change.");
                return Ok(());
            }

            controller.submit_edit().await?;
            drain_events(events);

            println!("Contact updated successfully!");
            if let Some(updated) = controller.contacts().iter().find(|c| c.id == id) {
                render::print_contact(updated);
            }
            Ok(())
        }
        Command::Delete { id } => {
            let id = ContactId::new(id);
            let (mut controller, events) = load(repository, &contacts_config.view).await?;

            controller.delete(&id).await?;
            drain_events(events);

            println!("Contact deleted successfully!");
            Ok(())
        }
    }
}

/// Create a controller and load the list
async fn load(
    repository: Arc<HttpContactRepository>,
    view: &ViewConfig,
) -> Result<(ContactListController, mpsc::Receiver<ListEvent>)> {
    let (mut controller, events) = ContactListController::new(repository, view)?;
    controller.mount().await?;
    Ok((controller, events))
}

/// Log the events produced by a command
fn drain_events(mut events: mpsc::Receiver<ListEvent>) {
    while let Ok(event) = events.try_recv() {
        debug!("List event: {:?}", event);
    }
}
