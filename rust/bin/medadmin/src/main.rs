//! `medadmin`: command-line client for the MedAdmin backend.
//!
//! Manages contexts, sign-in for admin and staff accounts, and record
//! operations across every module. Think of it as `kubectl` for MedAdmin.

mod commands;
mod config;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use medadmin_client::{Filter, UserType};

use commands::resource::GetArgs;
use commands::Output;

/// MedAdmin CLI tool.
#[derive(Parser, Debug)]
#[command(name = "medadmin", about = "MedAdmin CLI client")]
struct Cli {
    /// Path to client config file (default: ~/.medadmin/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Output format.
    #[arg(long = "output", short = 'o', global = true, value_enum, default_value = "table")]
    output: Output,

    /// Request timeout in seconds (overrides the context's setting).
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage contexts (one per backend).
    #[command(name = "context")]
    Context {
        #[command(subcommand)]
        action: ContextAction,
    },

    /// Switch the current context.
    #[command(name = "use")]
    Use {
        #[command(subcommand)]
        what: UseWhat,
    },

    /// Login to the current context's server.
    Login {
        /// Account type: admin or staff.
        #[arg(long = "as", default_value = "staff")]
        user_type: UserType,
        /// Email address.
        #[arg(long)]
        email: Option<String>,
        /// Password (not recommended, use the interactive prompt).
        #[arg(long)]
        password: Option<String>,
    },

    /// Logout one account and clear its stored session.
    Logout {
        /// Account type (default: the one requests would use).
        #[arg(long = "as")]
        user_type: Option<UserType>,
    },

    /// Show the signed-in accounts.
    Whoami,

    /// Get resource(s).
    Get {
        /// Resource type (e.g. reports, dental-assets, inventory).
        resource: String,
        /// Optional record ID for single get.
        id: Option<String>,
        /// Free-text search.
        #[arg(long)]
        search: Option<String>,
        /// Status label (Arabic label or English alias).
        #[arg(long)]
        status: Option<String>,
        /// Page number.
        #[arg(long)]
        page: Option<u64>,
        /// Records per page.
        #[arg(long)]
        per_page: Option<u64>,
    },

    /// Create a record.
    Create {
        /// Resource type.
        resource: String,
        /// JSON body.
        #[arg(long = "json")]
        json_body: Option<String>,
        /// Read JSON from file.
        #[arg(short = 'f', long = "file")]
        file: Option<String>,
        /// Upload a file as a form field: field=path. Repeatable.
        #[arg(long = "attach")]
        attach: Vec<String>,
    },

    /// Update a record.
    Update {
        /// Resource type.
        resource: String,
        /// Record ID.
        id: String,
        /// JSON body.
        #[arg(long = "json")]
        json_body: String,
        /// Upload a file as a form field: field=path. Repeatable.
        #[arg(long = "attach")]
        attach: Vec<String>,
    },

    /// Change a record's status.
    #[command(name = "set-status")]
    SetStatus {
        /// Resource type.
        resource: String,
        /// Record ID.
        id: String,
        /// New status (Arabic label or English alias).
        label: String,
        /// Notes stored with the change.
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a record.
    Delete {
        /// Resource type.
        resource: String,
        /// Record ID.
        id: String,
        /// Skip confirmation.
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Show or extend a transaction's transfer log.
    Transfers {
        /// Transaction ID.
        id: String,
        /// Record a transfer instead of listing.
        #[arg(long, requires = "to")]
        add: bool,
        /// Receiving department.
        #[arg(long)]
        to: Option<String>,
        /// Transfer note.
        #[arg(long)]
        note: Option<String>,
    },

    /// Export a resource list to CSV.
    Export {
        /// Resource type.
        resource: String,
        /// Output file.
        #[arg(long)]
        out: PathBuf,
        /// Keep records matching this text.
        #[arg(long)]
        search: Option<String>,
        /// Keep records with this exact status label.
        #[arg(long)]
        status: Option<String>,
    },

    /// Status counts, low stock and ending warranties.
    Dashboard {
        /// Warranty window in days.
        #[arg(long, default_value_t = 30)]
        days: i64,
    },

    /// Check server status.
    Status,

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum ContextAction {
    /// Create a new context.
    Create {
        /// Context name.
        name: String,
        /// API base URL.
        #[arg(long, default_value = medadmin_client::DEFAULT_BASE_URL)]
        server: String,
        /// Request timeout in seconds.
        #[arg(long = "timeout-secs")]
        timeout_secs: Option<u64>,
    },
    /// List all contexts.
    List,
    /// Set properties on a context.
    Set {
        name: String,
        #[arg(long)]
        server: Option<String>,
        #[arg(long = "timeout-secs")]
        timeout_secs: Option<u64>,
    },
    /// Delete a context.
    Delete { name: String },
}

#[derive(Subcommand, Debug)]
enum UseWhat {
    /// Switch to a context.
    Context { name: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(PathBuf::from)
        .unwrap_or_else(config::ClientConfig::default_path);
    let output = cli.output;
    let timeout = cli.timeout;

    match cli.command {
        Commands::Context { action } => match action {
            ContextAction::Create {
                name,
                server,
                timeout_secs,
            } => {
                commands::context::create(&name, &server, timeout_secs, &config_path)?;
            }
            ContextAction::List => {
                commands::context::list(&config_path)?;
            }
            ContextAction::Set {
                name,
                server,
                timeout_secs,
            } => {
                commands::context::set(&name, server.as_deref(), timeout_secs, &config_path)?;
            }
            ContextAction::Delete { name } => {
                commands::context::delete(&name, &config_path)?;
            }
        },

        Commands::Use { what } => match what {
            UseWhat::Context { name } => {
                commands::context::use_context(&name, &config_path)?;
            }
        },

        Commands::Login {
            user_type,
            email,
            password,
        } => {
            let email = match email {
                Some(e) => e,
                None => prompt("Email: ")?,
            };
            let password = match password {
                Some(p) => p,
                None => rpassword::prompt_password("Password: ")?,
            };
            if email.is_empty() || password.is_empty() {
                anyhow::bail!("Email and password are required.");
            }
            commands::login::login(user_type, &email, &password, timeout, &config_path).await?;
        }

        Commands::Logout { user_type } => {
            commands::login::logout(user_type, timeout, &config_path).await?;
        }

        Commands::Whoami => {
            commands::login::whoami(output, timeout, &config_path).await?;
        }

        Commands::Get {
            resource,
            id,
            search,
            status,
            page,
            per_page,
        } => {
            let args = GetArgs {
                search,
                status,
                page,
                per_page,
            };
            commands::resource::get(&resource, id.as_deref(), args, output, timeout, &config_path)
                .await?;
        }

        Commands::Create {
            resource,
            json_body,
            file,
            attach,
        } => {
            let body = if let Some(path) = file {
                std::fs::read_to_string(&path)?
            } else if let Some(json) = json_body {
                json
            } else {
                anyhow::bail!("Provide --json or -f <file>.");
            };
            commands::resource::create(&resource, &body, &attach, output, timeout, &config_path)
                .await?;
        }

        Commands::Update {
            resource,
            id,
            json_body,
            attach,
        } => {
            commands::resource::update(
                &resource,
                &id,
                &json_body,
                &attach,
                output,
                timeout,
                &config_path,
            )
            .await?;
        }

        Commands::SetStatus {
            resource,
            id,
            label,
            notes,
        } => {
            commands::resource::set_status(
                &resource,
                &id,
                &label,
                notes.as_deref(),
                output,
                timeout,
                &config_path,
            )
            .await?;
        }

        Commands::Delete { resource, id, yes } => {
            if !yes {
                let answer = prompt("Are you sure? [y/N]: ")?;
                if !answer.eq_ignore_ascii_case("y") {
                    println!("Cancelled.");
                    return Ok(());
                }
            }
            commands::resource::delete(&resource, &id, timeout, &config_path).await?;
        }

        Commands::Transfers { id, add, to, note } => {
            let add_to = if add { to.as_deref() } else { None };
            commands::resource::transfers(
                &id,
                add_to,
                note.as_deref(),
                output,
                timeout,
                &config_path,
            )
            .await?;
        }

        Commands::Export {
            resource,
            out,
            search,
            status,
        } => {
            let filter = Filter { search, status };
            commands::export::export(&resource, &out, filter, timeout, &config_path).await?;
        }

        Commands::Dashboard { days } => {
            commands::dashboard::dashboard(days, output, timeout, &config_path).await?;
        }

        Commands::Status => {
            commands::resource::status(timeout, &config_path).await?;
        }

        Commands::Version => {
            println!("medadmin cli v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Read one trimmed line from stdin after printing `label` to stderr.
fn prompt(label: &str) -> anyhow::Result<String> {
    eprint!("{}", label);
    std::io::stderr().flush()?;
    let mut s = String::new();
    std::io::stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}
