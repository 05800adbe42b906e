use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::commands::CommandReport;
use crate::commands::deliver::DeliverArgs;
use crate::commands::revise::ReviseArgs;
use crate::commands::submit::SubmitArgs;

#[derive(Debug, Parser)]
#[command(
    name = "lingodesk",
    version,
    about = "Track translation file requests: upload, status progression, delivery."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create an account (role: client or admin).
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "client")]
        role: String,
    },
    /// Sign in and persist the session snapshot.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out. Safe to repeat.
    Logout,
    /// Show the signed-in identity.
    Whoami,
    /// Submit a translation request (client).
    Submit {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        file_name: String,
        #[arg(long)]
        file_url: Option<String>,
        /// Turnaround in hours; the configured default applies when omitted.
        #[arg(long)]
        tat: Option<u32>,
    },
    /// Edit a request's metadata, keeping its id and status (client).
    Revise {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
        #[arg(long)]
        file_name: Option<String>,
        #[arg(long)]
        file_url: Option<String>,
        #[arg(long)]
        tat: Option<u32>,
    },
    /// List your requests with their status tally (client).
    Files,
    /// Withdraw an Uploaded request (client).
    Remove {
        #[arg(long)]
        id: u64,
    },
    /// Show the translated file for a Completed request (client).
    Download {
        #[arg(long)]
        id: u64,
    },
    /// Admin dashboard: reload the store and list every user's requests.
    Requests,
    /// Overwrite a request's status (admin).
    SetStatus {
        #[arg(long)]
        email: String,
        #[arg(long)]
        id: u64,
        #[arg(long)]
        status: String,
    },
    /// Attach a translated file to a user's request (admin).
    Deliver {
        #[arg(long)]
        email: String,
        #[arg(long)]
        request_id: u64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Render the ready-notification text for a Completed request (admin).
    Notify {
        #[arg(long)]
        email: String,
        #[arg(long)]
        id: u64,
    },
    /// Check store health, configuration, and active env overrides.
    Doctor,
}

fn dispatch(command: Command) -> Result<CommandReport> {
    match command {
        Command::Register {
            name,
            email,
            password,
            role,
        } => commands::register::run(&name, &email, &password, &role),
        Command::Login { email, password } => commands::login::run(&email, &password),
        Command::Logout => commands::logout::run(),
        Command::Whoami => commands::whoami::run(),
        Command::Submit {
            from,
            to,
            file_name,
            file_url,
            tat,
        } => commands::submit::run(SubmitArgs {
            from,
            to,
            file_name,
            file_url,
            tat_hours: tat,
        }),
        Command::Revise {
            id,
            from,
            to,
            file_name,
            file_url,
            tat,
        } => commands::revise::run(ReviseArgs {
            id,
            from,
            to,
            file_name,
            file_url,
            tat_hours: tat,
        }),
        Command::Files => commands::files::run(),
        Command::Remove { id } => commands::remove::run(id),
        Command::Download { id } => commands::download::run(id),
        Command::Requests => commands::requests::run(),
        Command::SetStatus { email, id, status } => {
            commands::set_status::run(&email, id, &status)
        }
        Command::Deliver {
            email,
            request_id,
            name,
            url,
            content,
        } => commands::deliver::run(DeliverArgs {
            email,
            request_id,
            name,
            url,
            content,
        }),
        Command::Notify { email, id } => commands::notify::run(&email, id),
        Command::Doctor => commands::doctor::run(),
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let report = dispatch(cli.command)?;

    for line in &report.details {
        println!("{line}");
    }
    for issue in &report.issues {
        eprintln!("issue: {issue}");
    }
    if !report.ok {
        anyhow::bail!("{} failed", report.command);
    }
    Ok(())
}
