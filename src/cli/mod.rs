mod commands;
pub mod error;
mod utils;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::IntoDiagnostic;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::{Database, SqliteDatabase};
use commands::applicant::CreateApplicantArgs;
use commands::application::SubmitArgs;
use commands::job::PostJobArgs;

#[derive(Parser)]
#[command(name = "careerhub")]
#[command(author, version, about = "CareerHub job board CLI", long_about = None)]
pub struct Cli {
    /// Database file path (default: CAREERHUB_DATABASE_PATH env, config file, or XDG data dir)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Job listing commands
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// Company commands
    Company {
        #[command(subcommand)]
        command: CompanyCommands,
    },
    /// Applicant profile commands
    Applicant {
        #[command(subcommand)]
        command: ApplicantCommands,
    },
    /// Job application commands
    Application {
        #[command(subcommand)]
        command: ApplicationCommands,
    },
}

#[derive(Subcommand)]
enum JobCommands {
    /// Post a job, creating the company when it is not registered yet
    Post {
        /// Company name
        #[arg(long)]
        company: String,
        /// Company location
        #[arg(long)]
        company_location: String,
        /// Job title
        #[arg(long)]
        title: String,
        /// Job description
        #[arg(long)]
        description: String,
        /// Job location
        #[arg(long)]
        location: String,
        /// Salary as a decimal amount
        #[arg(long)]
        salary: String,
        /// Job type (Full-time, Part-time, Contract)
        #[arg(long)]
        job_type: String,
    },
    /// List all job listings
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Average salary across all listings
    AverageSalary,
}

#[derive(Subcommand)]
enum CompanyCommands {
    /// List all companies
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

#[derive(Subcommand)]
enum ApplicantCommands {
    /// Create an applicant profile
    Create {
        /// First name
        #[arg(long)]
        first_name: String,
        /// Last name
        #[arg(long)]
        last_name: String,
        /// Email address (must contain an '@')
        #[arg(long)]
        email: String,
        /// Phone number
        #[arg(long)]
        phone: String,
        /// Path to the resume file (.pdf, .doc or .docx, at most 2 MiB)
        #[arg(long)]
        resume: PathBuf,
    },
    /// List all applicants
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

#[derive(Subcommand)]
enum ApplicationCommands {
    /// Submit an application for a job
    Submit {
        /// Job id to apply for
        #[arg(long)]
        job_id: i64,
        /// Applicant id submitting the application
        #[arg(long)]
        applicant_id: i64,
        /// Application deadline (yyyy-mm-dd, inclusive)
        #[arg(long)]
        deadline: String,
        /// Cover letter text
        #[arg(long)]
        cover_letter: String,
    },
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "careerhub=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let db_path = config.resolve_database_path(cli.db.clone());
    info!(path = %db_path.display(), "opening database");

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).into_diagnostic()?;
    }

    let db = SqliteDatabase::open(&db_path);
    db.migrate().await?;

    match cli.command {
        Some(Commands::Job { command }) => match command {
            JobCommands::Post {
                company,
                company_location,
                title,
                description,
                location,
                salary,
                job_type,
            } => {
                let args = PostJobArgs {
                    company,
                    company_location,
                    title,
                    description,
                    location,
                    salary,
                    job_type,
                };
                match commands::job::post(&db, args).await {
                    Ok(output) => println!("{}", output),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            JobCommands::List { format } => match commands::job::list(&db, &format).await {
                Ok(output) => println!("{}", output),
                Err(e) => eprintln!("Error: {}", e),
            },
            JobCommands::AverageSalary => match commands::job::average_salary(&db).await {
                Ok(output) => println!("{}", output),
                Err(e) => eprintln!("Error: {}", e),
            },
        },
        Some(Commands::Company { command }) => match command {
            CompanyCommands::List { format } => match commands::company::list(&db, &format).await {
                Ok(output) => println!("{}", output),
                Err(e) => eprintln!("Error: {}", e),
            },
        },
        Some(Commands::Applicant { command }) => match command {
            ApplicantCommands::Create {
                first_name,
                last_name,
                email,
                phone,
                resume,
            } => {
                let args = CreateApplicantArgs {
                    first_name,
                    last_name,
                    email,
                    phone,
                    resume,
                };
                match commands::applicant::create(&db, args).await {
                    Ok(output) => println!("{}", output),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            ApplicantCommands::List { format } => {
                match commands::applicant::list(&db, &format).await {
                    Ok(output) => println!("{}", output),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
        },
        Some(Commands::Application { command }) => match command {
            ApplicationCommands::Submit {
                job_id,
                applicant_id,
                deadline,
                cover_letter,
            } => {
                let args = SubmitArgs {
                    job_id,
                    applicant_id,
                    deadline,
                    cover_letter,
                };
                match commands::application::submit(&db, args).await {
                    Ok(output) => println!("{}", output),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
        },
        None => {
            // Show help when no command provided
            let _ = Cli::parse_from(["careerhub", "--help"]);
        }
    }

    Ok(())
}
