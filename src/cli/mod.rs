//! `nutricare` command line

mod commands;
mod output;

pub use commands::run;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIME"),
    ")"
);

/// Command-line client for the NutriCare platform
#[derive(Debug, Parser)]
#[command(name = "nutricare", version, long_version = LONG_VERSION)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "NUTRICARE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, including `/api/v1`
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Where credentials are kept between runs
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "NUTRICARE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and sign in
    Signup(SignupArgs),
    /// Forget the stored credentials
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Show the menu, or where a path leads
    Routes {
        /// Path to resolve, e.g. `/admin/assignments`
        path: Option<String>,
    },
    #[command(subcommand)]
    Patient(PatientCommand),
    #[command(subcommand)]
    Nutritionist(NutritionistCommand),
    #[command(subcommand)]
    MealPlans(MealPlanCommand),
    #[command(subcommand)]
    Assignments(AssignmentCommand),
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Debug, Args)]
pub struct SignupArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    /// patient, nutritionist or admin
    #[arg(long, default_value = "patient")]
    pub role: String,
    #[arg(long, env = "NUTRICARE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct PageArgs {
    #[arg(long)]
    pub limit: Option<u32>,
    #[arg(long, default_value_t = 0)]
    pub skip: u32,
}

#[derive(Debug, Subcommand)]
pub enum PatientCommand {
    /// Show the patient profile
    Profile,
    /// Show the current meal plan
    Plan,
    /// List progress reports
    Progress(PageArgs),
    /// Submit a weekly progress report
    Report(ReportArgs),
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Monday of the reported week, YYYY-MM-DD
    #[arg(long)]
    pub week_start: chrono::NaiveDate,
    #[arg(long)]
    pub weight: f64,
    #[arg(long)]
    pub waist: Option<f64>,
    /// Plan adherence, 0-100
    #[arg(long)]
    pub adherence: u8,
    /// Energy level, 1-10
    #[arg(long)]
    pub energy: u8,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum NutritionistCommand {
    Profile,
    /// List assigned patients
    Patients(PageArgs),
    /// Dashboard figures
    Stats,
}

#[derive(Debug, Subcommand)]
pub enum MealPlanCommand {
    List {
        #[arg(long)]
        patient_id: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    Show {
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum AssignmentCommand {
    List {
        #[arg(long)]
        patient_id: Option<String>,
        #[arg(long)]
        nutritionist_id: Option<String>,
        #[arg(long)]
        active: Option<bool>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Assign a patient to a nutritionist, starting now
    Create {
        #[arg(long)]
        patient_id: String,
        #[arg(long)]
        nutritionist_id: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Deactivate an assignment
    End {
        id: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// List users
    Users {
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Platform metrics
    Metrics,
    /// Nutritionists awaiting verification
    Pending(PageArgs),
    /// Verify a nutritionist by user id
    Verify {
        user_id: String,
    },
    Suspend {
        user_id: String,
    },
    Activate {
        user_id: String,
    },
}
