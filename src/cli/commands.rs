//! Command execution

use super::output::{menu_json, navigation_json, print_json};
use super::{
    AdminCommand, AssignmentCommand, Cli, Command, MealPlanCommand, NutritionistCommand, PageArgs,
    PatientCommand, ReportArgs, SignupArgs,
};
use crate::app::AppContext;
use crate::config::{ClientConfig, SessionConfig};
use crate::models::{
    AssignmentCreate, AssignmentFilter, AssignmentUpdate, MealPlanFilter, Page,
    ProgressReportCreate, SignupRequest, UserFilter, UserRole, UserStatus, UserUpdate, defaults,
};
use crate::routing::{GuardOutcome, Route, home_for};
use crate::utils::error::ClientError;
use crate::utils::logging::init_logging;
use anyhow::{Context, anyhow, bail};
use serde_json::json;
use std::path::PathBuf;
use tracing::{debug, warn};

const DEFAULT_SESSION_FILE: &str = ".nutricare/session.json";

/// Parse-independent entry point used by `main`
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli).await?;
    init_logging(&config.logging).context("failed to initialise logging")?;
    debug!("{:?}", crate::build_info());
    debug!("Effective configuration: {:?}", config);

    let mut app = AppContext::from_config(&config)?;
    if let Err(err) = app.bootstrap().await {
        if needs_session(&cli.command) {
            return Err(anyhow!(err).context("could not restore the stored session"));
        }
        warn!("Continuing without a restored session: {}", err);
    }

    match execute(&mut app, cli.command).await {
        Ok(()) => Ok(()),
        Err(err) => match err.downcast::<ClientError>() {
            Ok(client_err) => {
                let message = app.handle_error(&client_err);
                Err(anyhow!(client_err).context(message))
            }
            Err(other) => Err(other),
        },
    }
}

async fn resolve_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = ClientConfig::load(cli.config.as_deref()).await?;

    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(path) = &cli.session_file {
        config.session = SessionConfig::file(path);
    } else if !config.session.is_persistent() {
        if let Some(path) = default_session_file() {
            config.session = SessionConfig::file(path);
        }
    }
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }

    config.validate()?;
    Ok(config)
}

/// Whether a command depends on the restored user
fn needs_session(command: &Command) -> bool {
    !matches!(
        command,
        Command::Login { .. } | Command::Signup(_) | Command::Logout
    )
}

fn default_session_file() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(DEFAULT_SESSION_FILE))
}

fn page(args: PageArgs, default: Page) -> Page {
    Page::new(args.limit.unwrap_or(default.limit), args.skip)
}

/// Fail unless the guard lets the signed-in user open `path`
fn require_screen(app: &mut AppContext, path: &str) -> anyhow::Result<()> {
    let wanted = Route::parse(path).ok_or_else(|| anyhow!("unknown screen {}", path))?;
    let nav = app.navigate(path)?;
    match &nav.outcome {
        GuardOutcome::Render(route) if *route == wanted => Ok(()),
        GuardOutcome::Render(Route::Login) => Err(ClientError::no_session(
            "Not signed in; run `nutricare login` first",
        )
        .into()),
        _ => {
            let role = app
                .user()
                .map(|u| u.role.display_name())
                .unwrap_or("Anonymous");
            Err(ClientError::access_denied(format!("{} users cannot open {}", role, path)).into())
        }
    }
}

async fn execute(app: &mut AppContext, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => {
            let user = app.login(&email, &password).await?;
            print_json(user)
        }
        Command::Signup(args) => signup(app, args).await,
        Command::Logout => {
            app.logout().await?;
            print_json(&json!({"message": "Logged out"}))
        }
        Command::Whoami => {
            let user = app
                .user()
                .ok_or_else(|| ClientError::no_session("Not signed in"))?;
            print_json(&json!({
                "user": user,
                "home": home_for(user.role).path(),
                "menu": menu_json(app.menu()),
            }))
        }
        Command::Routes { path } => match path {
            Some(path) => {
                let nav = app.navigate(&path)?;
                print_json(&navigation_json(&nav))
            }
            None => print_json(&menu_json(app.menu())),
        },
        Command::Patient(command) => patient(app, command).await,
        Command::Nutritionist(command) => nutritionist(app, command).await,
        Command::MealPlans(command) => meal_plans(app, command).await,
        Command::Assignments(command) => assignments(app, command).await,
        Command::Admin(command) => admin(app, command).await,
    }
}

async fn signup(app: &mut AppContext, args: SignupArgs) -> anyhow::Result<()> {
    let role: UserRole = args.role.parse().map_err(|e: String| anyhow!(e))?;
    let request = SignupRequest {
        email: args.email,
        phone: args.phone,
        role,
        password: args.password,
    };
    let user = app.signup(&request).await?;
    print_json(user)
}

async fn patient(app: &mut AppContext, command: PatientCommand) -> anyhow::Result<()> {
    require_screen(app, "/patient")?;
    let patients = app.client().patients();

    match command {
        PatientCommand::Profile => print_json(&patients.get_profile().await?),
        PatientCommand::Plan => {
            let plan = patients.current_meal_plan().await?;
            print_json(&json!({"plan": plan, "totals": plan.totals()}))
        }
        PatientCommand::Progress(args) => {
            let reports = patients
                .progress_reports(page(args, defaults::PROGRESS))
                .await?;
            print_json(&reports)
        }
        PatientCommand::Report(args) => {
            let patient_id = app.user().map(|u| u.id.clone()).unwrap_or_default();
            let report = report_payload(patient_id, args);
            print_json(&app.client().patients().create_progress_report(&report).await?)
        }
    }
}

fn report_payload(patient_id: String, args: ReportArgs) -> ProgressReportCreate {
    ProgressReportCreate {
        patient_id,
        week_start: args.week_start,
        weight_kg: args.weight,
        waist_cm: args.waist,
        photos: Vec::new(),
        adherence_pct: args.adherence,
        energy_levels: args.energy,
        notes: args.notes,
    }
}

async fn nutritionist(app: &mut AppContext, command: NutritionistCommand) -> anyhow::Result<()> {
    let screen = match command {
        NutritionistCommand::Profile => "/nutritionist/profile",
        NutritionistCommand::Patients(_) => "/nutritionist/patients",
        NutritionistCommand::Stats => "/nutritionist",
    };
    require_screen(app, screen)?;
    let nutritionists = app.client().nutritionists();

    match command {
        NutritionistCommand::Profile => print_json(&nutritionists.get_profile().await?),
        NutritionistCommand::Patients(args) => {
            let rows = nutritionists
                .patients(page(args, defaults::PATIENTS))
                .await?;
            print_json(&rows)
        }
        NutritionistCommand::Stats => print_json(&nutritionists.dashboard_stats().await?),
    }
}

async fn meal_plans(app: &mut AppContext, command: MealPlanCommand) -> anyhow::Result<()> {
    if app.user().is_none() {
        bail!(ClientError::no_session("Not signed in; run `nutricare login` first"));
    }
    let plans = app.client().meal_plans();

    match command {
        MealPlanCommand::List { patient_id, page: args } => {
            let filter = MealPlanFilter { patient_id };
            print_json(&plans.list(&filter, page(args, defaults::MEAL_PLANS)).await?)
        }
        MealPlanCommand::Show { id } => {
            let plan = plans.get(&id).await?;
            print_json(&json!({"plan": plan, "totals": plan.totals()}))
        }
    }
}

async fn assignments(app: &mut AppContext, command: AssignmentCommand) -> anyhow::Result<()> {
    require_screen(app, "/admin/assignments")?;
    let assignments = app.client().assignments();

    match command {
        AssignmentCommand::List {
            patient_id,
            nutritionist_id,
            active,
            page: args,
        } => {
            let filter = AssignmentFilter {
                patient_id,
                nutritionist_id,
                active,
            };
            let rows = assignments
                .list(&filter, page(args, defaults::ASSIGNMENTS))
                .await?;
            print_json(&rows)
        }
        AssignmentCommand::Create {
            patient_id,
            nutritionist_id,
            notes,
        } => {
            let mut create = AssignmentCreate::starting_now(patient_id, nutritionist_id);
            create.notes = notes;
            print_json(&assignments.create(&create).await?)
        }
        AssignmentCommand::End { id } => {
            print_json(&assignments.update(&id, &AssignmentUpdate::end_now()).await?)
        }
        AssignmentCommand::Delete { id } => print_json(&assignments.delete(&id).await?),
    }
}

async fn admin(app: &mut AppContext, command: AdminCommand) -> anyhow::Result<()> {
    let screen = match command {
        AdminCommand::Users { .. } | AdminCommand::Suspend { .. } | AdminCommand::Activate { .. } => {
            "/admin/users"
        }
        AdminCommand::Metrics => "/admin/metrics",
        AdminCommand::Pending(_) | AdminCommand::Verify { .. } => "/admin/nutritionists",
    };
    require_screen(app, screen)?;
    let admin = app.client().admin();

    match command {
        AdminCommand::Users {
            role,
            status,
            page: args,
        } => {
            let filter = UserFilter {
                role: role
                    .as_deref()
                    .map(str::parse::<UserRole>)
                    .transpose()
                    .map_err(|e| anyhow!(e))?,
                status: status
                    .as_deref()
                    .map(str::parse::<UserStatus>)
                    .transpose()
                    .map_err(|e| anyhow!(e))?,
            };
            print_json(&admin.users(filter, page(args, defaults::ADMIN_USERS)).await?)
        }
        AdminCommand::Metrics => print_json(&admin.metrics().await?),
        AdminCommand::Pending(args) => {
            let rows = admin
                .pending_nutritionists(page(args, defaults::PENDING_NUTRITIONISTS))
                .await?;
            print_json(&rows)
        }
        AdminCommand::Verify { user_id } => print_json(&admin.verify_nutritionist(&user_id).await?),
        AdminCommand::Suspend { user_id } => {
            let update = UserUpdate::status(UserStatus::Suspended);
            print_json(&admin.update_user(&user_id, &update).await?)
        }
        AdminCommand::Activate { user_id } => {
            let update = UserUpdate::status(UserStatus::Active);
            print_json(&admin.update_user(&user_id, &update).await?)
        }
    }
}
