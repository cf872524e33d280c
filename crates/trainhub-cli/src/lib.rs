//! Terminal front end showing each role's dashboard as a text table

#![warn(unused_crate_dependencies)]

pub mod cli;
pub mod configuration;
pub mod dashboard;
pub mod render;
pub mod tracing;

mod warning_suppress {
    // Only used by the binary
    use tokio as _;
}

use anyhow::{bail, Context as _};
use cli::{Command, LoginArgs};
use configuration::Configuration;
use strum::IntoEnumIterator as _;
use trainhub_client_core::{Client, TalentAssistant};
use trainhub_shared::{
    accounts::{account_overview, filter_by_role},
    coursework::pending_count,
    fixtures::{
        demo_departments, demo_tasks, demo_test_results, demo_trainees, demo_upcoming_tests,
        demo_users,
    },
    reports::ExecutiveSummary,
    routes::{find_protected_route, GuardOutcome},
    table::{Record, TableView},
    uac::{AuthError, Role},
};

/// Needed to ask the talent assistant
pub const PERMISSION_MANAGE_HIRING: &str = "manage_hiring";

fn no_cb() {}

/// Options applied to the main table of a dashboard
#[derive(Debug, Default)]
pub struct ViewOptions {
    pub search: Option<String>,
    pub sort: Vec<String>,
    pub role: Option<Role>,
}

pub async fn run(command: Command, configuration: &Configuration) -> anyhow::Result<()> {
    match command {
        Command::Routes => {
            print!("{}", routes_text());
            Ok(())
        }
        Command::Dashboard {
            login,
            search,
            sort,
            role,
        } => {
            let client = login_client(login, configuration).await?;
            let options = ViewOptions { search, sort, role };
            let result = dashboard_text(&client, &options).map(|text| print!("{text}"));
            client.logout();
            result
        }
        Command::Ask { login, query } => {
            let client = login_client(login, configuration).await?;
            let result = ask(&client, &query, configuration).await;
            client.logout();
            result
        }
    }
}

fn routes_text() -> String {
    let mut result = String::new();
    for role in Role::iter() {
        let path = role.dashboard_path();
        let allowed = find_protected_route(path)
            .map(|route| {
                route
                    .allowed_roles
                    .iter()
                    .map(|r| r.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();
        result.push_str(&format!("{:<12} {path:<24} allowed: {allowed}\n", role.to_string()));
    }
    result
}

/// Extra line shown under a failed login, mirrors the demo account panel of
/// the login form
fn login_failure_hint(err: &AuthError) -> Option<String> {
    if !err.is_invalid_credentials() {
        return None;
    }
    let accounts = demo_users()
        .ok()?
        .iter()
        .map(|user| format!("  {:<12} {}", user.info.role.title(), user.info.email))
        .collect::<Vec<_>>()
        .join("\n");
    Some(format!("Demo accounts:\n{accounts}"))
}

#[::tracing::instrument(skip(login, configuration), fields(email = %login.email))]
async fn login_client(login: LoginArgs, configuration: &Configuration) -> anyhow::Result<Client> {
    let directory = demo_users().context("failed to load user directory")?;
    let client = Client::new(directory, configuration.auth.to_settings());
    let result = client
        .authenticate(login.into(), no_cb)
        .await
        .context("login was cancelled")?;
    if let Err(e) = result {
        if let Some(hint) = login_failure_hint(&e) {
            eprintln!("{hint}");
        }
        return Err(e.into());
    }
    Ok(client)
}

fn dashboard_text(client: &Client, options: &ViewOptions) -> anyhow::Result<String> {
    let Some(user) = client.user_info() else {
        bail!("session expired");
    };
    let route = client.dashboard_route();
    match client.guard(route) {
        GuardOutcome::Allow => {}
        outcome => match outcome.redirect_path() {
            Some(redirect) => bail!("not allowed to open {route}, redirected to {redirect}"),
            None => bail!("no dashboard at {route}"),
        },
    }
    if options.role.is_some() && user.role != Role::Admin {
        eprintln!("--role only filters the admin user list, ignored");
    }

    let mut text = format!(
        "{} Dashboard ({route})\nWelcome back, {}\n",
        user.role.title(),
        user.name
    );
    if let Some(remaining) = client.session_expires_at().and_then(|t| t.remaining()) {
        text.push_str(&format!("Session expires in {remaining} seconds\n"));
    }
    text.push('\n');

    match user.role {
        Role::Admin => {
            let directory = demo_users().context("failed to load user directory")?;
            let accounts = filter_by_role(
                account_overview(&directory, &demo_trainees()),
                options.role,
            );
            text.push_str(&main_table(dashboard::accounts_table(accounts), options));
        }
        Role::Hr => {
            text.push_str(&main_table(dashboard::hr_trainees_table(demo_trainees()), options));
        }
        Role::Facilitator => {
            let table = dashboard::facilitator_students_table(demo_trainees());
            text.push_str(&main_table(table, options));
        }
        Role::Trainee => {
            text.push_str("Recent Test Scores\n");
            text.push_str(&main_table(dashboard::test_results_table(demo_test_results()), options));
            text.push_str("\nUpcoming Tests\n");
            let upcoming = dashboard::upcoming_tests_table(demo_upcoming_tests());
            text.push_str(&render::table_to_text(&upcoming.render()));
            let tasks = demo_tasks();
            text.push_str(&format!("\nTasks ({} pending)\n", pending_count(&tasks)));
            text.push_str(&render::table_to_text(&dashboard::tasks_table(tasks).render()));
        }
        Role::Manager => {
            for (label, value) in ExecutiveSummary::for_roster(&demo_trainees()).figures() {
                text.push_str(&format!("{label:<18} {value}\n"));
            }
            text.push('\n');
            let table = dashboard::departments_table(demo_departments());
            text.push_str(&main_table(table, options));
        }
    }
    Ok(text)
}

fn main_table<T: Record>(mut table: TableView<T>, options: &ViewOptions) -> String {
    if let Some(query) = &options.search {
        table.set_search_query(query.as_str());
    }
    for key in &options.sort {
        if !table.activate_column(key) {
            eprintln!("Column {key:?} cannot be sorted, ignored");
        }
    }
    render::table_to_text(&table.render())
}

async fn ask(client: &Client, query: &str, configuration: &Configuration) -> anyhow::Result<()> {
    if !client.has_permission(PERMISSION_MANAGE_HIRING) {
        bail!("the talent assistant requires the {PERMISSION_MANAGE_HIRING} permission");
    }
    let assistant = TalentAssistant::with_response_delay(
        demo_trainees(),
        configuration.assistant.response_delay(),
    );
    let Some(rx) = assistant.send(query, no_cb) else {
        bail!("nothing to ask");
    };
    let reply = rx.await.context("assistant stopped before replying")?;
    println!("{}", reply.text);
    for (i, candidate) in reply.candidates.iter().enumerate() {
        println!(
            "{}. {} - {} ({}) avg score {}%",
            i + 1,
            candidate.name,
            candidate.track,
            candidate.course,
            candidate.avg_score
        );
    }
    Ok(())
}
