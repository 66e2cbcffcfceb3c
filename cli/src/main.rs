//! Operator CLI for the rack grid: view a group, watch it live, or push a
//! bulk configuration.

mod render;

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

use grid::engine::GridEngine;
use rackboard::api::{ApiError, HttpApi, RackApi};
use rackboard::dashboard::Dashboard;
use rackboard::feed::poll_interval;
use rackboard::session::{GroupSession, SubmitError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("pass at least one --location")]
    NoLocations,
    #[error("pass at least one --material")]
    NoMaterials,
    #[error("unknown location code for this group: {0}")]
    UnknownLocation(String),
    #[error("group has no rack locations")]
    EmptyGroup,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

#[derive(Parser, Debug)]
#[command(name = "rackboard-cli", about = "Rack grid viewer and bulk-configuration CLI")]
struct Cli {
    #[arg(long, env = "RACKBOARD_BASE_URL", default_value = rackboard::api::DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a group's racks and statuses once and print the grid.
    Show {
        group_id: String,
        /// Print the per-location map view instead of the table.
        #[arg(long, default_value_t = false)]
        map: bool,
    },
    /// Keep the grid on screen, re-rendering on every poll tick.
    Watch {
        group_id: String,
        /// Poll cadence override in milliseconds.
        #[arg(long, env = "RACKBOARD_POLL_INTERVAL_MS")]
        interval_ms: Option<u64>,
    },
    /// Assign materials to a set of locations in one request.
    Configure {
        group_id: String,
        #[arg(long = "location")]
        locations: Vec<String>,
        #[arg(long = "material")]
        materials: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let api = HttpApi::new(cli.base_url);

    match cli.command {
        Command::Show { group_id, map } => show(&api, &group_id, map).await,
        Command::Watch { group_id, interval_ms } => watch(api, &group_id, interval_ms).await,
        Command::Configure { group_id, locations, materials } => {
            configure(&api, &group_id, locations, materials).await
        }
    }
}

async fn show(api: &HttpApi, group_id: &str, map: bool) -> Result<(), CliError> {
    let racks = api.list_racks(group_id).await?;
    let mut engine = GridEngine::from_racks(group_id, racks);
    engine.apply_statuses(api.poll_status(group_id).await?);

    if map {
        print!("{}", render::map(&engine));
    } else {
        print!("{}", render::table(&engine));
        print!("{}", render::legend());
    }
    Ok(())
}

async fn watch(api: HttpApi, group_id: &str, interval_ms: Option<u64>) -> Result<(), CliError> {
    let interval = interval_ms.map_or_else(poll_interval, Duration::from_millis);
    let mut dashboard = Dashboard::with_interval(Arc::new(api), interval);
    dashboard.open_group(group_id).await?;

    loop {
        if dashboard.pump_next().await {
            let Some(session) = dashboard.session() else { break };
            println!("group {group_id}");
            print!("{}", render::table(session.engine()));
            print!("{}", render::legend());
        }
    }
    Ok(())
}

async fn configure(
    api: &HttpApi,
    group_id: &str,
    locations: Vec<String>,
    materials: Vec<String>,
) -> Result<(), CliError> {
    // Mirror the session's preconditions before fetching anything.
    if locations.is_empty() {
        return Err(CliError::NoLocations);
    }
    if materials.is_empty() {
        return Err(CliError::NoMaterials);
    }

    let racks = api.list_racks(group_id).await?;
    let mut session = GroupSession::new(group_id, racks);
    if session.engine().is_empty() {
        return Err(CliError::EmptyGroup);
    }

    for code in &locations {
        if !session.engine_mut().toggle_cell(code) {
            return Err(CliError::UnknownLocation(code.clone()));
        }
    }

    session.submit(api, materials).await?;
    println!("configured {} location(s) in group {group_id}", locations.len());
    Ok(())
}
