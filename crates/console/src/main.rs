//! `uavfleet` -- terminal client of the UAV fleet backend.
//!
//! Signs in, runs one screen and prints its tables, countdown banners and
//! messages.
//!
//! # Environment variables
//!
//! | Variable            | Required | Default                 | Description                 |
//! |---------------------|----------|-------------------------|-----------------------------|
//! | `BACKEND_URL`       | no       | `http://localhost:8080` | Base URL of the backend     |
//! | `UAVFLEET_LOGIN`    | yes      | --                      | Login used to sign in       |
//! | `UAVFLEET_PASSWORD` | yes      | --                      | Password used to sign in    |
//! | `RUST_LOG`          | no       | `uavfleet_console=info,uavfleet_client=info` | Log filter |

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uavfleet_client::{ClientConfig, FileUpload, FleetApi, FleetGateway, SessionContext};
use uavfleet_console::notice::{Notice, CONFIRM_DELETE};
use uavfleet_console::render;
use uavfleet_console::screens::{
    ActivityLog, AddUserForm, AddVehicleForm, DocumentsTab, EngineTab, FailureHistory,
    FailuresTab, Gallery, LoginScreen, MaintenanceTab, UserList, VehicleCard, VehicleTable,
};
use uavfleet_core::statuses::DocType;
use uavfleet_core::types::DbId;

#[derive(Parser)]
#[command(name = "uavfleet", about = "UAV fleet maintenance console")]
struct Cli {
    /// Base URL of the fleet backend
    #[arg(long, env = "BACKEND_URL")]
    backend_url: Option<String>,

    #[arg(long, env = "UAVFLEET_LOGIN")]
    login: String,

    #[arg(long, env = "UAVFLEET_PASSWORD", hide_env_values = true)]
    password: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fleet table
    Vehicles {
        /// Exact vehicle type, e.g. VT-45
        #[arg(long = "type")]
        vehicle_type: Option<String>,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Delete vehicles by number
    DeleteVehicles {
        #[arg(required = true)]
        vehicle_ids: Vec<String>,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// User list
    Users {
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Audit log
    Activity {
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Vehicle card with the insurance countdown
    Card {
        uav_id: String,
        /// New insurance expiry date, dd.MM.yyyy
        #[arg(long)]
        set_insurance: Option<String>,
    },
    /// Maintenance (TO) records and the nearest inspection
    Maintenance { uav_id: String },
    /// Engine log and the countdown to the next engine TO
    Engine { uav_id: String },
    /// Failures of a vehicle
    Failures { uav_id: String },
    /// Handling history of one failure
    History { uav_id: String, failure_id: DbId },
    /// Register a vehicle
    AddVehicle {
        vehicle_type: String,
        vehicle_id: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Register a user
    AddUser {
        surname: String,
        lastname: String,
        login: String,
        password: String,
        /// USER or ADMIN
        role: String,
    },
    /// Document slot: Slg, EvalAct or Insurance
    Docs {
        uav_id: String,
        doc: String,
        /// Save the stored PDF into this directory
        #[arg(long)]
        save_to: Option<PathBuf>,
        /// Upload this PDF into the slot
        #[arg(long)]
        upload: Option<PathBuf>,
    },
    /// Photo gallery
    Gallery {
        uav_id: String,
        /// Upload this image
        #[arg(long)]
        upload: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uavfleet_console=info,uavfleet_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = cli
        .backend_url
        .map(ClientConfig::new)
        .unwrap_or_else(ClientConfig::from_env);
    tracing::info!(backend_url = %config.backend_url, "Starting uavfleet");

    let gateway: Arc<dyn FleetGateway> = Arc::new(FleetApi::new(&config, SessionContext::new()));

    let mut landing = LoginScreen::new(gateway.clone());
    if landing.submit(&cli.login, &cli.password).await.is_none() {
        bail!("{}", landing.login_error().unwrap_or_default());
    }

    let result = run(cli.command, gateway).await;
    landing.logout().await;
    result
}

async fn run(command: Command, gateway: Arc<dyn FleetGateway>) -> anyhow::Result<()> {
    let today = Local::now().date_naive();

    match command {
        Command::Vehicles {
            vehicle_type,
            search,
        } => {
            let mut screen = VehicleTable::new(gateway);
            screen.load().await;
            screen.set_type_filter(vehicle_type);
            screen.set_search(search);
            println!("{}", render::vehicles(screen.rows()));
            report(&screen.notice)
        }
        Command::DeleteVehicles { vehicle_ids, yes } => {
            if !yes && !confirm().await? {
                return Ok(());
            }
            let mut screen = VehicleTable::new(gateway);
            screen.load().await;
            screen.delete(&vehicle_ids).await;
            println!("{}", render::vehicles(screen.rows()));
            report(&screen.notice)
        }
        Command::Users { search } => {
            let mut screen = UserList::new(gateway);
            screen.load().await;
            screen.set_search(search);
            println!("{}", render::users(screen.rows()));
            report(&screen.notice)
        }
        Command::Activity { search } => {
            let mut screen = ActivityLog::new(gateway);
            screen.load().await;
            screen.set_search(&search);
            println!("{}", render::activities(screen.rows()));
            report(&screen.notice)
        }
        Command::Card {
            uav_id,
            set_insurance,
        } => {
            let mut screen = VehicleCard::new(gateway, uav_id);
            screen.load().await;
            if let Some(date) = set_insurance {
                screen.save_insurance(&date).await;
            }
            println!("БВС {} ({})", screen.uav_id(), screen.mode());
            for line in screen.draft.rows() {
                println!("  {line}");
            }
            println!(
                "{}",
                render::insurance_banner(screen.insurance_countdown(today).as_ref())
            );
            report(&screen.notice)
        }
        Command::Maintenance { uav_id } => {
            let mut screen = MaintenanceTab::new(gateway, uav_id);
            screen.load().await;
            println!("{}", render::inspection_banner(&screen.countdown(today)));
            println!("{}", render::maintenance(screen.table.rows()));
            report(&screen.notice)
        }
        Command::Engine { uav_id } => {
            let mut screen = EngineTab::new(gateway, uav_id);
            screen.load().await;
            println!("{}", render::engine_banner(&screen.countdown()));
            println!("{}", render::engine_log(screen.table.rows()));
            report(&screen.notice)
        }
        Command::Failures { uav_id } => {
            let mut screen = FailuresTab::new(gateway, uav_id);
            screen.load().await;
            println!("{}", render::failures(screen.table.rows()));
            report(&screen.notice)
        }
        Command::History { uav_id, failure_id } => {
            let mut screen = FailureHistory::new(gateway, uav_id, failure_id);
            screen.load().await;
            println!("{}", render::failure_steps(screen.table.rows()));
            report(&screen.notice)
        }
        Command::AddVehicle {
            vehicle_type,
            vehicle_id,
            description,
        } => {
            let mut screen = AddVehicleForm::new(gateway);
            screen.form.vehicle_type = vehicle_type;
            screen.form.vehicle_id = vehicle_id;
            screen.form.description = description;
            screen.submit().await;
            for (field, messages) in screen.field_errors() {
                println!("{field}: {}", messages.join(", "));
            }
            report(&screen.notice)
        }
        Command::AddUser {
            surname,
            lastname,
            login,
            password,
            role,
        } => {
            let mut screen = AddUserForm::new(gateway);
            screen.form.surname = surname;
            screen.form.lastname = lastname;
            screen.form.login = login;
            screen.form.password = password;
            screen.form.role = role;
            screen.submit().await;
            for (field, messages) in screen.field_errors() {
                println!("{field}: {}", messages.join(", "));
            }
            report(&screen.notice)
        }
        Command::Docs {
            uav_id,
            doc,
            save_to,
            upload,
        } => {
            let doc: DocType = doc.parse()?;
            let mut card = VehicleCard::new(gateway.clone(), uav_id);
            card.load().await;
            report(&card.notice)?;

            let mut screen = DocumentsTab::new(gateway, card.info().clone(), doc);
            screen.load().await;
            if let Some(path) = upload {
                screen.upload(Some(read_upload(&path).await?), Utc::now()).await;
            }
            println!("{}", screen.title());
            match screen.added_banner() {
                Some(banner) => println!("{banner}"),
                None if !screen.has_content() => println!("Документ отсутствует"),
                None => {}
            }
            if let (Some(dir), Some(bytes)) = (save_to, screen.content()) {
                let path = dir.join(screen.download_name(today));
                tokio::fs::write(&path, bytes)
                    .await
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Сохранено: {}", path.display());
            }
            report(&screen.notice)
        }
        Command::Gallery { uav_id, upload } => {
            let mut screen = Gallery::new(gateway, uav_id);
            match upload {
                Some(path) => screen.upload(Some(read_upload(&path).await?)).await,
                None => screen.load().await,
            }
            for image in screen.images() {
                println!("#{}: {} байт", image.image_id, image.bytes.len());
            }
            report(&screen.notice)
        }
    }
}

/// Ask before deleting; anything but "y" declines.
async fn confirm() -> anyhow::Result<bool> {
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(format!("{CONFIRM_DELETE} [y/N] ").as_bytes())
        .await?;
    stdout.flush().await?;

    let mut answer = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut answer)
        .await
        .context("reading confirmation")?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

async fn read_upload(path: &Path) -> anyhow::Result<FileUpload> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(FileUpload::new(file_name, bytes))
}

/// Print the screen's message. An expired session ends the run.
fn report(notice: &Notice) -> anyhow::Result<()> {
    if notice.session_expired() {
        bail!("{}", notice.message.as_deref().unwrap_or_default());
    }
    if let Some(message) = &notice.message {
        println!("{message}");
    }
    Ok(())
}
