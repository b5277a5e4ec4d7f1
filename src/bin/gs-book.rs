use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use grand_service::client::{
    BookingForm, HttpBookingApi, Notice, PendingStore, SubmissionController, SubmitOutcome,
};
use grand_service::dom::Element;
use grand_service::i18n::{LocaleTable, Localizer};
use grand_service::storage::{FileStorage, Storage};

/// Submit a booking to a Grand Service server, keeping it locally when the
/// server is down.
#[derive(Parser)]
#[command(name = "gs-book", version)]
struct Cli {
    /// Base URL of the booking server
    #[arg(long, env = "GS_SERVER_URL", default_value = "http://localhost:3000")]
    server: String,

    /// File holding the saved language and locally pending bookings
    #[arg(long, env = "GS_STORAGE", default_value = "gs-client.json")]
    storage: PathBuf,

    /// Directory with <code>.json translation tables (embedded tables otherwise)
    #[arg(long, env = "I18N_DIR")]
    i18n_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send a booking request
    Submit {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        service: String,
        /// Date and time, e.g. 2025-01-01T10:00
        #[arg(long, default_value = "")]
        datetime: String,
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Print bookings saved locally while the server was unreachable
    Pending,
    /// Choose the interface language (ru, ro, en)
    Language { code: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(&cli.storage));
    let table = match &cli.i18n_dir {
        Some(dir) => Arc::new(LocaleTable::from_dir(dir)?),
        None => LocaleTable::embedded(),
    };
    let browser_hint = std::env::var("LANG").ok();
    let mut localizer = Localizer::new(table, storage.clone(), browser_hint.as_deref());
    let pending = PendingStore::new(storage);

    match cli.command {
        Command::Submit {
            name,
            phone,
            service,
            datetime,
            comment,
        } => {
            let mut form = BookingForm {
                name,
                phone,
                service,
                datetime,
                comment,
            };
            let controller =
                SubmissionController::new(Box::new(HttpBookingApi::new(&cli.server)), pending);

            let result = controller.submit(&mut form).await;
            let notice = Notice::for_result(&result);
            println!("{}", localizer.tr_or(notice.key(), notice.fallback()));

            match result {
                Ok(SubmitOutcome::Confirmed { booking, .. }) => {
                    println!("{}", serde_json::to_string_pretty(&booking)?);
                }
                Ok(SubmitOutcome::Pending(saved)) => {
                    println!("{}", serde_json::to_string_pretty(&saved)?);
                }
                Err(e) => {
                    tracing::debug!(error = %e, "submission not accepted");
                    std::process::exit(1);
                }
            }
        }
        Command::Pending => {
            println!("{}", serde_json::to_string_pretty(&pending.load())?);
        }
        Command::Language { code } => {
            let mut page = Element::new("body");
            let locale = localizer.switch(&code, &mut page, pending.count());
            println!("{locale}");
        }
    }

    Ok(())
}
