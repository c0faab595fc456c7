use std::io::{self, BufRead, Write};
use std::sync::Arc;

use leanpawgress_backend::config::AppConfig;
use leanpawgress_backend::console::Console;
use leanpawgress_backend::domain::{FoodService, ReportService};
use leanpawgress_backend::storage::json::{
    load_food_catalog, load_hazard_catalog, FileKeyValueStore, SessionRepository,
    UserFoodRepository,
};
use leanpawgress_backend::storage::KeyValueStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "pet> ";
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so that stdout only carries console output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::load()?;
    info!("Using data directory {:?}", config.data_directory);

    let store: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(&config.data_directory)?);
    let food_service = FoodService::new(
        load_food_catalog(config.food_catalog_path.as_deref())?,
        load_hazard_catalog(config.hazard_catalog_path.as_deref())?,
        UserFoodRepository::new(store.clone()),
    );
    let mut console = Console::new(
        food_service,
        SessionRepository::new(store),
        ReportService::new(config.weight_tolerance_lb),
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in Console::welcome() {
        writeln!(stdout, "{}", line)?;
    }
    write!(stdout, "{}", PROMPT)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let output = console.handle_line(&line?);
        if output.clear_screen {
            write!(stdout, "{}", CLEAR_SCREEN)?;
        }
        for line in &output.lines {
            writeln!(stdout, "{}", line)?;
        }
        if output.exit {
            return Ok(());
        }
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;
    }

    writeln!(stdout)?;
    writeln!(stdout, "Goodbye! 👋")?;
    Ok(())
}
