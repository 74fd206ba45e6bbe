use std::error::Error;
use library_catalog::core::domain::{Configuration, LogFormat};
use library_catalog::core::repository::RepositoryStore;
use library_catalog::demo::run_script;
use library_catalog::utils::logging::setup_tracing;

const DEV_MODE: bool = true;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = if DEV_MODE {
        Configuration::new("dev")
    } else {
        Configuration::new("prod").with_log_format(LogFormat::Json)
    };
    setup_tracing(config.log_format);

    for line in run_script(&config, &RepositoryStore::default()).await? {
        println!("{}", line);
    }
    Ok(())
}
