use crate::core::domain::LogFormat;

// installs the global subscriber; logs go to stderr so they never mix with the script output on stdout
pub fn setup_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Plain => {
            builder.init();
        }
        LogFormat::Json => {
            // the collector stamps ingestion time, so no local timestamps or colors here.
            builder.with_ansi(false).without_time().json().init();
        }
    }
}
