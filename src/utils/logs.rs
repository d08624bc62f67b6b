use tracing::level_filters::LevelFilter;

pub fn setup_tracing(quiet: bool) {
    let level = if quiet { LevelFilter::OFF } else { LevelFilter::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        // stdout belongs to the menu, logs go to stderr.
        .with_writer(std::io::stderr)
        .json()
        .init();
}
