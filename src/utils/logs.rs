use tracing::Level;

pub fn setup_tracing(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // plain output, log collectors do not render ANSI color codes.
        .with_ansi(false)
        .json()
        .init();
}
