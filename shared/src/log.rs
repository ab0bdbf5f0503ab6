use tracing_subscriber::{
    fmt::{format, time::ChronoLocal},
    EnvFilter,
};

// stdout is reserved for challenge results, every log line goes to stderr
pub fn init_log() {
    let format = format::format()
        .with_level(true)
        .with_target(false)
        .with_thread_names(true)
        .with_timer(ChronoLocal::new("[%m-%d %H:%M:%S%.3f]".to_string()))
        .compact();

    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .event_format(format)
        .init();
}
