use std::io;

use tracing_subscriber::EnvFilter;

use bubble_sort::demo;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so the report on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    demo::run(&mut stdout.lock())
}
