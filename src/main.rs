use anyhow::Result;
use files_to_bytes::{
    config::Config,
    constants::CONSOLE_TITLE,
    convert::gather,
    settings::SettingsStore,
    ui::{self, Session, terminal},
};
use std::io;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let config = Config::from_cli()?;
    let store = SettingsStore::new(config.settings_path());
    let settings = store.load();

    if let Err(e) = terminal::set_title(CONSOLE_TITLE) {
        warn!("Could not set console title: {e}");
    }

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    // No files: settings prompt only
    if config.is_interactive() {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| "files-to-bytes".to_string());
        Session::new(&store, settings, program)
            .with_clear_screen(terminal::is_terminal())
            .run(&mut input, &mut out)?;
        return Ok(());
    }

    let inputs = gather::expand_paths(&config.paths);
    ui::run_batch(
        &inputs,
        settings,
        &config.outputs_dir(),
        config.wait_for_enter,
        &mut input,
        &mut out,
    )?;
    Ok(())
}
