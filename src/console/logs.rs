use super::Args;
use anyhow::Context;

/// Initialize terminal logging, plus a debug log file when asked for.
/// The terminal only shows warnings unless `--verbose`, so log lines stay
/// out of the way of the game itself.
pub fn log(args: &Args) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Warn,
    };
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )];
    if let Some(ref path) = args.log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("create log file {}", path.display()))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers).context("initialize logger")
}
