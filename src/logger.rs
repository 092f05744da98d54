use std::io::IsTerminal;

use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Installs the global logger.
///
/// Messages at or above `level` are written to stderr as
/// `[LEVEL] [target] message`, so they never mix with the variables printed on
/// stdout. Levels are colored only when stderr is a terminal.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let colors = std::io::stderr().is_terminal().then(|| {
                                                    ColoredLevelConfig::new().error(Color::Red)
                                                                             .warn(Color::Yellow)
                                                                             .info(Color::Green)
                                                                             .debug(Color::Blue)
                                                                             .trace(Color::Magenta)
                                                });

    fern::Dispatch::new().format(move |out, message, record| match colors {
                             Some(colors) => out.finish(format_args!("[{:<5}] [{}] {}",
                                                                     colors.color(record.level()),
                                                                     record.target(),
                                                                     message)),
                             None => out.finish(format_args!("[{:<5}] [{}] {}",
                                                             record.level(),
                                                             record.target(),
                                                             message)),
                         })
                         .level(level)
                         .chain(std::io::stderr())
                         .apply()
}
