//! # Logging
//! src/logger.rs
//!
//! Inicializa `simplelog` como backend de los macros de `log`. Todo va a
//! stderr con timestamp RFC 3339 y el thread que atiende la conexión.

use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

fn prepare_logger_config() -> simplelog::Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Info)
        .build()
}

/// Instala el logger de terminal. Solo puede llamarse una vez por proceso.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    TermLogger::init(
        level,
        prepare_logger_config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
}
