use crate::config::get_config;
use crate::errors::{KarirError, KarirResult};
use flexi_logger::{FileSpec, Logger, LoggerHandle};

/// Starts the file logger. Stdout belongs to the terminal UI, so everything
/// goes to `karir.log` next to the chats file. The returned handle must stay
/// alive for the duration of the program.
pub fn init() -> KarirResult<LoggerHandle> {
    let config = get_config();

    Logger::try_with_env_or_str(&config.log_spec)
        .map_err(|e| KarirError::config_error(format!("invalid log spec: {}", e)))?
        .log_to_file(
            FileSpec::default()
                .basename("karir")
                .suppress_timestamp(),
        )
        .start()
        .map_err(|e| KarirError::config_error(format!("failed to start logger: {}", e)))
}
