use crate::consts;
use env_logger::{Builder, Env, Target};
use std::path::Path;
use thiserror::Error;

/// Send log messages to the file at `path`, truncating it first.  The log
/// level is taken from the environment variable named by
/// [`consts::LOG_ENV_VAR`], defaulting to `info`.
///
/// The terminal belongs to the game display while it runs, so there is no
/// logging to stderr; without a log file, log messages are discarded.
pub(crate) fn init(path: &Path) -> Result<(), LogError> {
    let file = fs_err::File::create(path).map_err(LogError::Open)?;
    Builder::from_env(Env::new().filter_or(consts::LOG_ENV_VAR, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;
    Ok(())
}

#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("failed to open log file")]
    Open(#[source] std::io::Error),
    #[error("failed to install logger")]
    Install(#[from] log::SetLoggerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unopenable_log_file() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("no-such-dir").join("torsnake.log");
        assert!(matches!(init(&path), Err(LogError::Open(_))));
    }
}
