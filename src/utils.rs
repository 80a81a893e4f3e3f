//! Utility functions
use crate::errors::{IssueFilerError, IssueFilerErrorKind};

/// Initialize logging, mapping the -v occurrence count to a level filter.
pub(crate) fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let _ = env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp(None)
        .try_init();
}

/// Get input from the user
pub(crate) fn input() -> Result<String, IssueFilerError> {
    use std::io::{stdin, stdout, Write};
    let mut s = String::new();
    let _ = stdout().flush();
    stdin().read_line(&mut s).map_err(|e| {
        IssueFilerError::new_with_source(
            IssueFilerErrorKind::Input,
            "Did not enter a correct string",
            e,
        )
    })?;
    if let Some('\n') = s.chars().next_back() {
        s.pop();
    }
    if let Some('\r') = s.chars().next_back() {
        s.pop();
    }
    Ok(s)
}

/// Get password from the user
pub(crate) fn get_password() -> Result<String, IssueFilerError> {
    rpassword::read_password().map_err(|e| {
        IssueFilerError::new_with_source(IssueFilerErrorKind::Input, "Error reading password", e)
    })
}
