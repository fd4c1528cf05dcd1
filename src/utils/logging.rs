use log::{debug, LevelFilter};

/// Initialise the global logger; `RUST_LOG` takes precedence over `debug_mode`
pub fn init_logging(debug_mode: bool) {
    let level = if debug_mode { LevelFilter::Debug } else { LevelFilter::Info };

    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();

    // A logger installed earlier (tests, embedding binaries) keeps receiving records.
    if let Err(e) = result {
        debug!("Keeping the existing logger: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_keeps_first_logger() {
        init_logging(true);
        let level = log::max_level();
        init_logging(false);
        assert_eq!(log::max_level(), level);
    }
}
