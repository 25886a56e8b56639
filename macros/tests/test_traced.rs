#[cfg(test)]
mod tests {
    use mathematica_macros::test_traced;
    use tracing::{debug, error, info, trace};

    #[test_traced("INFO")]
    fn test_info_level() {
        info!("This is an info log");
        debug!("This is a debug log (won't be shown)");
        assert_eq!(2 + 2, 4);
    }

    #[test_traced]
    fn test_default_level() {
        debug!("This is a debug log");
        trace!("This is a trace log (won't be shown)");
        assert_eq!(3 * 3, 9);
    }

    #[test_traced("error")]
    fn test_lowercase_level() {
        error!("This is an error log");
        assert_eq!(5 * 2, 10);
    }

    #[test_traced("TRACE")]
    #[should_panic(expected = "boom")]
    fn test_should_panic() {
        trace!("about to panic");
        panic!("boom");
    }

    #[test_traced]
    fn test_returns_result() -> Result<(), String> {
        debug!("returning ok");
        Ok(())
    }
}
