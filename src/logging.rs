// src/logging.rs
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::args::LogOptions;

/// Level requested on the command line, if any. `None` defers to `RUST_LOG`.
pub fn level_from_flags(opts: &LogOptions) -> Option<LevelFilter> {
    if opts.quiet {
        return Some(LevelFilter::Error);
    }
    match opts.verbose {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

/// Install the stderr logger. Stdout stays reserved for reports and payloads.
pub fn init(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.target(Target::Stderr).format_timestamp(None);
    // A second init (tests) is harmless.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_levels() {
        let opts = |verbose, quiet| LogOptions { verbose, quiet };
        assert_eq!(level_from_flags(&opts(0, false)), None);
        assert_eq!(level_from_flags(&opts(1, false)), Some(LevelFilter::Info));
        assert_eq!(level_from_flags(&opts(2, false)), Some(LevelFilter::Debug));
        assert_eq!(level_from_flags(&opts(5, false)), Some(LevelFilter::Trace));
        assert_eq!(level_from_flags(&opts(0, true)), Some(LevelFilter::Error));
    }
}
