use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Log verbosity, ordered from least to most output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    fn to_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    fn to_filter(self) -> String {
        let level = self.to_level();
        format!("filetype_selector={level}")
    }

    /// File and line are only worth the noise once debugging.
    fn shows_source_location(self) -> bool {
        self >= Self::Debug
    }
}

/// Installs the global subscriber on stderr so stdout carries only rows.
///
/// `RUST_LOG` takes precedence over the flags. Returns false when a
/// subscriber was already installed, in which case nothing changes.
pub fn init(verbosity: Verbosity) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.to_filter()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(verbosity.shows_source_location())
        .with_line_number(verbosity.shows_source_location())
        .compact();

    let installed = match verbosity {
        Verbosity::Quiet => subscriber.with_writer(std::io::sink).try_init(),
        Verbosity::Normal => subscriber.without_time().try_init(),
        _ => subscriber.try_init(),
    };
    installed.is_ok()
}
