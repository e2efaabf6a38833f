/// How much the binaries log to stderr. Plans and verdicts go to stdout and
/// are unaffected.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, strum_macros::Display)]
#[clap(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Verbosity {
    /// Errors only
    Silent,
    /// Task summary, search progress and statistics
    #[default]
    Normal,
    /// Per-schema grounding counts, the initial state
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}
