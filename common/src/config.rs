#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Seed for the building generator.
    ///
    /// `None` draws a fresh seed from the operating system, so every run differs.
    pub seed: Option<u64>,
    /// Quiet level. Anything above zero hides the banner and section headers.
    pub quiet: u8,
    pub no_banner: bool,
    /// Number of `-v` flags; raises the log level from `warn` up to `trace`.
    pub verbosity: u8,
}
