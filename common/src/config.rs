pub struct Config {
    /// Suppresses diagnostic log lines.
    ///
    /// Does not affect validation output.
    pub quiet: bool,
}
