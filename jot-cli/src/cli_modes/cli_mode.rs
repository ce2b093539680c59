/// What a CLI mode did with the invocation.
pub enum CliModeResult {
    /// The mode handled it; stop dispatching.
    Finish,
    /// The mode was not asked for; try the next one.
    NothingToDo,
}
