use clap::ValueEnum;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Style {
    /// Full entry cards with bodies.
    Long,
    /// One line per entry: date, title and id.
    Short,
}
