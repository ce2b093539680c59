use clap::{ArgGroup, Parser};

use super::style::Style;
use crate::render::ColorMode;

/// jot — Personal journal, one entry at a time
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("feed_mode").args(["favorites"])),
    group(ArgGroup::new("fav_mode").args(["fav"])),
    group(ArgGroup::new("edit_mode").args(["edit"])),
    group(ArgGroup::new("write_mode").args(["new", "text"]).multiple(true)),
    group(ArgGroup::new("solo").args(["path"]).conflicts_with_all(["feed_mode", "fav_mode", "edit_mode", "write_mode"])),
)]
pub struct Cli {
    /// Prints the journal root directory
    #[arg(long, short)]
    pub path: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Output style: "long" or "short". Short style shows one line per entry,
    /// including the id that `--fav` and `--edit` take.
    #[arg(long, short, value_enum, env = "JOT_STYLE", default_value_t = Style::Long)]
    pub style: Style,

    /// Only show entries marked as favorites.
    #[arg(long, short)]
    pub favorites: bool,
    /// Toggle the favorite mark of an entry, by id or by a unique id prefix
    /// (e.g. `jot --fav 9b1c`). Find ids with `jot --style short`.
    #[arg(long)]
    pub fav: Option<String>,
    /// Opens your $EDITOR with an entry, by id or by a unique id prefix.
    /// eg. `jot --edit 9b1c`
    #[arg(long, short)]
    pub edit: Option<String>,
    /// Opens your $EDITOR to write a new entry.
    #[arg(long, short)]
    pub new: bool,

    /// Free text for insert mode (e.g., `jot Slept past noon. Woke up to rain`).
    #[arg()]
    pub text: Vec<String>,
}

impl Cli {
    pub fn new() -> Self {
        let cli = Cli::parse();
        cli
    }
}
