use super::theme::Gruvbox;
use jot_core::FeedItem;
use jot_core::entry::EntryView;
use jot_core::notify::{Notice, NoticeVariant, NotificationSink};
use jot_core::promo::PromoCard;
use std::io;
use termimad::{
    MadSkin,
    crossterm::{
        cursor::MoveUp,
        execute,
        style::{Color, Stylize},
        terminal::{Clear, ClearType},
    },
};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
    pub short_mode: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: Gruvbox::default_gruvbox_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%A, %d %b %Y".to_string(),
                    use_color: true,
                    short_mode: false,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    pub fn print_info(&self, message: &str) {
        let md = format!("|-|\n| {message} |\n|-|\n");
        if self.opts.use_color {
            self.print_md(&md);
        } else {
            println!("{}", message);
        }
    }

    /// Notices raised by the feed. Regular ones render like any info line;
    /// destructive ones go to stderr so a piped feed stays clean.
    pub fn print_notice(&self, notice: &Notice) {
        match notice.variant {
            NoticeVariant::Destructive => {
                eprintln!("{}: {}", notice.title, notice.description);
            }
            NoticeVariant::Default => {
                self.print_info(&format!("{}: {}", notice.title, notice.description));
            }
        }
    }

    pub fn print_entry_line(&self, entry: &EntryView) {
        let mut date = entry.created_at.format(&self.opts.date_format).to_string();
        let mut time = entry.created_at.format("%H:%M").to_string();
        let mut title = entry.title.trim().to_string();
        let mut id = short_id(&entry.id).to_string();
        let marker = if entry.favorite { "★ " } else { "" };
        if self.opts.use_color {
            date = date.with(Color::Cyan).to_string();
            time = time.with(Color::Blue).to_string();
            title = title.with(Color::Yellow).to_string();
            id = id.with(Color::Green).to_string();
        }
        println!("{} {} - {}{} ({})", date, time, marker, title, id);
    }

    /// Prints a feed sequence. Every item kind renders here, skeletons
    /// included, so callers never match on the items themselves.
    pub fn print_feed(&self, items: &[FeedItem<'_>]) {
        let total = items.len();
        for (i, item) in items.iter().enumerate() {
            match item {
                FeedItem::Placeholder => self.print_placeholder_line(),
                FeedItem::EmptyNotice => {
                    self.print_info("No journal entries yet. Create your first entry!");
                }
                FeedItem::Entry(entry) => {
                    if self.opts.short_mode {
                        self.print_entry_line(entry);
                        continue;
                    }
                    self.print_entry(entry);
                    if i + 1 < total {
                        println!();
                    }
                    if self.opts.use_color {
                        self.print_md("---");
                    } else {
                        println!("---");
                    }
                }
                FeedItem::Promo(card) => self.print_promo(card),
            }
        }
    }

    fn print_entry(&self, entry: &EntryView) {
        let date = entry.created_at.format(&self.opts.date_format).to_string();
        let time = entry.created_at.format("%H:%M").to_string();
        let title = entry.title.trim();
        let marker = if entry.favorite { " ★" } else { "" };
        let heading = format!("## {} {}: {}{}", &date, &time, &title, &marker);

        let body = if entry.body.trim().is_empty() {
            String::new()
        } else {
            let mut parsed_body = entry.body.trim_end().to_string();
            parsed_body = highlight_tags(&parsed_body);
            parsed_body
        };

        let md = if body.is_empty() {
            format!("{heading}\n")
        } else {
            format!("{heading}\n{body}\n")
        };

        if self.opts.use_color {
            self.print_md(&md);
        } else {
            print!("{md}");
        }
    }

    fn print_promo(&self, card: &PromoCard) {
        if self.opts.use_color {
            let md = format!("> *sponsored*\n> **{}**: {}\n", card.headline, card.blurb);
            self.print_md(&md);
        } else {
            println!("[sponsored] {}: {}", card.headline, card.blurb);
        }
    }

    /// One line per skeleton, so the loaded feed can repaint over them.
    fn print_placeholder_line(&self) {
        let bar = "░".repeat(32);
        if self.opts.use_color {
            println!("{}", bar.with(Gruvbox::GRAY));
        } else {
            println!("{bar}");
        }
    }

    /// Clears the last `count` terminal lines.
    pub fn erase_lines(&self, count: u16) -> io::Result<()> {
        let mut out = io::stdout();
        execute!(out, MoveUp(count), Clear(ClearType::FromCursorDown))
    }
}

impl NotificationSink for Renderer {
    fn notify(&self, notice: Notice) {
        self.print_notice(&notice);
    }
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

fn highlight_tags(body: &str) -> String {
    let re = regex::Regex::new(r"(?m)(^|\s)@([A-Za-z0-9_][\w-]*)").unwrap();
    re.replace_all(body, "$1`@$2`").to_string()
}
