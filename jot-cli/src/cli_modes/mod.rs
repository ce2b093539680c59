mod cli_mode;
mod edit_mode;
mod editor_utils;
mod fav_mode;
mod feed_mode;
mod id_lookup;
mod use_color;
mod write_mode;

pub use cli_mode::CliModeResult;
pub use edit_mode::edit_mode;
pub use fav_mode::fav_mode;
pub use feed_mode::feed_mode;
pub use use_color::use_color;
pub use write_mode::write_mode;
