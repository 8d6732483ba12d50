mod deck_vm;
mod time_fmt;

pub use deck_vm::{DeckDetailVm, DeckRowVm, map_deck_detail, map_deck_rows};
pub use time_fmt::format_date;
