pub mod model;
pub mod reducer;

pub use model::*;
pub use reducer::{merge_overrides, reduce_bot, BotAction};
