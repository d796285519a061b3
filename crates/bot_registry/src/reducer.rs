//! Reducer actions and transition logic for the bot registry state container.

use bot_contract::{BotConfigWithPath, BotInfo};

use crate::model::BotState;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_bot`] to produce the next [`BotState`].
pub enum BotAction {
    /// Register a newly created bot in the recent-bot list.
    Create {
        /// Configuration of the bot that was created.
        bot: BotConfigWithPath,
        /// Path the configuration file was written to.
        path: String,
        /// Secret the file was encrypted with, if any.
        secret: Option<String>,
    },
    /// Make a bot the active bot and refresh its recency.
    SetActive {
        /// Configuration to activate.
        bot: BotConfigWithPath,
    },
    /// Replace the recent-bot list with freshly loaded entries.
    Load {
        /// Loaded entries; `None` marks a file that could not be read.
        bots: Vec<Option<BotInfo>>,
    },
    /// Clear the active bot.
    Close,
}

/// Applies a [`BotAction`] to a [`BotState`] snapshot and returns the next snapshot.
///
/// The input snapshot is never mutated; every transition builds a fresh state, so callers
/// can hold on to earlier snapshots for comparison or rollback.
pub fn reduce_bot(state: &BotState, action: BotAction) -> BotState {
    match action {
        BotAction::Create { bot, path, secret } => BotState {
            active_bot: state.active_bot.clone(),
            bot_files: register_bot_file(
                &state.bot_files,
                BotInfo {
                    display_name: bot.name,
                    path,
                    secret,
                },
            ),
        },
        BotAction::SetActive { bot } => {
            let bot_files = promote_recent(&state.bot_files, bot.path.as_deref());
            BotState {
                active_bot: Some(merge_overrides(state.active_bot.as_ref(), bot)),
                bot_files,
            }
        }
        BotAction::Load { bots } => BotState {
            active_bot: state.active_bot.clone(),
            bot_files: bots.into_iter().flatten().collect(),
        },
        BotAction::Close => BotState {
            active_bot: None,
            bot_files: state.bot_files.clone(),
        },
    }
}

/// Decides which session overrides the next active bot carries.
///
/// Overrides survive activation only when the previous active bot and the next one refer
/// to the same configuration file; activating a different bot starts a clean session.
/// Overrides supplied on `next` itself are discarded for the same reason: they can only
/// originate from the session of a previous activation.
pub fn merge_overrides(
    previous_active: Option<&BotConfigWithPath>,
    next: BotConfigWithPath,
) -> BotConfigWithPath {
    let inherited = previous_active
        .filter(|previous| previous.path == next.path)
        .and_then(|previous| previous.overrides.clone());
    BotConfigWithPath {
        overrides: inherited,
        ..next
    }
}

fn register_bot_file(bot_files: &[BotInfo], entry: BotInfo) -> Vec<BotInfo> {
    let mut next: Vec<BotInfo> = bot_files
        .iter()
        .filter(|info| info.path != entry.path)
        .cloned()
        .collect();
    next.insert(0, entry);
    next
}

fn promote_recent(bot_files: &[BotInfo], path: Option<&str>) -> Vec<BotInfo> {
    let mut next = bot_files.to_vec();
    if let Some(index) = path.and_then(|path| next.iter().position(|info| info.path == path)) {
        let entry = next.remove(index);
        next.insert(0, entry);
    }
    next
}
