use bot_contract::{BotConfigWithPath, BotInfo};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotState {
    pub active_bot: Option<BotConfigWithPath>,
    pub bot_files: Vec<BotInfo>,
}

impl BotState {
    pub fn bot_by_path(&self, path: &str) -> Option<&BotInfo> {
        self.bot_files.iter().find(|info| info.path == path)
    }

    pub fn active_bot_path(&self) -> Option<&str> {
        self.active_bot.as_ref().and_then(|bot| bot.path.as_deref())
    }
}
