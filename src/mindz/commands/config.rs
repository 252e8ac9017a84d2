use crate::commands::{CmdMessage, CmdResult, MindzPaths};
use crate::config::MindzConfig;
use crate::error::Result;
use crate::model::Scope;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetNewTopicText(String),
}

pub fn run(paths: &MindzPaths, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    let mut config = MindzConfig::load(&dir).unwrap_or_default();
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {}
        ConfigAction::SetNewTopicText(value) => {
            config.set_new_topic_text(&value);
            config.save(&dir)?;
            result.add_message(CmdMessage::success(format!(
                "new-text set to {}",
                config.get_new_topic_text()
            )));
        }
    }

    Ok(result.with_config(config))
}
