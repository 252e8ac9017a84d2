use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, scope: Scope) -> Result<CmdResult> {
    let report = store.doctor(scope)?;

    let mut result = CmdResult::default();
    if report.is_clean() {
        result.add_message(CmdMessage::info("Map is healthy; nothing to fix."));
        return Ok(result);
    }

    if report.recovered_files > 0 {
        result.add_message(CmdMessage::warning(
            "Stored map was unreadable; backed it up and started fresh.",
        ));
    }
    if report.fixed_root_ids > 0 {
        result.add_message(CmdMessage::success("Restored the root id."));
    }
    if report.reassigned_ids > 0 {
        result.add_message(CmdMessage::success(format!(
            "Reassigned {} duplicated id(s).",
            report.reassigned_ids
        )));
    }
    Ok(result)
}
