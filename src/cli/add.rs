use anyhow::{Context as _, Result};
use log::{error, info};

use crate::store::{load_or_empty, persist};

use super::{AddOpts, Context};

/// add: загрузить список, добавить запись, сохранить.
/// Ошибка сохранения печатается и логируется, но не прерывает процесс.
pub fn exec(ctx: &Context, opts: AddOpts) -> Result<()> {
    let roster = load_or_empty(&ctx.cfg, &opts.filename)
        .with_context(|| format!("load {}", opts.filename.display()))?;

    let roster = roster.add(opts.name.as_str(), opts.group, opts.grade.as_str());
    info!(
        "student added: name='{}', group={}, total={}",
        opts.name,
        opts.group.map(|g| g.to_string()).unwrap_or_else(|| "none".to_string()),
        roster.len()
    );

    match persist(&ctx.cfg, &opts.filename, &roster) {
        Ok(path) => info!("roster saved to {}", path.display()),
        Err(e) => {
            error!("save {}: {}", opts.filename.display(), e);
            println!("{}", e);
        }
    }
    Ok(())
}
