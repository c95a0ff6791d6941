use anyhow::{Context as _, Result};
use log::{debug, info};

use crate::store::load_or_empty;

use super::{Context, SelectOpts};

/// select: вывести студентов со средним баллом >= 4.0.
/// Значение --select не участвует в отборе (порог фиксирован).
pub fn exec(ctx: &Context, opts: SelectOpts) -> Result<()> {
    let roster = load_or_empty(&ctx.cfg, &opts.filename)
        .with_context(|| format!("load {}", opts.filename.display()))?;
    debug!("select: criterion '{}' ignored", opts.criterion);

    let selected = roster.select().context("select by average grade")?;
    selected.display();
    info!("selected {} of {} students", selected.len(), roster.len());
    Ok(())
}
