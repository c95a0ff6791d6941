use anyhow::{Context as _, Result};
use log::info;

use crate::store::load_or_empty;

use super::{Context, DisplayOpts};

pub fn exec(ctx: &Context, opts: DisplayOpts) -> Result<()> {
    let roster = load_or_empty(&ctx.cfg, &opts.filename)
        .with_context(|| format!("load {}", opts.filename.display()))?;
    roster.display();
    info!("displayed {} students", roster.len());
    Ok(())
}
