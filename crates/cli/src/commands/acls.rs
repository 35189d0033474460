use std::io::Write;
use std::sync::Arc;

use anyhow::Context as _;
use searchads_infra::AclService;

use super::Context;
use crate::cli::AclCommands;
use crate::output::render_list;

pub(super) async fn run(ctx: &Context, command: AclCommands, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        AclCommands::List => {
            let acls = AclService::new(Arc::clone(&ctx.client))
                .list()
                .await
                .context("listing organizations")?;
            render_list(out, ctx.format, &acls)
        }
    }
}
