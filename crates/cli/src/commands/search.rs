use std::io::Write;
use std::sync::Arc;

use anyhow::Context as _;
use searchads_infra::SearchService;

use super::Context;
use crate::cli::{AppCommands, GeoCommands};
use crate::output::render_list;

pub(super) async fn run_apps(
    ctx: &Context,
    command: AppCommands,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let service = SearchService::new(Arc::clone(&ctx.client));

    match command {
        AppCommands::Search { query, page, owned } => {
            let page = service
                .apps(&query, page.limit, page.offset, owned)
                .await
                .context("searching apps")?;
            render_list(out, ctx.format, &page.items)
        }
    }
}

pub(super) async fn run_geo(
    ctx: &Context,
    command: GeoCommands,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let service = SearchService::new(Arc::clone(&ctx.client));

    match command {
        GeoCommands::Search { query, page, entity, country_code } => {
            let page = service
                .geo(&query, page.limit, page.offset, entity.as_deref(), country_code.as_deref())
                .await
                .context("searching geo locations")?;
            render_list(out, ctx.format, &page.items)
        }
    }
}
