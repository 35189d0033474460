use std::io::Write;
use std::sync::Arc;

use anyhow::Context as _;
use searchads_domain::NegativeKeyword;
use searchads_infra::{NegativeKeywordScope, NegativeKeywordService};

use super::Context;
use crate::cli::{NegativeKeywordCommands, NegativeScopeArgs};
use crate::output::{render_list, render_message, render_one};

impl From<NegativeScopeArgs> for NegativeKeywordScope {
    fn from(args: NegativeScopeArgs) -> Self {
        NegativeKeywordScope::new(args.campaign_id, args.ad_group_id)
    }
}

pub(super) async fn run(
    ctx: &Context,
    command: NegativeKeywordCommands,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let service = NegativeKeywordService::new(Arc::clone(&ctx.client));

    match command {
        NegativeKeywordCommands::List { scope, page } => {
            let page = service
                .list(scope.into(), page.limit, page.offset)
                .await
                .context("listing negative keywords")?;
            render_list(out, ctx.format, &page.items)
        }
        NegativeKeywordCommands::Get { scope, id } => {
            let keyword =
                service.get(scope.into(), id).await.context("getting negative keyword")?;
            render_one(out, ctx.format, &keyword)
        }
        NegativeKeywordCommands::Find { scope, find } => {
            let selector = find.selector()?;
            let result = if find.all {
                service.find_all(scope.into(), &selector).await
            } else {
                service.find(scope.into(), &selector).await.map(|page| page.items)
            };
            let keywords = result.context("finding negative keywords")?;
            render_list(out, ctx.format, &keywords)
        }
        NegativeKeywordCommands::Create { scope, texts, match_type } => {
            let batch: Vec<NegativeKeyword> = texts
                .into_iter()
                .map(|text| NegativeKeyword {
                    text,
                    match_type: match_type.clone(),
                    ..Default::default()
                })
                .collect();
            let created = service
                .create(scope.into(), &batch)
                .await
                .context("creating negative keywords")?;
            render_list(out, ctx.format, &created)
        }
        NegativeKeywordCommands::Delete { scope, ids } => {
            service.delete(scope.into(), &ids).await.context("deleting negative keywords")?;
            render_message(out, &format!("Deleted {} negative keyword(s).", ids.len()))
        }
    }
}
