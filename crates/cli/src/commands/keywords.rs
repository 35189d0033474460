use std::io::Write;
use std::sync::Arc;

use anyhow::{bail, Context as _};
use searchads_domain::{Keyword, KeywordUpdate, Money};
use searchads_infra::KeywordService;

use super::Context;
use crate::cli::{KeywordCommands, KeywordTextArgs};
use crate::output::{render_list, render_message, render_one};

pub(super) async fn run(
    ctx: &Context,
    command: KeywordCommands,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let service = KeywordService::new(Arc::clone(&ctx.client));

    match command {
        KeywordCommands::List { scope, page } => {
            let page = service
                .list(scope.campaign_id, scope.ad_group_id, page.limit, page.offset)
                .await
                .context("listing keywords")?;
            render_list(out, ctx.format, &page.items)
        }
        KeywordCommands::Get { scope, id } => {
            let keyword = service
                .get(scope.campaign_id, scope.ad_group_id, id)
                .await
                .context("getting keyword")?;
            render_one(out, ctx.format, &keyword)
        }
        KeywordCommands::Find { scope, find } => {
            let selector = find.selector()?;
            let result = if find.all {
                service.find_all(scope.campaign_id, scope.ad_group_id, &selector).await
            } else {
                service
                    .find(scope.campaign_id, scope.ad_group_id, &selector)
                    .await
                    .map(|page| page.items)
            };
            let keywords = result.context("finding keywords")?;
            render_list(out, ctx.format, &keywords)
        }
        KeywordCommands::Create { scope, keywords, bid } => {
            let bid = match bid {
                Some(amount) => Some(Money::new(amount, ctx.currency().await?)),
                None => None,
            };
            let batch = new_keywords(keywords, bid);
            let created = service
                .create(scope.campaign_id, scope.ad_group_id, &batch)
                .await
                .context("creating keywords")?;
            render_list(out, ctx.format, &created)
        }
        KeywordCommands::Update { scope, id, status, bid } => {
            if status.is_none() && bid.is_none() {
                bail!("no update flags provided");
            }
            let bid_amount = match bid {
                Some(amount) => Some(Money::new(amount, ctx.currency().await?)),
                None => None,
            };
            let update = KeywordUpdate { id, status, bid_amount };
            let updated = service
                .update(scope.campaign_id, scope.ad_group_id, &[update])
                .await
                .context("updating keyword")?;
            render_list(out, ctx.format, &updated)
        }
        KeywordCommands::Delete { scope, ids } => {
            service
                .delete(scope.campaign_id, scope.ad_group_id, &ids)
                .await
                .context("deleting keywords")?;
            render_message(out, &format!("Deleted {} keyword(s).", ids.len()))
        }
    }
}

fn new_keywords(args: KeywordTextArgs, bid: Option<Money>) -> Vec<Keyword> {
    args.texts
        .into_iter()
        .map(|text| Keyword {
            text,
            match_type: args.match_type.clone(),
            bid_amount: bid.clone(),
            ..Default::default()
        })
        .collect()
}
