use std::io::Write;
use std::sync::Arc;

use anyhow::{bail, Context as _};
use searchads_domain::{AdGroup, AdGroupUpdate, Money};
use searchads_infra::AdGroupService;

use super::Context;
use crate::cli::{AdGroupCommands, CreateAdGroupArgs, UpdateAdGroupArgs};
use crate::output::{render_list, render_message, render_one};

pub(super) async fn run(
    ctx: &Context,
    command: AdGroupCommands,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let service = AdGroupService::new(Arc::clone(&ctx.client));

    match command {
        AdGroupCommands::List { scope, page } => {
            let page = service
                .list(scope.campaign_id, page.limit, page.offset)
                .await
                .context("listing ad groups")?;
            render_list(out, ctx.format, &page.items)
        }
        AdGroupCommands::Get { scope, id } => {
            let ad_group = service.get(scope.campaign_id, id).await.context("getting ad group")?;
            render_one(out, ctx.format, &ad_group)
        }
        AdGroupCommands::Find { scope, find } => {
            let selector = find.selector()?;
            let result = if find.all {
                service.find_all(scope.campaign_id, &selector).await
            } else {
                service.find(scope.campaign_id, &selector).await.map(|page| page.items)
            };
            let ad_groups = result.context("finding ad groups")?;
            render_list(out, ctx.format, &ad_groups)
        }
        AdGroupCommands::Create(args) => {
            let campaign_id = args.scope.campaign_id;
            let currency = ctx.currency().await?;
            let ad_group = new_ad_group(args, &currency);
            let created =
                service.create(campaign_id, &ad_group).await.context("creating ad group")?;
            render_one(out, ctx.format, &created)
        }
        AdGroupCommands::Update(args) => {
            let (campaign_id, id) = (args.scope.campaign_id, args.id);
            let currency = if args.default_bid.is_some() || args.cpa_goal.is_some() {
                Some(ctx.currency().await?)
            } else {
                None
            };
            let update = ad_group_update(args, currency.as_deref());
            if update.is_empty() {
                bail!("no update flags provided");
            }
            let updated =
                service.update(campaign_id, id, &update).await.context("updating ad group")?;
            render_one(out, ctx.format, &updated)
        }
        AdGroupCommands::Delete { scope, id } => {
            service.delete(scope.campaign_id, id).await.context("deleting ad group")?;
            render_message(out, &format!("Ad group {id} deleted."))
        }
    }
}

fn new_ad_group(args: CreateAdGroupArgs, currency: &str) -> AdGroup {
    AdGroup {
        name: args.name,
        status: Some(args.status),
        default_bid_amount: Some(Money::new(args.default_bid, currency)),
        cpa_goal: args.cpa_goal.map(|amount| Money::new(amount, currency)),
        automated_keywords_opt_in: args.auto_keywords,
        start_time: args.start_time,
        end_time: args.end_time,
        ..Default::default()
    }
}

fn ad_group_update(args: UpdateAdGroupArgs, currency: Option<&str>) -> AdGroupUpdate {
    let money = |amount: Option<String>| {
        amount.zip(currency).map(|(amount, currency)| Money::new(amount, currency))
    };

    AdGroupUpdate {
        name: args.name,
        status: args.status,
        default_bid_amount: money(args.default_bid),
        cpa_goal: money(args.cpa_goal),
        automated_keywords_opt_in: args.auto_keywords,
        start_time: args.start_time,
        end_time: args.end_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CampaignScope;

    #[test]
    fn create_uses_org_currency_for_bids() {
        let ad_group = new_ad_group(
            CreateAdGroupArgs {
                scope: CampaignScope { campaign_id: 1 },
                name: "Exact".to_string(),
                default_bid: "1.50".to_string(),
                cpa_goal: Some("3.00".to_string()),
                status: "ENABLED".to_string(),
                auto_keywords: false,
                start_time: None,
                end_time: None,
            },
            "GBP",
        );

        assert_eq!(ad_group.default_bid_amount, Some(Money::new("1.50", "GBP")));
        assert_eq!(ad_group.cpa_goal, Some(Money::new("3.00", "GBP")));
        assert!(!ad_group.automated_keywords_opt_in);
    }

    #[test]
    fn update_with_only_status_is_not_empty() {
        let update = ad_group_update(
            UpdateAdGroupArgs {
                scope: CampaignScope { campaign_id: 1 },
                id: 2,
                name: None,
                default_bid: None,
                cpa_goal: None,
                status: Some("PAUSED".to_string()),
                auto_keywords: None,
                start_time: None,
                end_time: None,
            },
            None,
        );
        assert!(!update.is_empty());
        assert!(update.default_bid_amount.is_none());
    }
}
