use std::io::Write;
use std::sync::Arc;

use anyhow::{bail, Context as _};
use searchads_domain::{Campaign, CampaignUpdate, Money};
use searchads_infra::CampaignService;

use super::Context;
use crate::cli::{CampaignCommands, CreateCampaignArgs, UpdateCampaignArgs};
use crate::output::{render_list, render_message, render_one};

const AD_CHANNEL_SEARCH: &str = "SEARCH";
const SUPPLY_SOURCE_SEARCH_RESULTS: &str = "APPSTORE_SEARCH_RESULTS";
const BILLING_EVENT_TAPS: &str = "TAPS";

pub(super) async fn run(
    ctx: &Context,
    command: CampaignCommands,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let service = CampaignService::new(Arc::clone(&ctx.client));

    match command {
        CampaignCommands::List(page) => {
            let page =
                service.list(page.limit, page.offset).await.context("listing campaigns")?;
            render_list(out, ctx.format, &page.items)
        }
        CampaignCommands::Get { id } => {
            let campaign = service.get(id).await.context("getting campaign")?;
            render_one(out, ctx.format, &campaign)
        }
        CampaignCommands::Find(find) => {
            let selector = find.selector()?;
            let result = if find.all {
                service.find_all(&selector).await
            } else {
                service.find(&selector).await.map(|page| page.items)
            };
            let campaigns = result.context("finding campaigns")?;
            render_list(out, ctx.format, &campaigns)
        }
        CampaignCommands::Create(args) => {
            let currency = ctx.currency().await?;
            let campaign = new_campaign(args, &currency);
            let created = service.create(&campaign).await.context("creating campaign")?;
            render_one(out, ctx.format, &created)
        }
        CampaignCommands::Update(args) => {
            let id = args.id;
            let currency = if args.budget.is_some() || args.daily_budget.is_some() {
                Some(ctx.currency().await?)
            } else {
                None
            };
            let update = campaign_update(args, currency.as_deref());
            if update.is_empty() {
                bail!("no update flags provided");
            }
            let updated = service.update(id, update).await.context("updating campaign")?;
            render_one(out, ctx.format, &updated)
        }
        CampaignCommands::Delete { id } => {
            service.delete(id).await.context("deleting campaign")?;
            render_message(out, &format!("Campaign {id} deleted."))
        }
    }
}

fn new_campaign(args: CreateCampaignArgs, currency: &str) -> Campaign {
    Campaign {
        name: args.name,
        adam_id: args.app_id,
        budget_amount: Some(Money::new(args.budget, currency)),
        daily_budget_amount: Some(Money::new(args.daily_budget, currency)),
        countries_or_regions: split_countries(&args.countries),
        status: Some(args.status),
        ad_channel_type: Some(AD_CHANNEL_SEARCH.to_string()),
        supply_sources: vec![SUPPLY_SOURCE_SEARCH_RESULTS.to_string()],
        billing_event: Some(BILLING_EVENT_TAPS.to_string()),
        ..Default::default()
    }
}

/// `currency` must be set whenever a budget flag is.
fn campaign_update(args: UpdateCampaignArgs, currency: Option<&str>) -> CampaignUpdate {
    let money = |amount: Option<String>| {
        amount.zip(currency).map(|(amount, currency)| Money::new(amount, currency))
    };

    CampaignUpdate {
        name: args.name,
        status: args.status,
        budget_amount: money(args.budget),
        daily_budget_amount: money(args.daily_budget),
    }
}

fn split_countries(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update_args() -> UpdateCampaignArgs {
        UpdateCampaignArgs { id: 7, name: None, budget: None, daily_budget: None, status: None }
    }

    #[test]
    fn create_sets_fixed_search_fields() {
        let campaign = new_campaign(
            CreateCampaignArgs {
                name: "Brand".to_string(),
                app_id: 123,
                countries: "us, gb,".to_string(),
                budget: "1000".to_string(),
                daily_budget: "50".to_string(),
                status: "ENABLED".to_string(),
            },
            "EUR",
        );

        assert_eq!(campaign.countries_or_regions, vec!["US", "GB"]);
        assert_eq!(campaign.budget_amount, Some(Money::new("1000", "EUR")));
        assert_eq!(campaign.supply_sources, vec!["APPSTORE_SEARCH_RESULTS"]);
        assert_eq!(campaign.billing_event.as_deref(), Some("TAPS"));
        assert_eq!(campaign.ad_channel_type.as_deref(), Some("SEARCH"));
    }

    #[test]
    fn update_without_flags_is_empty() {
        assert!(campaign_update(update_args(), None).is_empty());
    }

    #[test]
    fn update_attaches_currency_to_budgets() {
        let args = UpdateCampaignArgs { daily_budget: Some("75".to_string()), ..update_args() };
        let update = campaign_update(args, Some("JPY"));

        assert_eq!(update.daily_budget_amount, Some(Money::new("75", "JPY")));
        assert!(update.budget_amount.is_none());
    }
}
