use std::io::Write;
use std::sync::Arc;

use anyhow::Context as _;
use searchads_domain::ReportRequest;
use searchads_infra::{ReportKind, ReportService};

use super::Context;
use crate::cli::{ReportArgs, ReportCommands};
use crate::output::render_report;

pub(super) async fn run(
    ctx: &Context,
    command: ReportCommands,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let (kind, args) = match command {
        ReportCommands::Campaigns(args) => (ReportKind::Campaigns, args),
        ReportCommands::AdGroups { scope, report } => {
            (ReportKind::AdGroups { campaign_id: scope.campaign_id }, report)
        }
        ReportCommands::Keywords { scope, report } => {
            (ReportKind::Keywords { campaign_id: scope.campaign_id }, report)
        }
        ReportCommands::SearchTerms { scope, report } => {
            (ReportKind::SearchTerms { campaign_id: scope.campaign_id }, report)
        }
    };

    let request = report_request(args)?;
    let report = ReportService::new(Arc::clone(&ctx.client))
        .run(kind, &request)
        .await
        .context("running report")?;
    render_report(out, ctx.format, &report)
}

fn report_request(args: ReportArgs) -> anyhow::Result<ReportRequest> {
    let selector = args.selector()?;
    Ok(ReportRequest {
        start_time: args.start_date,
        end_time: args.end_date,
        granularity: args.granularity,
        group_by: args.group_by,
        selector: Some(selector),
        return_grand_totals: args.grand_totals,
        return_records_with_no_metrics: args.include_empty,
        return_row_totals: args.row_totals,
        time_zone: args.time_zone,
    })
}
