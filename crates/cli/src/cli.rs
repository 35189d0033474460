//! CLI parse: clap types for the searchads binary. Definitions only.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use searchads_domain::{
    parse_sorts, try_parse_filters, FilterParseError, OrderSpec, Selector, SortOrder,
};

/// Apple Search Ads command-line client
#[derive(Debug, Parser)]
#[command(name = "searchads", version)]
#[command(about = "Command-line client for the Apple Search Ads Campaign Management API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config profile name
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Configuration file path (overrides default config discovery)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Log request and response bodies
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage campaigns
    Campaigns {
        #[command(subcommand)]
        command: CampaignCommands,
    },
    /// Manage ad groups
    #[command(name = "adgroups")]
    AdGroups {
        #[command(subcommand)]
        command: AdGroupCommands,
    },
    /// Manage targeting keywords
    Keywords {
        #[command(subcommand)]
        command: KeywordCommands,
    },
    /// Manage campaign- or ad-group-level negative keywords
    NegativeKeywords {
        #[command(subcommand)]
        command: NegativeKeywordCommands,
    },
    /// Search App Store apps
    Apps {
        #[command(subcommand)]
        command: AppCommands,
    },
    /// Search geographic locations
    Geo {
        #[command(subcommand)]
        command: GeoCommands,
    },
    /// Show organizations and roles for the current credentials
    Acls {
        #[command(subcommand)]
        command: AclCommands,
    },
    /// Run performance reports
    Reports {
        #[command(subcommand)]
        command: ReportCommands,
    },
}

/// `--limit`/`--offset` window
#[derive(Debug, Clone, Copy, Args)]
pub struct PageArgs {
    /// Number of results
    #[arg(long, default_value_t = 20)]
    pub limit: u32,

    /// Results offset
    #[arg(long, default_value_t = 0)]
    pub offset: u32,
}

/// Selector flags shared by every `find` command
#[derive(Debug, Clone, Args)]
pub struct FindArgs {
    /// Filter condition, e.g. "status=ENABLED", "name~Brand", "id@1,2,3" (repeatable)
    #[arg(long = "filter", value_name = "EXPR")]
    pub filters: Vec<String>,

    /// Sort order, e.g. "name:asc", "id:desc" (repeatable)
    #[arg(long = "sort", value_name = "EXPR")]
    pub sorts: Vec<String>,

    /// Restrict returned fields (repeatable)
    #[arg(long = "field", value_name = "NAME")]
    pub fields: Vec<String>,

    #[command(flatten)]
    pub page: PageArgs,

    /// Fetch all pages
    #[arg(long)]
    pub all: bool,
}

impl FindArgs {
    /// Translate the flags into a selector.
    ///
    /// # Errors
    /// Fails on the first filter expression that has no operator or field.
    pub fn selector(&self) -> Result<Selector, FilterParseError> {
        Ok(Selector::new(self.page.limit, self.page.offset)
            .with_conditions(try_parse_filters(&self.filters)?)
            .with_order_by(parse_sorts(&self.sorts))
            .with_fields(self.fields.clone()))
    }
}

#[derive(Debug, Clone, Copy, Args)]
pub struct CampaignScope {
    /// Campaign ID
    #[arg(long)]
    pub campaign_id: i64,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct AdGroupScope {
    /// Campaign ID
    #[arg(long)]
    pub campaign_id: i64,

    /// Ad group ID
    #[arg(long = "adgroup-id")]
    pub ad_group_id: i64,
}

#[derive(Debug, Subcommand)]
pub enum CampaignCommands {
    /// List all campaigns
    List(PageArgs),
    /// Get a campaign by ID
    Get { id: i64 },
    /// Find campaigns with filters
    Find(FindArgs),
    /// Create a new campaign
    Create(CreateCampaignArgs),
    /// Update a campaign
    Update(UpdateCampaignArgs),
    /// Delete a campaign
    Delete { id: i64 },
}

#[derive(Debug, Clone, Args)]
pub struct CreateCampaignArgs {
    /// Campaign name
    #[arg(long)]
    pub name: String,

    /// App Adam ID
    #[arg(long)]
    pub app_id: i64,

    /// Comma-separated country codes (e.g. US,GB)
    #[arg(long)]
    pub countries: String,

    /// Total budget (e.g. 1000.00)
    #[arg(long)]
    pub budget: String,

    /// Daily budget (e.g. 50.00)
    #[arg(long)]
    pub daily_budget: String,

    /// Campaign status
    #[arg(long, default_value = "ENABLED")]
    pub status: String,
}

#[derive(Debug, Clone, Args)]
pub struct UpdateCampaignArgs {
    pub id: i64,

    #[arg(long)]
    pub name: Option<String>,

    /// Total budget
    #[arg(long)]
    pub budget: Option<String>,

    /// Daily budget
    #[arg(long)]
    pub daily_budget: Option<String>,

    /// Campaign status (ENABLED/PAUSED)
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum AdGroupCommands {
    /// List ad groups in a campaign
    List {
        #[command(flatten)]
        scope: CampaignScope,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Get an ad group by ID
    Get {
        #[command(flatten)]
        scope: CampaignScope,
        id: i64,
    },
    /// Find ad groups with filters
    Find {
        #[command(flatten)]
        scope: CampaignScope,
        #[command(flatten)]
        find: FindArgs,
    },
    /// Create an ad group
    Create(CreateAdGroupArgs),
    /// Update an ad group
    Update(UpdateAdGroupArgs),
    /// Delete an ad group
    Delete {
        #[command(flatten)]
        scope: CampaignScope,
        id: i64,
    },
}

#[derive(Debug, Clone, Args)]
pub struct CreateAdGroupArgs {
    #[command(flatten)]
    pub scope: CampaignScope,

    /// Ad group name
    #[arg(long)]
    pub name: String,

    /// Default bid amount (e.g. 1.50)
    #[arg(long)]
    pub default_bid: String,

    /// CPA goal amount
    #[arg(long)]
    pub cpa_goal: Option<String>,

    #[arg(long, default_value = "ENABLED")]
    pub status: String,

    /// Automated keywords opt-in
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    pub auto_keywords: bool,

    /// Start time (ISO 8601)
    #[arg(long)]
    pub start_time: Option<String>,

    /// End time (ISO 8601)
    #[arg(long)]
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct UpdateAdGroupArgs {
    #[command(flatten)]
    pub scope: CampaignScope,

    pub id: i64,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub default_bid: Option<String>,

    #[arg(long)]
    pub cpa_goal: Option<String>,

    /// Status (ENABLED/PAUSED)
    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub auto_keywords: Option<bool>,

    #[arg(long)]
    pub start_time: Option<String>,

    #[arg(long)]
    pub end_time: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum KeywordCommands {
    /// List targeting keywords
    List {
        #[command(flatten)]
        scope: AdGroupScope,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Get a targeting keyword by ID
    Get {
        #[command(flatten)]
        scope: AdGroupScope,
        id: i64,
    },
    /// Find targeting keywords with filters
    Find {
        #[command(flatten)]
        scope: AdGroupScope,
        #[command(flatten)]
        find: FindArgs,
    },
    /// Create targeting keywords
    Create {
        #[command(flatten)]
        scope: AdGroupScope,
        #[command(flatten)]
        keywords: KeywordTextArgs,
        /// Bid amount (e.g. 1.50)
        #[arg(long)]
        bid: Option<String>,
    },
    /// Update a targeting keyword
    Update {
        #[command(flatten)]
        scope: AdGroupScope,
        /// Keyword ID to update
        #[arg(long)]
        id: i64,
        /// Status (ACTIVE/PAUSED)
        #[arg(long)]
        status: Option<String>,
        /// Bid amount
        #[arg(long)]
        bid: Option<String>,
    },
    /// Delete targeting keywords by ID
    Delete {
        #[command(flatten)]
        scope: AdGroupScope,
        /// Comma-separated keyword IDs
        #[arg(value_delimiter = ',', required = true)]
        ids: Vec<i64>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct KeywordTextArgs {
    /// Keyword text (repeatable for bulk)
    #[arg(long = "text", required = true)]
    pub texts: Vec<String>,

    /// Match type: BROAD or EXACT
    #[arg(long, default_value = "BROAD")]
    pub match_type: String,
}

#[derive(Debug, Subcommand)]
pub enum NegativeKeywordCommands {
    /// List negative keywords
    List {
        #[command(flatten)]
        scope: NegativeScopeArgs,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Get a negative keyword by ID
    Get {
        #[command(flatten)]
        scope: NegativeScopeArgs,
        id: i64,
    },
    /// Find negative keywords with filters
    Find {
        #[command(flatten)]
        scope: NegativeScopeArgs,
        #[command(flatten)]
        find: FindArgs,
    },
    /// Create negative keywords
    Create {
        #[command(flatten)]
        scope: NegativeScopeArgs,
        /// Keyword text (repeatable for bulk)
        #[arg(long = "text", required = true)]
        texts: Vec<String>,
        /// Match type: BROAD or EXACT
        #[arg(long, default_value = "EXACT")]
        match_type: String,
    },
    /// Delete negative keywords by ID
    Delete {
        #[command(flatten)]
        scope: NegativeScopeArgs,
        /// Comma-separated keyword IDs
        #[arg(value_delimiter = ',', required = true)]
        ids: Vec<i64>,
    },
}

/// Campaign level, or ad-group level when `--adgroup-id` is given
#[derive(Debug, Clone, Copy, Args)]
pub struct NegativeScopeArgs {
    /// Campaign ID
    #[arg(long)]
    pub campaign_id: i64,

    /// Ad group ID (ad-group-level list when set)
    #[arg(long = "adgroup-id")]
    pub ad_group_id: Option<i64>,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Search for apps by name
    Search {
        /// Search query
        #[arg(long)]
        query: String,
        #[command(flatten)]
        page: PageArgs,
        /// Return only owned apps
        #[arg(long)]
        owned: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum GeoCommands {
    /// Search for geo locations
    Search {
        /// Search query
        #[arg(long)]
        query: String,
        #[command(flatten)]
        page: PageArgs,
        /// Entity type filter (e.g. Country, AdminArea, Locality)
        #[arg(long)]
        entity: Option<String>,
        /// Country code filter
        #[arg(long)]
        country_code: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum AclCommands {
    /// List organizations and roles
    List,
}

#[derive(Debug, Subcommand)]
pub enum ReportCommands {
    /// Campaign-level report
    Campaigns(ReportArgs),
    /// Ad group report for one campaign
    #[command(name = "adgroups")]
    AdGroups {
        #[command(flatten)]
        scope: CampaignScope,
        #[command(flatten)]
        report: ReportArgs,
    },
    /// Keyword report for one campaign
    Keywords {
        #[command(flatten)]
        scope: CampaignScope,
        #[command(flatten)]
        report: ReportArgs,
    },
    /// Search term report for one campaign
    SearchTerms {
        #[command(flatten)]
        scope: CampaignScope,
        #[command(flatten)]
        report: ReportArgs,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ReportArgs {
    /// First day of the report (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: String,

    /// Last day of the report (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: String,

    /// HOURLY, DAILY, WEEKLY or MONTHLY
    #[arg(long)]
    pub granularity: Option<String>,

    /// Group rows by dimension, e.g. countryOrRegion (repeatable)
    #[arg(long = "group-by")]
    pub group_by: Vec<String>,

    /// Filter condition (repeatable)
    #[arg(long = "filter", value_name = "EXPR")]
    pub filters: Vec<String>,

    /// Sort order (repeatable); defaults to "impressions:desc"
    #[arg(long = "sort", value_name = "EXPR")]
    pub sorts: Vec<String>,

    #[command(flatten)]
    pub page: PageArgs,

    /// Include grand totals
    #[arg(long)]
    pub grand_totals: bool,

    /// Include rows without metrics
    #[arg(long)]
    pub include_empty: bool,

    /// Include row totals
    #[arg(long)]
    pub row_totals: bool,

    /// ORTZ (organization time zone) or UTC
    #[arg(long)]
    pub time_zone: Option<String>,
}

impl ReportArgs {
    /// Selector for the report body; sorts by impressions when unsorted
    ///
    /// # Errors
    /// Fails on the first malformed filter expression.
    pub fn selector(&self) -> Result<Selector, FilterParseError> {
        let mut order_by = parse_sorts(&self.sorts);
        if order_by.is_empty() {
            order_by.push(OrderSpec::new("impressions", SortOrder::Descending));
        }
        Ok(Selector::new(self.page.limit, self.page.offset)
            .with_conditions(try_parse_filters(&self.filters)?)
            .with_order_by(order_by))
    }
}
