//! Wire types shared by every layer

pub mod acl;
pub mod adgroup;
pub mod campaign;
pub mod envelope;
pub mod keyword;
pub mod money;
pub mod reporting;
pub mod search;
pub mod selector;

pub use acl::UserAcl;
pub use adgroup::{AdGroup, AdGroupUpdate, TargetingDimension, TargetingDimensions};
pub use campaign::{Campaign, CampaignUpdate, CampaignUpdateRequest};
pub use envelope::{Envelope, ErrorBody, ErrorDetail, PageInfo};
pub use keyword::{Keyword, KeywordUpdate, NegativeKeyword};
pub use money::Money;
pub use reporting::{
    BidRecommendation, GranularityRow, InsightData, ReportRequest, ReportResponse, ReportRow,
    ReportingDataResponse, SpendRow,
};
pub use search::{AppInfo, GeoEntity};
pub use selector::{Condition, OrderSpec, Operator, Selector, SelectorPagination, SortOrder};
