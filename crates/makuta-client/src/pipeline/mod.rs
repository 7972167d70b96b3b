pub mod filter;
pub mod labels;
pub mod sequence;
pub mod stats;

pub use filter::{FilterSpec, PageInfo, apply_filter, paginate};
pub use sequence::{FetchSequence, FetchTicket};
pub use stats::{ChartSeries, TypeBreakdown, amount_series, breakdown_by_type, count_series};
