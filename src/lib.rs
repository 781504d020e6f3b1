pub mod crash_record;
pub mod error;
pub mod projection;
pub mod report;
pub mod row_filter;
