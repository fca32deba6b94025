pub mod weekly_report_scheduler;
pub mod weekly_report_service_impl;
