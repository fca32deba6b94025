pub mod reporting_error_response_resource;
pub mod weekly_report_run_summary_resource;
