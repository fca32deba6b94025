pub mod weekly_report_service;
