pub mod sqlx_report_recipient_repository_impl;
