pub mod postgres;
pub mod report_recipient_repository;
