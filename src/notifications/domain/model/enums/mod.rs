pub mod notification_domain_error;
pub mod push_priority;
