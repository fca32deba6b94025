pub mod email_notification_channel_impl;
pub mod push_notification_channel_impl;
