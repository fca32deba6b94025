pub mod notification_data;
