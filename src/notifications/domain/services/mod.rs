pub mod notification_dispatch_service;
