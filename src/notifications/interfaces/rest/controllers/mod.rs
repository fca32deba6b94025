pub mod announcement_rest_controller;
pub mod notification_stream_controller;
