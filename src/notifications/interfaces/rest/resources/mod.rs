pub mod announcement_request_resource;
pub mod notification_error_response_resource;
