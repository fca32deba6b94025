pub mod access_control_error_response_resource;
