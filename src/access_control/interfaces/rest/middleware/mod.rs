pub mod access_control_middleware;
