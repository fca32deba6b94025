pub mod grpc_email_transport_facade_impl;
pub mod grpc_push_gateway_facade_impl;
