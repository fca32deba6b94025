pub mod grpc_identity_provider_facade_impl;
