pub mod access_control;
pub mod config;
pub mod iam_integration;
pub mod notifications;
pub mod reporting;
pub mod shared;
pub mod identity_grpc {
    tonic::include_proto!("identity_verification");
}
pub mod notification_grpc {
    tonic::include_proto!("notification_delivery");
}
