pub mod access_control_domain_error;
pub mod role_claim_lookup;
