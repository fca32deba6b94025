pub mod reporting_domain_error;
