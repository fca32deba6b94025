pub mod token_validation_service;
