pub mod reporting_rest_controller;
