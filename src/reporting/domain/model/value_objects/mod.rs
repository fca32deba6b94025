pub mod report_access_token;
