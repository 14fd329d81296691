pub mod dashboard_logger;
pub mod fetch_spinner;
