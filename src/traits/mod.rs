pub mod analytics_source;
