pub mod priority_report_logger;
