pub mod chart_service;
pub mod stock_service;
pub mod summary_service;
pub mod transaction_service;
