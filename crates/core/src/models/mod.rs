pub mod analysis;
pub mod budget;
pub mod chart;
pub mod market;
pub mod notification;
pub mod portfolio;
pub mod settings;
pub mod stock;
pub mod suggestion;
pub mod transaction;

pub(crate) mod de;
