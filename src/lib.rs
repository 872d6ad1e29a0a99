pub mod apis;
pub mod arguments;
pub mod constants;
pub mod errors; // InspectorError and result alias
pub mod inspector;
pub mod logger;
