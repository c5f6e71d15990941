pub mod entity_service;
pub mod order_service;
