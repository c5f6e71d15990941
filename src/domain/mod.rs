pub mod catalog;
pub mod customer;
pub mod entity;
pub mod errors;
pub mod order;
pub mod order_summary;
pub mod ports;
pub mod validation;
