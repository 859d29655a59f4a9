pub mod domain;
pub mod enhancement_use_cases;
pub mod ports;
pub mod service;
