//! Self-service custom rank purchase

mod self_service;


pub use self_service::*;
