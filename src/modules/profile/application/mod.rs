pub mod checkout_service;
pub mod service;

pub use checkout_service::CheckoutService;
pub use service::ProfileService;
