pub mod http;
pub mod routing;
pub mod services;
