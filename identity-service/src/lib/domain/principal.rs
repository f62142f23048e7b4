pub mod errors;
pub mod guards;
pub mod models;
pub mod ports;
pub mod resolver;

pub use errors::AuthError;
pub use models::Principal;
pub use models::Role;
pub use resolver::PrincipalResolver;
