pub mod authenticator;
pub mod factory;

pub use authenticator::{AuthMode, Authenticator, Claims, Identity, Rejection};
pub use factory::build_authenticator;
