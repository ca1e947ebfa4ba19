pub mod builder;
pub mod error;
pub mod node;
pub mod random;
pub mod truck;
pub mod validator;
