pub mod edit;
pub mod position;
pub mod template;
