pub mod entities;
pub mod errors;
pub mod layout;
pub mod value_objects;
