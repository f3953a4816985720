pub mod hearts;
pub mod sync;
pub mod layout;
