pub mod enums;
pub mod get;
pub mod set;
