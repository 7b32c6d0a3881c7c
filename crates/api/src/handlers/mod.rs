pub mod forms;
pub mod validation;
