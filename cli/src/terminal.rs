pub mod colors;
pub mod form;
pub mod input;
pub mod logging;
pub mod print;
pub mod spinner;
