// Output generation module

pub mod report;
pub mod templates;

pub use report::*;
pub use templates::*;
