pub mod dispatch;
pub mod parse;
pub mod settings;
pub mod vocab;
