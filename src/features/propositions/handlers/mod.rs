mod proposition_handler;

pub use proposition_handler::*;
