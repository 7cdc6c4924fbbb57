extern crate regex;

extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate serde_derive;

pub mod types;
pub mod merge;
pub mod reader;
pub mod render;
pub mod util;
