#[macro_use]
extern crate log;

#[macro_use]
extern crate lazy_static;

pub mod core;
pub mod cameras;
