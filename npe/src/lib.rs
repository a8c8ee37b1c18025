extern crate clap;
extern crate nupkg;

pub mod cli;
pub mod contents;
pub mod error;
pub mod extract;
pub mod locate;
pub mod metadata;
pub mod utils;
