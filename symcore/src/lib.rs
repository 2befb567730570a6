mod abst;
mod basic;
mod dict;
mod poly;
mod misc;

pub use abst::*;
pub use basic::*;
pub use dict::*;
pub use poly::*;
pub use misc::*;

pub mod config;
pub mod util;
