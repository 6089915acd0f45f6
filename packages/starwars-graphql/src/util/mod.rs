mod connection;
mod paging;

pub use connection::*;
pub use paging::*;
