pub mod acl;
pub mod command;
pub mod error;
pub mod meta;
pub mod mmfs;

pub use acl::*;
pub use command::*;
pub use error::{Error, Result};
pub use meta::*;
pub use mmfs::*;
