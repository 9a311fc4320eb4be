pub mod consts;
mod init;

pub use init::init;
