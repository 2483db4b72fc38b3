pub mod collector;
pub mod netstat;
pub mod network;
pub mod process;
pub mod toggle;
