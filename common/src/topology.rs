pub mod device;
pub mod ospf;
