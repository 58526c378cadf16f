pub mod ports;
pub mod progressive;
