pub mod address;
pub mod batch;
pub mod mask;
pub mod octet;
