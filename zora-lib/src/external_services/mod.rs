pub mod proxy;
pub mod zora;
