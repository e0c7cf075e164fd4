pub mod locale;
pub mod lookup;
pub mod page;
