pub mod graphql;
pub mod zora;
