#![forbid(unsafe_code)]

pub mod gateway;
pub mod http;
pub mod memory;

pub use gateway::{ApiError, DeckGateway};
pub use http::{ApiConfig, HttpDeckGateway};
pub use memory::{DESCRIPTION_MAX_LENGTH, InMemoryDeckGateway, NAME_MAX_LENGTH};
