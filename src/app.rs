pub mod events;
pub mod request;
pub mod settings;
pub mod state;
