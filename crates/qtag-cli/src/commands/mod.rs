pub mod auth;
pub mod dispatch;
mod hosts;
mod rename;
mod tagging;
mod tags;
