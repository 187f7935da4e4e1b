pub mod imports;

mod aside;
mod connect;
mod content;
mod error_msg;
mod header;
mod provider;
pub mod theme;

pub use aside::Aside;
pub use connect::{Connect, Injected, Presentational};
#[cfg(test)]
pub use connect::ConnectProps;
pub use content::Main;
pub use error_msg::ErrorMessage;
pub use header::Header;
pub use provider::Provider;
