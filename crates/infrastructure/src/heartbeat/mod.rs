pub mod http_sender;

pub use http_sender::{heartbeat_endpoint, HttpHeartbeatSender};
