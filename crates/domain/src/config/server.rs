use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// `host:port` the HTTP server binds to. A bare `:port` binds all
    /// interfaces.
    #[serde(default = "default_listening_address")]
    pub listening_address: String,
}

impl ServerConfig {
    /// Address in a form `TcpListener::bind` accepts.
    pub fn bind_address(&self) -> String {
        let address = self.listening_address.trim();
        if address.starts_with(':') {
            format!("0.0.0.0{address}")
        } else {
            address.to_string()
        }
    }

    /// Port part of the listening address, if it has a valid one.
    pub fn port(&self) -> Option<u16> {
        let (_, port) = self.listening_address.trim().rsplit_once(':')?;
        port.parse().ok()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listening_address: default_listening_address(),
        }
    }
}

fn default_listening_address() -> String {
    "0.0.0.0:8080".to_string()
}
