use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Args;

/// Listener and static-file settings common to both services.
#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    /// Bind address
    #[arg(short, long, env = "BIND_ADDR", default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,
}

impl ServerArgs {
    pub fn socket_addr(&self, default_port: u16) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.bind, self.port.unwrap_or(default_port)).parse()
    }
}

impl Default for ServerArgs {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: None,
            static_dir: PathBuf::from("static"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_service_port() {
        let args = ServerArgs::default();
        assert_eq!(args.socket_addr(8001).unwrap().port(), 8001);
    }

    #[test]
    fn explicit_port_wins() {
        let args = ServerArgs {
            port: Some(9000),
            ..ServerArgs::default()
        };
        assert_eq!(args.socket_addr(8000).unwrap().port(), 9000);
    }

    #[test]
    fn rejects_bad_bind_address() {
        let args = ServerArgs {
            bind: "not an address".into(),
            ..ServerArgs::default()
        };
        assert!(args.socket_addr(8000).is_err());
    }
}
