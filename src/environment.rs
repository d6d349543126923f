use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the controller endpoints the monitor can attach to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// A controller on the local network, reachable via mDNS.
    #[default]
    Device,
    /// A simulator or controller running on this machine.
    Local,
    /// An explicit base URL, e.g. a fixed IP address.
    Custom { base_url: String },
}

impl Environment {
    /// Returns the controller base URL associated with the environment.
    pub fn controller_url(&self) -> String {
        match self {
            Environment::Device => "http://brewos.local".to_string(),
            Environment::Local => "http://localhost:8080".to_string(),
            Environment::Custom { base_url } => base_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" => Err(()),
            "device" => Ok(Environment::Device),
            "local" => Ok(Environment::Local),
            _ => Ok(Environment::Custom {
                base_url: s.to_string(),
            }),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Device => write!(f, "Device"),
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.controller_url())
    }
}
