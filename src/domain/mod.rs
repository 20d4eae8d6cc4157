// Domain layer: events, decisions and the ports (traits) the proxy is built on.

pub mod model;
pub mod ports;
