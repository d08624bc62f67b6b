pub mod events;
pub mod logs;
#[cfg(test)]
pub mod memory;
pub mod factory;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GatewayPublisherVia {
    Logs,
}
