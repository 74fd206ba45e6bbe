pub mod events;
pub mod logs;
pub mod memory;
pub mod factory;

use crate::gateway::memory::publisher::MemoryPublisher;

#[derive(Debug, Clone, Default)]
pub enum GatewayPublisherVia {
    #[default]
    Logs,
    // events are kept in the shared publisher so callers can inspect them
    Memory(MemoryPublisher),
}
