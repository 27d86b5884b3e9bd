use crate::interface_adapters::gateway::StateAccessGateway;

#[derive(Clone)]
pub struct AppState {
    // The only path from HTTP handlers to the player.
    pub gateway: StateAccessGateway,
}
