// Interface adapters: wire protocol, state gateway and HTTP handling.

pub mod gateway;
pub mod handlers;
pub mod http;
pub mod protocol;
pub mod routes;
pub mod state;
