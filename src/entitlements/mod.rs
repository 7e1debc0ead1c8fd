//! Entitlement domain: the record the support tool looks up, and the
//! gateway that fetches it from the remote entitlement service.

pub mod gateway;
pub mod model;

pub use gateway::{EntitlementsGateway, GatewayError, HttpEntitlementsGateway};
pub use model::Entitlement;
