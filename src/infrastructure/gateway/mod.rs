mod portfolio;

pub use portfolio::*;

use crate::domain::models::GatewayBox;

/// Builds the gateway from the loaded configuration.
pub fn connect() -> GatewayBox {
    return Box::<PortfolioApi>::default();
}
