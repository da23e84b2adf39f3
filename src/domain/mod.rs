// Domain layer: view models, page identifiers and ports. No HTTP or file IO here.

pub mod endpoints;
pub mod model;
pub mod page;
pub mod ports;
