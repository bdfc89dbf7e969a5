// Domain layer: order/report values, the report transform, and the ports the
// pipeline is built against.

pub mod model;
pub mod ports;
pub mod report;
pub mod sample;
