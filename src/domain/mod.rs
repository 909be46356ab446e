// Domain layer: ports the helpers write through. No external dependencies.

pub mod ports;
