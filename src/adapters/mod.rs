// Adapters layer: turns engine outcomes into something a person or a script can read.

pub mod render;
