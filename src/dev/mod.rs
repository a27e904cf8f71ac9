/// Development utilities module
///
/// Only built with the `development` feature.

pub mod screenshot;
