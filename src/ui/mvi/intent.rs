/// Marker trait for intents: user input, timer ticks and fetch results
/// delivered to a reducer.
pub trait Intent: Send + 'static {}
