/// Marker trait for UI state.
///
/// States are plain values: cloned to snapshot, compared to detect changes,
/// and defaulted to obtain the initial state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
