use crate::math::Tensor;

/// Install `env_logger` with `default_level` unless `RUST_LOG` overrides it.
///
/// Returns `false` if a logger was already installed.
pub fn init_logging(default_level: &str) -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init()
        .is_ok()
}

/// Short one-line rendering of a tensor for log messages.
///
/// Shows at most `max_items` leading values followed by `...` when the
/// tensor holds more.
pub fn preview(tensor: &Tensor, decimal_places: usize, max_items: usize) -> String {
    let shown = tensor.size().min(max_items);
    let mut cells: Vec<String> = tensor.data()[..shown]
        .iter()
        .map(|v| format!("{:.*}", decimal_places, v))
        .collect();
    if shown < tensor.size() {
        cells.push("...".to_string());
    }
    format!("tensor(shape={:?}, [{}])", tensor.shape(), cells.join(", "))
}
