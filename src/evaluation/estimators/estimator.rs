/// Incremental scalar estimator (e.g. a running mean).
pub trait Estimator {
    /// Incorporates a new observation. `NaN` observations are ignored.
    fn add(&mut self, v: f64);

    /// Returns the current estimate, `NaN` before the first observation.
    fn estimation(&self) -> f64;

    /// Number of observations incorporated so far.
    fn count(&self) -> u64;
}
