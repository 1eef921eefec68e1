/// Read access to environment variables
///
/// Injected into the path resolver so that template expansion never touches
/// process-global state directly.
pub trait Environment: Send + Sync {
    /// Look up a variable by name
    ///
    /// # Returns
    /// * `Some(value)` if the variable is set (possibly to an empty string)
    /// * `None` if the variable is unset or not valid unicode
    fn var(&self, name: &str) -> Option<String>;
}
