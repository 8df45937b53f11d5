// Browser console logging. Off the browser (native tests) messages go to
// stderr instead, since web_sys imports cannot be called there.

#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn error(message: &str) {
    web_sys::console::error_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(message: &str) {
    eprintln!("{}", message);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(message: &str) {
    eprintln!("error: {}", message);
}

/// Logs a failed browser call and carries on without its value.
pub fn log_err<T, E: std::fmt::Debug>(context: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error(&format!("{}: {:?}", context, e));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_err_passes_values_through() {
        assert_eq!(log_err::<_, String>("read", Ok(3)), Some(3));
    }

    #[test]
    fn log_err_swallows_failures() {
        let failed: Result<(), String> = Err("blocked".to_string());
        assert_eq!(log_err("Failed to focus card input", failed), None);
    }
}
