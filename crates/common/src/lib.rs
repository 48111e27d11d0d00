//! Shared helpers for the car rental workspace: logging setup and small response types.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn health_type_degraded() {
        let h = types::Health::degraded();
        assert_eq!(h.status, "degraded");
    }
}
