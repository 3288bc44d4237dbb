//! Shared building blocks used by every crate in the workspace:
//! logging setup, runtime environment checks and small wire types.

pub mod env;
pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_serializes_status_and_db_flag() {
        let h = types::Health::new(true);
        let v = serde_json::to_value(&h).unwrap();
        assert_eq!(v["status"], "ok");
        assert_eq!(v["db_healthy"], true);
    }
}
