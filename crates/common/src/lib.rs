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
    fn deleted_message_names_entity() {
        let d = types::DeleteStatus::deleted("submenu");
        assert_eq!(d.status, "true");
        assert_eq!(d.message, "The submenu has been deleted");
    }
}
