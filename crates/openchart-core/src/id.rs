/// Generates a fresh uuid for a newly constructed entity.
pub fn generate_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_uuids_are_unique() {
        assert_ne!(generate_uuid(), generate_uuid());
    }

    #[test]
    fn test_generated_uuid_parses() {
        assert!(uuid::Uuid::parse_str(&generate_uuid()).is_ok());
    }
}
