//! Common types

use uuid::Uuid;

pub type EntityId = Uuid;

pub fn new_id() -> EntityId {
    Uuid::new_v4()
}

/// Location of a single supplier resource, as sent back in `Location` headers.
pub fn supplier_location(id: &EntityId) -> String {
    format!("{}/{}", crate::constants::SUPPLIER_RESOURCE_PATH, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_location() {
        let id = Uuid::nil();
        assert_eq!(
            supplier_location(&id),
            "/fornecedor/00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_new_id_is_unique() {
        assert_ne!(new_id(), new_id());
    }
}
