//! `inno_bundle id` command.

use crate::{cli::args::IdArgs, error::Result};
use uuid::Uuid;

/// Generate an application id.
///
/// With a name the id is a v5 UUID in the URL namespace, so the same name
/// always yields the same id; otherwise a random v4 UUID.
pub fn generate_id(name: Option<&str>) -> Uuid {
    match name {
        Some(name) => Uuid::new_v5(&Uuid::NAMESPACE_URL, name.as_bytes()),
        None => Uuid::new_v4(),
    }
}

/// Print a new application id.
pub fn execute_id(args: &IdArgs) -> Result<i32> {
    let id = generate_id(args.ns.as_deref());
    println!("{}", id.hyphenated());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_ids_are_stable() {
        let first = generate_id(Some("com.example.app"));
        assert_eq!(first, generate_id(Some("com.example.app")));
        assert_ne!(first, generate_id(Some("com.example.other")));
        assert_eq!(first.get_version_num(), 5);
    }

    #[test]
    fn test_random_ids_differ() {
        let id = generate_id(None);
        assert_eq!(id.get_version_num(), 4);
        assert_ne!(id, generate_id(None));
    }
}
