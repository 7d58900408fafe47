// Greeting registry - the fixed path-to-body mapping served by the
// dispatcher. Entries are created at compile time and never mutated.

pub const ROOT_GREETING: &str = "Hello, CI/CD World!";
pub const NEW_GREETING: &str = "Hello, New Endpoint!";

/// All registered greetings as (path, body) pairs.
pub const GREETINGS: &[(&str, &str)] = &[
    (crate::routes::ROOT, ROOT_GREETING),
    (crate::routes::NEW, NEW_GREETING),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;

    #[test]
    fn test_registry_entries() {
        assert_eq!(GREETINGS.len(), 2);

        let root = GREETINGS.iter().find(|(path, _)| *path == routes::ROOT);
        assert_eq!(root, Some(&(routes::ROOT, "Hello, CI/CD World!")));

        let new = GREETINGS.iter().find(|(path, _)| *path == routes::NEW);
        assert_eq!(new, Some(&(routes::NEW, "Hello, New Endpoint!")));
    }

    #[test]
    fn test_registry_paths_are_unique() {
        for (i, (path, _)) in GREETINGS.iter().enumerate() {
            for (other, _) in &GREETINGS[i + 1..] {
                assert_ne!(path, other, "Registry paths must not collide");
            }
        }
    }
}
