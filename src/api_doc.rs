use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "greeting-server API",
        version = "1.0.0",
        description = "A minimal HTTP service returning fixed plain-text greetings"
    ),
    paths(handlers::root::root_handler, handlers::new::new_handler),
    components(schemas(ErrorResponse)),
    tags(
        (name = "greetings", description = "Static greeting endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greetings;

    #[test]
    fn test_documented_paths_match_registry() {
        let doc = ApiDoc::openapi();
        let documented: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        assert_eq!(documented.len(), greetings::GREETINGS.len());
        for (path, _) in greetings::GREETINGS {
            assert!(
                documented.contains(path),
                "Registered route '{}' is missing from the API doc",
                path
            );
        }
    }
}
