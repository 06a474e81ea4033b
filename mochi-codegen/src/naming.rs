//! Entity naming in every casing the generators need.

use mochi_core::{to_camel_case, to_kebab_case, to_pascal_case};

/// One entity's name pre-computed in each target casing.
///
/// Symbol and file names are derived here, in one place, so the
/// generators all agree on spelling by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityNames {
    /// Name as declared in the schema.
    pub raw: String,
    /// PascalCase, for type names ("BlogPost").
    pub pascal: String,
    /// camelCase, for value names ("blogPost").
    pub camel: String,
    /// kebab-case, for file names ("blog-post").
    pub kebab: String,
}

impl EntityNames {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            pascal: to_pascal_case(&raw),
            camel: to_camel_case(&raw),
            kebab: to_kebab_case(&raw),
            raw,
        }
    }

    /// File name for one artifact kind: `<entity-kebab>.<kind>.ts`.
    pub fn artifact_file(&self, kind: &str) -> String {
        format!("{}.{}.ts", self.kebab, kind)
    }

    /// Module specifier for importing a sibling artifact.
    pub fn artifact_module(&self, kind: &str) -> String {
        format!("./{}.{}", self.kebab, kind)
    }

    /// Name of the service façade value ("blogPostService").
    pub fn service_value(&self) -> String {
        format!("{}Service", self.camel)
    }

    /// Name of a validation schema ("createBlogPostSchema").
    pub fn schema_value(&self, prefix: &str) -> String {
        format!("{}{}Schema", prefix, self.pascal)
    }

    /// Name of a request handler ("listBlogPost").
    ///
    /// No pluralization: inflection tables are not deterministic across
    /// entity vocabularies, suffix-free verb + Pascal entity is.
    pub fn handler(&self, verb: &str) -> String {
        format!("{}{}", verb, self.pascal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn casings() {
        let names = EntityNames::new("BlogPost");
        assert_eq!(names.pascal, "BlogPost");
        assert_eq!(names.camel, "blogPost");
        assert_eq!(names.kebab, "blog-post");
    }

    #[test]
    fn artifact_names() {
        let names = EntityNames::new("Post");
        assert_eq!(names.artifact_file("controller"), "post.controller.ts");
        assert_eq!(names.artifact_file("create-dto"), "post.create-dto.ts");
        assert_eq!(names.artifact_module("service"), "./post.service");
    }

    #[test]
    fn symbol_names() {
        let names = EntityNames::new("Post");
        assert_eq!(names.service_value(), "postService");
        assert_eq!(names.schema_value("create"), "createPostSchema");
        assert_eq!(names.handler("list"), "listPost");
        assert_eq!(names.handler("bulkCreate"), "bulkCreatePost");
    }
}
