//! Express request/response conventions.

use crate::config::Framework;
use crate::output::ImportSpec;

use super::{FrameworkStrategy, ParamsShape};

/// Strategy emitting Express 4/5 handler idioms.
///
/// Express types every route parameter as a string already, so the
/// params shape does not widen the signature; `req`/`res` are typed with
/// the stock `Request`/`Response`.
pub struct ExpressStrategy;

impl FrameworkStrategy for ExpressStrategy {
    fn framework(&self) -> Framework {
        Framework::Express
    }

    fn handler_signature(&self, name: &str, _params: Option<&ParamsShape>) -> String {
        format!(
            "export async function {}(req: Request, res: Response): Promise<void> {{",
            name
        )
    }

    fn request_param(&self, key: &str) -> String {
        format!("req.params.{}", key)
    }

    fn request_query(&self) -> String {
        "req.query".to_string()
    }

    fn request_body(&self) -> String {
        "req.body".to_string()
    }

    fn json_response(&self, expr: &str) -> Vec<String> {
        vec![format!("res.json({});", expr), "return;".to_string()]
    }

    fn status_response(&self, status: u16, body: Option<&str>) -> Vec<String> {
        let send = match body {
            Some(expr) => format!("res.status({}).json({});", status, expr),
            None => format!("res.status({}).send();", status),
        };
        vec![send, "return;".to_string()]
    }

    fn imports(&self, _entity_camel: &str) -> Vec<ImportSpec> {
        vec![
            ImportSpec::new("express")
                .symbols(["Request", "Response"])
                .type_only(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature() {
        let strategy = ExpressStrategy;
        assert_eq!(
            strategy.handler_signature("getPost", Some(&ParamsShape::single("id"))),
            "export async function getPost(req: Request, res: Response): Promise<void> {"
        );
    }

    #[test]
    fn request_expressions() {
        let strategy = ExpressStrategy;
        assert_eq!(strategy.request_param("id"), "req.params.id");
        assert_eq!(strategy.request_query(), "req.query");
        assert_eq!(strategy.request_body(), "req.body");
    }

    #[test]
    fn responses() {
        let strategy = ExpressStrategy;
        assert_eq!(
            strategy.json_response("result"),
            ["res.json(result);", "return;"]
        );
        assert_eq!(
            strategy.status_response(201, Some("created")),
            ["res.status(201).json(created);", "return;"]
        );
        assert_eq!(
            strategy.status_response(204, None),
            ["res.status(204).send();", "return;"]
        );
    }
}
