//! Fastify request/response conventions.

use crate::config::Framework;
use crate::output::ImportSpec;

use super::{FrameworkStrategy, ParamsShape};

/// Strategy emitting Fastify handler idioms.
///
/// Fastify types route parameters through the request generic, so the
/// params shape widens the `FastifyRequest` type argument.
pub struct FastifyStrategy;

impl FrameworkStrategy for FastifyStrategy {
    fn framework(&self) -> Framework {
        Framework::Fastify
    }

    fn handler_signature(&self, name: &str, params: Option<&ParamsShape>) -> String {
        let request_ty = match params {
            Some(shape) if !shape.params.is_empty() => {
                let fields = shape
                    .params
                    .iter()
                    .map(|(name, ty)| format!("{}: {}", name, ty))
                    .collect::<Vec<_>>()
                    .join("; ");
                format!("FastifyRequest<{{ Params: {{ {} }} }}>", fields)
            }
            _ => "FastifyRequest".to_string(),
        };
        format!(
            "export async function {}(request: {}, reply: FastifyReply): Promise<void> {{",
            name, request_ty
        )
    }

    fn request_param(&self, key: &str) -> String {
        format!("request.params.{}", key)
    }

    fn request_query(&self) -> String {
        "request.query".to_string()
    }

    fn request_body(&self) -> String {
        "request.body".to_string()
    }

    fn json_response(&self, expr: &str) -> Vec<String> {
        vec![format!("reply.send({});", expr), "return;".to_string()]
    }

    fn status_response(&self, status: u16, body: Option<&str>) -> Vec<String> {
        let send = match body {
            Some(expr) => format!("reply.status({}).send({});", status, expr),
            None => format!("reply.status({}).send();", status),
        };
        vec![send, "return;".to_string()]
    }

    fn imports(&self, _entity_camel: &str) -> Vec<ImportSpec> {
        vec![
            ImportSpec::new("fastify")
                .symbols(["FastifyReply", "FastifyRequest"])
                .type_only(),
        ]
    }
}
