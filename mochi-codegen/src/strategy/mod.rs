//! Backend convention abstraction.
//!
//! Each supported request-handling backend answers the same fixed set of
//! questions - how to declare a handler, read a parameter, send a
//! response - through one [`FrameworkStrategy`] implementation. Artifact
//! generators talk only to the trait; adding a backend means adding one
//! module here and a [`Framework`] variant, nothing else.

mod express;
mod fastify;

pub use express::ExpressStrategy;
pub use fastify::FastifyStrategy;

use crate::config::Framework;
use crate::output::ImportSpec;

/// Route parameters a handler declaration should be typed against.
///
/// Parameter values arrive as strings on every supported backend; the
/// type is carried anyway so a future backend with richer route typing
/// does not change the trait.
#[derive(Debug, Clone, Default)]
pub struct ParamsShape {
    pub params: Vec<(String, String)>,
}

impl ParamsShape {
    /// Shape with a single string-typed parameter.
    pub fn single(name: impl Into<String>) -> Self {
        Self {
            params: vec![(name.into(), "string".to_string())],
        }
    }
}

/// Capability object encapsulating one backend's request/response idiom.
///
/// Implementations are stateless unit structs: every operation is a pure
/// function of its inputs, so one `'static` instance can serve any number
/// of concurrent generation runs.
pub trait FrameworkStrategy: Sync {
    /// The backend this strategy serves.
    fn framework(&self) -> Framework;

    /// Opening line of an exported async request handler named `name`,
    /// optionally typed against `params`.
    fn handler_signature(&self, name: &str, params: Option<&ParamsShape>) -> String;

    /// Expression reading a named route parameter.
    fn request_param(&self, key: &str) -> String;

    /// Expression reading the parsed query string.
    fn request_query(&self) -> String;

    /// Expression reading the parsed request body.
    fn request_body(&self) -> String;

    /// Statement lines sending `expr` as JSON with the default success
    /// status, then ending the handler.
    fn json_response(&self, expr: &str) -> Vec<String>;

    /// Statement lines sending an explicit status with an optional body,
    /// then ending the handler.
    fn status_response(&self, status: u16, body: Option<&str>) -> Vec<String>;

    /// Import declarations every handler for the entity needs.
    fn imports(&self, entity_camel: &str) -> Vec<ImportSpec>;
}

static EXPRESS: ExpressStrategy = ExpressStrategy;
static FASTIFY: FastifyStrategy = FastifyStrategy;

/// Resolve the strategy instance for a backend.
pub fn strategy_for(framework: Framework) -> &'static dyn FrameworkStrategy {
    match framework {
        Framework::Express => &EXPRESS,
        Framework::Fastify => &FASTIFY,
    }
}
