//! Workflow service protocol types
//!
//! Request payloads the suite sends, the response envelope the service
//! answers with, and the tagged [`Outcome`] every call is reduced to.
//! All bodies are JSON with camelCase keys.

use reqwest::Method;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A state of a workflow definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSpec {
    pub id: String,
    pub name: String,
    pub is_initial: bool,
    pub is_final: bool,
    pub enabled: bool,
}

impl StateSpec {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            is_initial: false,
            is_final: false,
            enabled: true,
        }
    }

    pub fn initial(mut self) -> Self {
        self.is_initial = true;
        self
    }

    pub fn terminal(mut self) -> Self {
        self.is_final = true;
        self
    }
}

/// A transition between states of a workflow definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSpec {
    pub id: String,
    pub name: String,
    pub enabled: bool,
    pub from_states: Vec<String>,
    pub to_state: String,
}

impl ActionSpec {
    pub fn new(id: &str, name: &str, from: &[&str], to: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            enabled: true,
            from_states: from.iter().map(|s| s.to_string()).collect(),
            to_state: to.to_string(),
        }
    }
}

/// Body of a create-definition request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionSpec {
    pub name: String,
    pub states: Vec<StateSpec>,
    pub actions: Vec<ActionSpec>,
}

// Lookups for code that plays the service side, such as test stubs.
impl DefinitionSpec {
    /// The state an instance starts in, if the definition names one
    pub fn initial_state(&self) -> Option<&StateSpec> {
        self.states.iter().find(|s| s.is_initial)
    }

    pub fn action(&self, id: &str) -> Option<&ActionSpec> {
        self.actions.iter().find(|a| a.id == id)
    }

    pub fn state(&self, id: &str) -> Option<&StateSpec> {
        self.states.iter().find(|s| s.id == id)
    }
}

/// Body of an execute-action request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteAction {
    pub action_id: String,
}

/// JSON body attached to a request
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RequestBody {
    Definition(DefinitionSpec),
    ExecuteAction(ExecuteAction),
}

/// One call against the workflow service
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// Path appended verbatim to the base URL, always starting with `/`
    pub path: String,
    pub body: Option<RequestBody>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn create_definition(definition: DefinitionSpec) -> Self {
        Self::new(Method::POST, "/api/definitions").with_body(RequestBody::Definition(definition))
    }

    pub fn get_definition(id: &str) -> Self {
        Self::new(Method::GET, format!("/api/definitions/{id}"))
    }

    pub fn list_definitions() -> Self {
        Self::new(Method::GET, "/api/definitions")
    }

    pub fn start_instance(definition_id: &str) -> Self {
        Self::new(Method::POST, format!("/api/instances/{definition_id}"))
    }

    pub fn get_instance(id: &str) -> Self {
        Self::new(Method::GET, format!("/api/instances/{id}"))
    }

    pub fn list_instances() -> Self {
        Self::new(Method::GET, "/api/instances")
    }

    pub fn execute_action(instance_id: &str, action_id: &str) -> Self {
        Self::new(Method::POST, format!("/api/instances/{instance_id}/actions")).with_body(
            RequestBody::ExecuteAction(ExecuteAction {
                action_id: action_id.to_string(),
            }),
        )
    }
}

/// Response envelope returned by every endpoint
///
/// An empty body decodes to the default envelope, whose `success` is false.
/// So does any JSON body that is not an object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Anything but a literal `true` reads as false
    #[serde(default, deserialize_with = "lenient_flag")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
    /// Any other keys the service sent, kept for verbose output
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApiResponse {
    /// Decode a raw response body; fails only when the bytes are not JSON
    pub fn from_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let value: Value = serde_json::from_slice(bytes)?;
        match value {
            value @ Value::Object(_) => serde_json::from_value(value),
            other => {
                tracing::debug!("response body is not an object: {}", other);
                Ok(Self::default())
            }
        }
    }

    /// `data.id`, with numeric ids rendered as strings
    pub fn data_id(&self) -> Option<String> {
        match self.data.as_ref()?.get("id")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// The service's own explanation, from `error` or `message`
    pub fn reason(&self) -> Option<String> {
        [&self.error, &self.message]
            .into_iter()
            .flatten()
            .find_map(|v| match v {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            })
    }
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

/// How a single call ended
#[derive(Debug, Clone)]
pub enum Outcome {
    /// No usable HTTP response: connection refused, timeout, undecodable body
    Transport(String),
    /// The service answered with a status of 400 or above
    Http { status: u16, body: ApiResponse },
    /// The service answered below 400; `body.success` carries the verdict
    Applied(ApiResponse),
}

impl Outcome {
    /// Classify a decoded response by its status code
    pub fn from_status(status: u16, body: ApiResponse) -> Self {
        if status >= 400 {
            Self::Http { status, body }
        } else {
            Self::Applied(body)
        }
    }

    /// Classify a raw response
    ///
    /// An error status wins over an undecodable body; below 400 a body that
    /// is not JSON is a transport fault.
    pub fn from_response(status: u16, bytes: &[u8]) -> Self {
        match ApiResponse::from_bytes(bytes) {
            Ok(body) => Self::from_status(status, body),
            Err(e) if status >= 400 => {
                tracing::debug!(status, "error response with undecodable body: {}", e);
                Self::Http {
                    status,
                    body: ApiResponse::default(),
                }
            }
            Err(e) => {
                tracing::warn!(status, "undecodable response body: {}", e);
                Self::Transport(format!("malformed response body (HTTP {status}): {e}"))
            }
        }
    }

    /// Transport succeeded and the status was below 400
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// The service applied the request and reported success
    pub fn accepted(&self) -> bool {
        matches!(self, Self::Applied(body) if body.success)
    }

    /// Any of: transport failure, error status, or a body-level failure
    pub fn rejected(&self) -> bool {
        !self.accepted()
    }

    pub fn body(&self) -> Option<&ApiResponse> {
        match self {
            Self::Transport(_) => None,
            Self::Http { body, .. } | Self::Applied(body) => Some(body),
        }
    }

    /// Identifier of a newly created resource
    pub fn created_id(&self) -> Option<String> {
        match self {
            Self::Applied(body) if body.success => body.data_id(),
            _ => None,
        }
    }

    /// Human-readable account of what happened
    pub fn describe(&self) -> String {
        match self {
            Self::Transport(message) => format!("request failed: {message}"),
            Self::Http { status, body } => match body.reason() {
                Some(reason) => format!("HTTP {status}: {reason}"),
                None => format!("HTTP {status}"),
            },
            Self::Applied(body) if body.success => "service reported success".to_string(),
            Self::Applied(body) => match body.reason() {
                Some(reason) => format!("service reported failure: {reason}"),
                None => "service reported failure".to_string(),
            },
        }
    }
}
