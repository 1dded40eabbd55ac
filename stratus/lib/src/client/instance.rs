//! Configured client instances.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument, Span};

use super::params::validate_params;
use super::{ClientType, OperationRequest, Transport};
use crate::config::EffectiveConfig;
use crate::error::{StratusError, TransportError};
use crate::taxonomy::{ErrorContext, ErrorNamespace};

/// A usable client: a [`ClientType`] that passed the configuration gate.
///
/// Obtain one through [`ServiceModule::new_client`](crate::ServiceModule::new_client).
#[derive(Debug, Clone)]
pub struct Client {
    client_type: Arc<ClientType>,
    errors: Arc<ErrorNamespace>,
    config: EffectiveConfig,
    transport: Arc<dyn Transport>,
}

impl Client {
    pub(crate) fn new(
        client_type: Arc<ClientType>,
        errors: Arc<ErrorNamespace>,
        config: EffectiveConfig,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            client_type,
            errors,
            config,
            transport,
        }
    }

    /// The client type this instance was built from.
    pub fn client_type(&self) -> &ClientType {
        &self.client_type
    }

    /// The error namespace of this client's service.
    pub fn errors(&self) -> &ErrorNamespace {
        &self.errors
    }

    /// The configuration this instance was constructed with.
    pub fn config(&self) -> &EffectiveConfig {
        &self.config
    }

    /// Calls an operation by name.
    ///
    /// ## Errors
    ///
    /// - [`StratusError::UnknownOperation`] if the service has no such operation
    /// - [`StratusError::Validation`] if `params` do not fit the input shape
    /// - [`StratusError::Service`] if the service reported an error code
    /// - [`StratusError::Transport`] for any other transport failure
    #[instrument(
        name = "service_call",
        skip(self, params),
        fields(service = %self.client_type.service(), otel.status_code = tracing::field::Empty)
    )]
    pub fn call(&self, operation: &str, params: Value) -> Result<Value, StratusError> {
        let service = self.client_type.service();
        let descriptor =
            self.client_type
                .operation(operation)
                .ok_or_else(|| StratusError::UnknownOperation {
                    service: service.to_string(),
                    operation: operation.to_string(),
                })?;

        validate_params(self.client_type.api(), descriptor, &params)?;

        let request = OperationRequest {
            service,
            operation: descriptor,
            params: &params,
            config: &self.config,
        };

        match self.transport.send(&request) {
            Ok(response) => {
                Span::current().record("otel.status_code", "OK");
                Ok(response)
            }
            Err(TransportError::Service { code, message }) => {
                Span::current().record("otel.status_code", "ERROR");
                debug!(code = %code, "service returned an error");
                let context = ErrorContext::new(service, operation, params);
                Err(self.errors.error(&code, message, context).into())
            }
            Err(other) => {
                Span::current().record("otel.status_code", "ERROR");
                Err(other.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::build_client;
    use crate::model::ApiModel;
    use crate::taxonomy::build_errors;
    use serde_json::json;
    use std::sync::Mutex;
    use tracing_test::traced_test;

    /// Replays canned responses and records what it was asked to send.
    #[derive(Debug, Default)]
    struct ScriptedTransport {
        responses: Mutex<Vec<Result<Value, TransportError>>>,
        seen: Mutex<Vec<(String, Value, Option<String>)>>,
    }

    impl ScriptedTransport {
        fn replying(response: Result<Value, TransportError>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(vec![response]),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    impl Transport for ScriptedTransport {
        fn send(&self, request: &OperationRequest<'_>) -> Result<Value, TransportError> {
            self.seen.lock().unwrap().push((
                request.operation.name.clone(),
                request.params.clone(),
                request.config.region().map(str::to_string),
            ));
            self.responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Ok(Value::Null))
        }
    }

    fn client(transport: Arc<dyn Transport>) -> Client {
        let model = ApiModel::try_from(json!({
            "operations": {
                "GetThing": {
                    "input": { "shape": "GetThingRequest" },
                    "errors": [{ "shape": "NotFoundException" }]
                }
            },
            "shapes": {
                "GetThingRequest": { "type": "structure", "required": ["Id"] },
                "NotFoundException": {
                    "type": "structure",
                    "exception": true,
                    "error": { "code": "NotFound" }
                }
            }
        }))
        .unwrap();
        let errors = build_errors("Things", &model).unwrap();
        let client_type = build_client("Things", model);
        let config = crate::config::resolve(
            "Things",
            client_type.api(),
            &crate::config::ConfigStore::new(),
            &crate::config::ClientOptions::new()
                .region("eu-central-1")
                .credentials(crate::config::Credentials::new("a", "b")),
        )
        .unwrap();
        Client::new(Arc::new(client_type), Arc::new(errors), config, transport)
    }

    #[test]
    fn successful_call_returns_response() {
        let transport = ScriptedTransport::replying(Ok(json!({ "Name": "thing" })));
        let client = client(transport.clone());

        let out = client.call("GetThing", json!({ "Id": "t-1" })).unwrap();
        assert_eq!(out, json!({ "Name": "thing" }));

        let seen = transport.seen.lock().unwrap();
        assert_eq!(
            seen[0],
            (
                "GetThing".to_string(),
                json!({ "Id": "t-1" }),
                Some("eu-central-1".to_string())
            )
        );
    }

    #[test]
    fn unknown_operation_is_rejected_before_transport() {
        let transport = ScriptedTransport::replying(Ok(Value::Null));
        let client = client(transport.clone());

        let err = client.call("PutThing", Value::Null).unwrap_err();
        assert!(matches!(
            err,
            StratusError::UnknownOperation { ref operation, .. } if operation == "PutThing"
        ));
        assert!(transport.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn invalid_params_never_reach_transport() {
        let transport = ScriptedTransport::replying(Ok(Value::Null));
        let client = client(transport.clone());

        let err = client.call("GetThing", json!({})).unwrap_err();
        assert!(matches!(err, StratusError::Validation(_)));
        assert!(transport.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn service_error_maps_to_declared_class() {
        let transport =
            ScriptedTransport::replying(Err(TransportError::service("NotFound", "no such thing")));
        let client = client(transport);

        let err = client.call("GetThing", json!({ "Id": "t-9" })).unwrap_err();
        let service_err = err.as_service_error().unwrap();
        assert!(service_err.is_a(client.errors().class("NotFound").unwrap()));
        assert!(service_err.is_a(client.errors().base()));
        assert_eq!(service_err.context().operation, "GetThing");
        assert_eq!(service_err.context().params, json!({ "Id": "t-9" }));
    }

    #[test]
    fn undeclared_code_still_derives_from_base() {
        let transport =
            ScriptedTransport::replying(Err(TransportError::service("Throttling", "slow down")));
        let client = client(transport);

        let err = client.call("GetThing", json!({ "Id": "t-1" })).unwrap_err();
        let service_err = err.as_service_error().unwrap();
        assert_eq!(service_err.class().name(), "Throttling");
        assert!(!service_err.class().is_declared());
        assert!(service_err.is_a(client.errors().base()));
    }

    #[test]
    fn network_failures_stay_transport_errors() {
        let transport =
            ScriptedTransport::replying(Err(TransportError::Network("connection reset".into())));
        let client = client(transport);

        let err = client.call("GetThing", json!({ "Id": "t-1" })).unwrap_err();
        assert!(matches!(err, StratusError::Transport(TransportError::Network(_))));
    }

    #[traced_test]
    #[test]
    fn service_errors_are_logged() {
        let transport =
            ScriptedTransport::replying(Err(TransportError::service("NotFound", "gone")));
        let client = client(transport);

        let _ = client.call("GetThing", json!({ "Id": "t-1" }));
        assert!(logs_contain("service returned an error"));
    }
}
