//! Terminal and JSON rendering for CLI results.

use std::fmt::Write;

use colored::Colorize;
use serde_json::{json, Value};
use stratus_lib::{EffectiveConfig, ServiceModule};

/// Human-readable summary of a registered service.
pub fn inspect_text(service: &ServiceModule) -> String {
    let client_type = service.client_type();
    let errors = service.errors();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} ({} operations, {} error classes)",
        service.name().as_str().bold(),
        client_type.operation_names().len(),
        errors.len()
    );

    if let Some(version) = service.api().metadata_str("apiVersion") {
        let _ = writeln!(out, "{} {version}", "api version:".dimmed());
    }

    let _ = writeln!(out, "\n{}", "Operations".underline());
    if client_type.operation_names().is_empty() {
        let _ = writeln!(out, "  {}", "(none)".dimmed());
    }
    for op in client_type.operations() {
        let _ = write!(
            out,
            "  {} {} {}",
            op.name.cyan(),
            op.http.method.to_string().yellow(),
            op.http.request_uri
        );
        if let Some(input) = &op.input {
            let _ = write!(out, "  in: {input}");
        }
        if let Some(output) = &op.output {
            let _ = write!(out, "  out: {output}");
        }
        out.push('\n');
    }

    let _ = writeln!(out, "\n{}", "Errors".underline());
    let _ = writeln!(out, "  {}", errors.base().qualified_name().green());
    for class in errors.classes() {
        let _ = write!(out, "    {}", class.qualified_name().red());
        if let Some(code) = class.code().filter(|code| *code != class.name()) {
            let _ = write!(out, "  code: {code}");
        }
        out.push('\n');
    }

    out
}

/// JSON summary of a registered service.
pub fn inspect_json(service: &ServiceModule) -> Value {
    let errors = service.errors();
    let classes: Vec<Value> = errors
        .classes()
        .map(|class| {
            json!({
                "name": class.name(),
                "code": class.code(),
                "qualifiedName": class.qualified_name(),
                "ancestors": class.ancestors(),
            })
        })
        .collect();

    json!({
        "service": service.name().as_str(),
        "metadata": service.api().metadata(),
        "operations": service.client_type().operations().collect::<Vec<_>>(),
        "errorBase": errors.base().qualified_name(),
        "errorClasses": classes,
    })
}

/// Summary of a configuration that passed the gate.
///
/// Only the access key id of the credentials is shown.
pub fn config_text(service: &str, config: &EffectiveConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {service} client can be constructed", "ok:".green().bold());

    let _ = writeln!(out, "  region: {}", config.region().unwrap_or("-"));
    let _ = writeln!(
        out,
        "  credentials: {}",
        config
            .credentials()
            .map_or("-", |creds| creds.access_key_id.as_str())
    );
    if let Some(endpoint) = config.endpoint() {
        let _ = writeln!(out, "  endpoint: {endpoint}");
    }
    for (key, value) in config.extra() {
        let _ = writeln!(out, "  {key}: {value}");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratus_lib::{ClientOptions, Credentials, Stratus};

    fn service() -> std::sync::Arc<ServiceModule> {
        colored::control::set_override(false);
        Stratus::new()
            .add_service(
                "Dummy",
                json!({
                    "metadata": { "apiVersion": "2024-01-01" },
                    "operations": {
                        "GetThing": {
                            "http": { "method": "GET", "requestUri": "/things/{Id}" },
                            "output": { "shape": "Thing" }
                        }
                    },
                    "shapes": {
                        "NotFoundException": {
                            "exception": true,
                            "error": { "code": "NotFound" }
                        }
                    }
                }),
            )
            .unwrap()
    }

    #[test]
    fn text_lists_operations_and_classes() {
        let text = inspect_text(&service());
        assert!(text.contains("Dummy (1 operations, 1 error classes)"));
        assert!(text.contains("api version: 2024-01-01"));
        assert!(text.contains("GetThing GET /things/{Id}  out: Thing"));
        assert!(text.contains("Dummy::Errors::ServiceError"));
        assert!(text.contains("Dummy::Errors::NotFound"));
    }

    #[test]
    fn json_includes_ancestry() {
        let value = inspect_json(&service());
        assert_eq!(value["service"], "Dummy");
        assert_eq!(value["operations"][0]["name"], "GetThing");
        assert_eq!(value["operations"][0]["http"]["method"], "GET");
        assert_eq!(value["errorClasses"][0]["name"], "NotFound");
        assert_eq!(
            value["errorClasses"][0]["ancestors"][1],
            "Dummy::Errors::ServiceError"
        );
    }

    #[test]
    fn config_text_hides_secret() {
        let client = service()
            .new_client(
                ClientOptions::new()
                    .region("us-east-1")
                    .credentials(Credentials::new("AKIDEXAMPLE", "very-secret"))
                    .option("retries", json!(3)),
            )
            .unwrap();

        let text = config_text("Dummy", client.config());
        assert!(text.contains("region: us-east-1"));
        assert!(text.contains("credentials: AKIDEXAMPLE"));
        assert!(text.contains("retries: 3"));
        assert!(!text.contains("very-secret"));
    }
}
