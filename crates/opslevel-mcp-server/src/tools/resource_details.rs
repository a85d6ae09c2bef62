use std::sync::Arc;

use async_trait::async_trait;
use opslevel_client::{AliasOwnerType, OpsLevelApi};
use rmcp::model::{CallToolResult, JsonObject, Tool};
use rmcp::schemars::schema::{InstanceType, Schema, SchemaObject};
use rmcp::schemars::{self, JsonSchema};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{AccountTool, input_schema, json_result, parse_arguments};
use crate::errors::{McpError, downstream};

/// The name of the tool to fetch a single resource by ID or alias
pub const RESOURCE_DETAILS_TOOL_NAME: &str = "resourceDetails";

/// The `resourceType` argument, a string naming one of the aliasable kinds
fn resource_type_schema(_generator: &mut schemars::r#gen::SchemaGenerator) -> Schema {
    Schema::Object(SchemaObject {
        instance_type: Some(InstanceType::String.into()),
        enum_values: Some(
            AliasOwnerType::ALL
                .iter()
                .map(|kind| Value::from(kind.as_str()))
                .collect(),
        ),
        ..Default::default()
    })
}

/// Input for the resource details tool
#[derive(JsonSchema, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// The type of the resource.
    #[schemars(schema_with = "resource_type_schema")]
    resource_type: AliasOwnerType,

    /// The ID or alias of the resource.
    identifier: String,
}

pub struct ResourceDetails {
    api: Arc<dyn OpsLevelApi>,
    pub tool: Tool,
}

impl ResourceDetails {
    pub fn new(api: Arc<dyn OpsLevelApi>) -> Self {
        let kinds = AliasOwnerType::ALL
            .iter()
            .map(AliasOwnerType::as_str)
            .collect::<Vec<_>>()
            .join(",");
        Self {
            api,
            tool: Tool::new(
                RESOURCE_DETAILS_TOOL_NAME,
                format!(
                    "Get details for a single resource ({kinds}) in an OpsLevel account using its ID or alias."
                ),
                input_schema::<Input>(),
            ),
        }
    }
}

#[async_trait]
impl AccountTool for ResourceDetails {
    fn tool(&self) -> &Tool {
        &self.tool
    }

    async fn execute(&self, arguments: JsonObject) -> Result<CallToolResult, McpError> {
        let input: Input = parse_arguments(arguments)?;
        debug!(resource_type = %input.resource_type, identifier = %input.identifier, "Fetching resource details");

        let resource = self
            .api
            .get_aliasable_resource(input.resource_type, &input.identifier)
            .await
            .map_err(downstream)?;
        json_result(&resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::{Call, StubApi, text_of};
    use rmcp::model::ErrorCode;
    use rstest::rstest;
    use serde_json::json;

    fn arguments(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => JsonObject::new(),
        }
    }

    #[tokio::test]
    async fn it_fetches_a_service_by_alias() {
        let api = Arc::new(StubApi::default());
        let tool = ResourceDetails::new(api.clone());

        let result = tool
            .execute(arguments(json!({
                "resourceType": "service",
                "identifier": "svc"
            })))
            .await
            .unwrap();

        let body: Value = serde_json::from_str(&text_of(&result)).unwrap();
        assert_eq!(body["id"], "X1");
        assert_eq!(body["htmlUrl"], "http://x");
        assert_eq!(body["owner"]["alias"], "team-a");
        assert_eq!(
            api.calls(),
            vec![Call::GetResource(AliasOwnerType::Service, "svc".to_string())]
        );
    }

    #[rstest]
    #[case("domain", AliasOwnerType::Domain)]
    #[case("group", AliasOwnerType::Group)]
    #[case("infrastructure_resource", AliasOwnerType::InfrastructureResource)]
    #[case("scorecard", AliasOwnerType::Scorecard)]
    #[case("service", AliasOwnerType::Service)]
    #[case("system", AliasOwnerType::System)]
    #[case("team", AliasOwnerType::Team)]
    #[tokio::test]
    async fn every_resource_type_is_dispatched(
        #[case] resource_type: &str,
        #[case] expected: AliasOwnerType,
    ) {
        let api = Arc::new(StubApi::default());
        let identifier = "Z2lkOi8vb3BzbGV2ZWwvRG9tYWluLzE";

        ResourceDetails::new(api.clone())
            .execute(arguments(json!({
                "resourceType": resource_type,
                "identifier": identifier
            })))
            .await
            .unwrap();

        assert_eq!(
            api.calls(),
            vec![Call::GetResource(expected, identifier.to_string())]
        );
    }

    #[tokio::test]
    async fn unknown_resource_types_are_rejected_before_any_request() {
        let api = Arc::new(StubApi::default());

        let error = ResourceDetails::new(api.clone())
            .execute(arguments(json!({
                "resourceType": "widget",
                "identifier": "x"
            })))
            .await
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
        assert!(error.message.starts_with("Invalid input: unknown variant `widget`"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn a_missing_identifier_is_rejected() {
        let api = Arc::new(StubApi::default());

        let error = ResourceDetails::new(api.clone())
            .execute(arguments(json!({ "resourceType": "team" })))
            .await
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn lookup_failures_are_forwarded() {
        let api = Arc::new(StubApi::failing());

        let error = ResourceDetails::new(api)
            .execute(arguments(json!({
                "resourceType": "team",
                "identifier": "nobody"
            })))
            .await
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::INTERNAL_ERROR);
        assert_eq!(error.message, StubApi::FAILURE);
    }

    #[test]
    fn the_description_lists_every_resource_type() {
        let tool = ResourceDetails::new(Arc::new(StubApi::default()));

        let descriptor = serde_json::to_value(&tool.tool).unwrap();

        assert_eq!(
            descriptor["description"],
            "Get details for a single resource (domain,group,infrastructure_resource,scorecard,service,system,team) in an OpsLevel account using its ID or alias."
        );
    }

    #[test]
    fn the_input_schema_enumerates_every_resource_type() {
        let tool = ResourceDetails::new(Arc::new(StubApi::default()));
        let schema = Value::Object(tool.tool.input_schema.as_ref().clone());

        let advertised = schema
            .pointer("/properties/resourceType/enum")
            .and_then(Value::as_array)
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect::<Vec<_>>();

        assert_eq!(
            advertised,
            AliasOwnerType::ALL
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
        );
        assert_eq!(
            schema.pointer("/properties/resourceType/type"),
            Some(&json!("string"))
        );
        assert_eq!(
            schema.pointer("/required"),
            Some(&json!(["identifier", "resourceType"]))
        );
    }
}
