use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::client::{Client, identifier_variables};
use crate::error::ClientError;
use crate::queries;
use crate::types::{
    AliasOwnerType, AliasableResource, Document, Domain, Filter, InfrastructureResource,
    PayloadVariables, Service, System, Team, TriggerDefinition, User,
};

/// The read operations available against an OpsLevel account
#[async_trait]
pub trait OpsLevelApi: Send + Sync {
    async fn list_teams(&self) -> Result<Vec<Team>, ClientError>;

    async fn list_users(&self) -> Result<Vec<User>, ClientError>;

    async fn list_trigger_definitions(&self) -> Result<Vec<TriggerDefinition>, ClientError>;

    async fn list_filters(&self) -> Result<Vec<Filter>, ClientError>;

    async fn list_services(&self) -> Result<Vec<Service>, ClientError>;

    async fn list_infrastructure(&self) -> Result<Vec<InfrastructureResource>, ClientError>;

    async fn list_domains(&self) -> Result<Vec<Domain>, ClientError>;

    async fn list_systems(&self) -> Result<Vec<System>, ClientError>;

    /// Fetch one resource of the given type by its ID or alias
    async fn get_aliasable_resource(
        &self,
        resource_type: AliasOwnerType,
        identifier: &str,
    ) -> Result<AliasableResource, ClientError>;

    /// List documents matching a search term
    async fn list_documents(
        &self,
        variables: &PayloadVariables,
    ) -> Result<Vec<Document>, ClientError>;

    /// Fetch a document, including its content
    async fn get_document(&self, id: &str) -> Result<Document, ClientError>;

    /// List documents attached to a single service
    async fn list_service_documents(
        &self,
        service_id: &str,
        variables: &PayloadVariables,
    ) -> Result<Vec<Document>, ClientError>;
}

#[async_trait]
impl OpsLevelApi for Client {
    async fn list_teams(&self) -> Result<Vec<Team>, ClientError> {
        self.list_all("TeamList", queries::TEAM_LIST, "/account/teams", Map::new())
            .await
    }

    async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.list_all("UserList", queries::USER_LIST, "/account/users", Map::new())
            .await
    }

    async fn list_trigger_definitions(&self) -> Result<Vec<TriggerDefinition>, ClientError> {
        self.list_all(
            "TriggerDefinitionList",
            queries::TRIGGER_DEFINITION_LIST,
            "/account/triggerDefinitions",
            Map::new(),
        )
        .await
    }

    async fn list_filters(&self) -> Result<Vec<Filter>, ClientError> {
        self.list_all(
            "FilterList",
            queries::FILTER_LIST,
            "/account/filters",
            Map::new(),
        )
        .await
    }

    async fn list_services(&self) -> Result<Vec<Service>, ClientError> {
        self.list_all(
            "ServiceList",
            queries::SERVICE_LIST,
            "/account/services",
            Map::new(),
        )
        .await
    }

    async fn list_infrastructure(&self) -> Result<Vec<InfrastructureResource>, ClientError> {
        self.list_all(
            "InfrastructureResourceList",
            queries::INFRASTRUCTURE_LIST,
            "/account/infrastructureResources",
            Map::new(),
        )
        .await
    }

    async fn list_domains(&self) -> Result<Vec<Domain>, ClientError> {
        self.list_all(
            "DomainList",
            queries::DOMAIN_LIST,
            "/account/domains",
            Map::new(),
        )
        .await
    }

    async fn list_systems(&self) -> Result<Vec<System>, ClientError> {
        self.list_all(
            "SystemList",
            queries::SYSTEM_LIST,
            "/account/systems",
            Map::new(),
        )
        .await
    }

    async fn get_aliasable_resource(
        &self,
        resource_type: AliasOwnerType,
        identifier: &str,
    ) -> Result<AliasableResource, ClientError> {
        let by_arguments = Value::Object(identifier_variables(identifier));
        let by_input = Value::Object(Map::from_iter([(
            "input".to_string(),
            Value::Object(identifier_variables(identifier)),
        )]));

        Ok(match resource_type {
            AliasOwnerType::Service => AliasableResource::Service(
                self.get(
                    "ServiceGet",
                    queries::SERVICE_GET,
                    "/account/service",
                    by_arguments,
                )
                .await?,
            ),
            AliasOwnerType::Team => AliasableResource::Team(
                self.get("TeamGet", queries::TEAM_GET, "/account/team", by_arguments)
                    .await?,
            ),
            AliasOwnerType::Group => AliasableResource::Group(
                self.get("GroupGet", queries::GROUP_GET, "/account/group", by_arguments)
                    .await?,
            ),
            AliasOwnerType::System => AliasableResource::System(
                self.get("SystemGet", queries::SYSTEM_GET, "/account/system", by_input)
                    .await?,
            ),
            AliasOwnerType::Domain => AliasableResource::Domain(
                self.get("DomainGet", queries::DOMAIN_GET, "/account/domain", by_input)
                    .await?,
            ),
            AliasOwnerType::InfrastructureResource => AliasableResource::InfrastructureResource(
                self.get(
                    "InfrastructureResourceGet",
                    queries::INFRASTRUCTURE_GET,
                    "/account/infrastructureResource",
                    by_input,
                )
                .await?,
            ),
            AliasOwnerType::Scorecard => AliasableResource::Scorecard(
                self.get(
                    "ScorecardGet",
                    queries::SCORECARD_GET,
                    "/account/scorecard",
                    by_input,
                )
                .await?,
            ),
        })
    }

    async fn list_documents(
        &self,
        variables: &PayloadVariables,
    ) -> Result<Vec<Document>, ClientError> {
        self.list_all(
            "DocumentList",
            queries::DOCUMENT_LIST,
            "/account/documents",
            document_variables(variables)?,
        )
        .await
    }

    async fn get_document(&self, id: &str) -> Result<Document, ClientError> {
        self.get(
            "DocumentGet",
            queries::DOCUMENT_GET,
            "/account/document",
            Value::Object(Map::from_iter([(
                "id".to_string(),
                Value::String(id.to_string()),
            )])),
        )
        .await
    }

    async fn list_service_documents(
        &self,
        service_id: &str,
        variables: &PayloadVariables,
    ) -> Result<Vec<Document>, ClientError> {
        let mut variables = document_variables(variables)?;
        variables.insert("service".to_string(), Value::String(service_id.to_string()));

        self.list_all(
            "ServiceDocumentList",
            queries::SERVICE_DOCUMENT_LIST,
            "/account/service/documents",
            variables,
        )
        .await
    }
}

fn document_variables(variables: &PayloadVariables) -> Result<Map<String, Value>, ClientError> {
    match serde_json::to_value(variables)? {
        Value::Object(map) => Ok(map),
        other => Err(ClientError::Response(format!(
            "document variables must be an object, got {other}"
        ))),
    }
}
