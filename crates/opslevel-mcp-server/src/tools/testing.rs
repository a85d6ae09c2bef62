//! An in-memory [`OpsLevelApi`] for exercising tools without a network

use std::sync::Mutex;

use async_trait::async_trait;
use opslevel_client::types::{
    Document, DocumentSource, Domain, EntityOwner, Filter, InfrastructureResource,
    InfrastructureResourceSchema, KnownSource, Predicate, Reference, RepositoryReference, Service,
    ServiceReference, ServiceRepository, System, Team, Timestamps, TriggerDefinition, User,
};
use opslevel_client::{
    AliasOwnerType, AliasableResource, ClientError, OpsLevelApi, PayloadVariables,
};
use rmcp::model::{CallToolResult, RawContent};

/// A downstream call recorded by [`StubApi`]
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    ListTeams,
    ListUsers,
    ListTriggerDefinitions,
    ListFilters,
    ListServices,
    ListInfrastructure,
    ListDomains,
    ListSystems,
    GetResource(AliasOwnerType, String),
    ListDocuments(PayloadVariables),
    GetDocument(String),
    ListServiceDocuments(String, PayloadVariables),
}

#[derive(Default)]
pub(crate) struct StubApi {
    fail: bool,
    empty: bool,
    calls: Mutex<Vec<Call>>,
}

impl StubApi {
    pub(crate) const FAILURE: &'static str = "GraphQL error: unauthorized";

    /// Every call fails with a GraphQL error
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Every listing is empty
    pub(crate) fn empty() -> Self {
        Self {
            empty: true,
            ..Default::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn respond<T>(&self, call: Call, value: impl FnOnce() -> T) -> Result<T, ClientError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            Err(ClientError::GraphQL("unauthorized".to_string()))
        } else {
            Ok(value())
        }
    }

    fn list<T>(&self, call: Call, nodes: impl FnOnce() -> Vec<T>) -> Result<Vec<T>, ClientError> {
        let empty = self.empty;
        self.respond(call, || if empty { Vec::new() } else { nodes() })
    }

    fn owner() -> EntityOwner {
        EntityOwner {
            alias: "team-a".to_string(),
            id: "Z2lkOi8vb3BzbGV2ZWwvVGVhbS8x".to_string(),
        }
    }

    pub(crate) fn teams() -> Vec<Team> {
        vec![Team {
            id: "Z2lkOi8vb3BzbGV2ZWwvVGVhbS8x".to_string(),
            alias: "team-a".to_string(),
            aliases: vec!["team-a".to_string()],
            name: "Team A".to_string(),
            html_url: "https://app.opslevel.com/teams/team-a".to_string(),
            ..Default::default()
        }]
    }

    pub(crate) fn users() -> Vec<User> {
        vec![User {
            id: "U1".to_string(),
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            html_url: "https://app.opslevel.com/users/1".to_string(),
            ..Default::default()
        }]
    }

    pub(crate) fn trigger_definitions() -> Vec<TriggerDefinition> {
        vec![TriggerDefinition {
            id: "A1".to_string(),
            name: "Restart".to_string(),
            action: Some(Reference {
                id: "W1".to_string(),
                name: "restart-webhook".to_string(),
            }),
            published: true,
            ..Default::default()
        }]
    }

    pub(crate) fn filters() -> Vec<Filter> {
        vec![Filter {
            id: "F1".to_string(),
            name: "Tier 1".to_string(),
            connective: Some("and".to_string()),
            html_url: "https://app.opslevel.com/filters/1".to_string(),
            predicates: vec![Predicate {
                key: "tier_index".to_string(),
                kind: "equals".to_string(),
                value: Some("1".to_string()),
                ..Default::default()
            }],
        }]
    }

    pub(crate) fn domains() -> Vec<Domain> {
        vec![Domain {
            id: "D1".to_string(),
            name: "Payments".to_string(),
            html_url: "https://app.opslevel.com/domains/payments".to_string(),
            owner: Some(Self::owner()),
            ..Default::default()
        }]
    }

    pub(crate) fn systems() -> Vec<System> {
        vec![System {
            id: "S1".to_string(),
            name: "Checkout".to_string(),
            html_url: "https://app.opslevel.com/systems/checkout".to_string(),
            ..Default::default()
        }]
    }

    pub(crate) fn services() -> Vec<Service> {
        vec![Service {
            id: "X1".to_string(),
            name: "svc".to_string(),
            aliases: vec!["svc".to_string()],
            html_url: "http://x".to_string(),
            owner: Some(Self::owner()),
            ..Default::default()
        }]
    }

    pub(crate) fn infrastructure() -> Vec<InfrastructureResource> {
        vec![InfrastructureResource {
            id: "I1".to_string(),
            name: "orders-db".to_string(),
            aliases: vec!["orders-db".to_string(), "orders-postgres".to_string()],
            owner: Some(Self::owner()),
            provider_resource_type: "aws_rds_instance".to_string(),
            schema: InfrastructureResourceSchema {
                kind: "Database".to_string(),
            },
            ..Default::default()
        }]
    }

    pub(crate) fn document(with_content: bool) -> Document {
        Document {
            id: "Z2lkOi8vb3BzbGV2ZWwvRG9jLzE".to_string(),
            html_url: Some("https://app.opslevel.com/docs/1".to_string()),
            path_in_repository: Some("docs/runbook.md".to_string()),
            content: with_content.then(|| "# Runbook".to_string()),
            source: Some(DocumentSource::Known(KnownSource::ServiceRepository(
                ServiceRepository {
                    id: "Z2lkOi8vb3BzbGV2ZWwvU2VydmljZVJlcG9zaXRvcnkvMQ".to_string(),
                    service: ServiceReference {
                        id: "X1".to_string(),
                        aliases: vec!["svc".to_string()],
                    },
                    repository: RepositoryReference {
                        id: "Z2lkOi8vb3BzbGV2ZWwvUmVwb3NpdG9yeS8x".to_string(),
                        default_alias: "github.com:acme/svc".to_string(),
                    },
                },
            ))),
            timestamps: Some(Timestamps {
                created_at: "2025-01-01T00:00:00Z".to_string(),
                updated_at: "2025-01-02T00:00:00Z".to_string(),
            }),
        }
    }
}

#[async_trait]
impl OpsLevelApi for StubApi {
    async fn list_teams(&self) -> Result<Vec<Team>, ClientError> {
        self.list(Call::ListTeams, Self::teams)
    }

    async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.list(Call::ListUsers, Self::users)
    }

    async fn list_trigger_definitions(&self) -> Result<Vec<TriggerDefinition>, ClientError> {
        self.list(Call::ListTriggerDefinitions, Self::trigger_definitions)
    }

    async fn list_filters(&self) -> Result<Vec<Filter>, ClientError> {
        self.list(Call::ListFilters, Self::filters)
    }

    async fn list_services(&self) -> Result<Vec<Service>, ClientError> {
        self.list(Call::ListServices, Self::services)
    }

    async fn list_infrastructure(&self) -> Result<Vec<InfrastructureResource>, ClientError> {
        self.list(Call::ListInfrastructure, Self::infrastructure)
    }

    async fn list_domains(&self) -> Result<Vec<Domain>, ClientError> {
        self.list(Call::ListDomains, Self::domains)
    }

    async fn list_systems(&self) -> Result<Vec<System>, ClientError> {
        self.list(Call::ListSystems, Self::systems)
    }

    async fn get_aliasable_resource(
        &self,
        resource_type: AliasOwnerType,
        identifier: &str,
    ) -> Result<AliasableResource, ClientError> {
        self.respond(
            Call::GetResource(resource_type, identifier.to_string()),
            || match resource_type {
                AliasOwnerType::Service => AliasableResource::Service(
                    Self::services().into_iter().next().unwrap_or_default(),
                ),
                AliasOwnerType::Team => {
                    AliasableResource::Team(Self::teams().into_iter().next().unwrap_or_default())
                }
                AliasOwnerType::InfrastructureResource => AliasableResource::InfrastructureResource(
                    Self::infrastructure().into_iter().next().unwrap_or_default(),
                ),
                AliasOwnerType::Domain => AliasableResource::Domain(Domain {
                    id: identifier.to_string(),
                    ..Default::default()
                }),
                AliasOwnerType::Group => AliasableResource::Group(Default::default()),
                AliasOwnerType::Scorecard => AliasableResource::Scorecard(Default::default()),
                AliasOwnerType::System => AliasableResource::System(System {
                    id: identifier.to_string(),
                    ..Default::default()
                }),
            },
        )
    }

    async fn list_documents(
        &self,
        variables: &PayloadVariables,
    ) -> Result<Vec<Document>, ClientError> {
        self.list(Call::ListDocuments(variables.clone()), || {
            vec![Self::document(false)]
        })
    }

    async fn get_document(&self, id: &str) -> Result<Document, ClientError> {
        self.respond(Call::GetDocument(id.to_string()), || Self::document(true))
    }

    async fn list_service_documents(
        &self,
        service_id: &str,
        variables: &PayloadVariables,
    ) -> Result<Vec<Document>, ClientError> {
        self.list(
            Call::ListServiceDocuments(service_id.to_string(), variables.clone()),
            || vec![Self::document(false)],
        )
    }
}

/// The text of the single content item in a tool result
pub(crate) fn text_of(result: &CallToolResult) -> String {
    match result.content.first().map(|content| &content.raw) {
        Some(RawContent::Text(text)) => text.text.clone(),
        other => panic!("expected text content, got {other:?}"),
    }
}
