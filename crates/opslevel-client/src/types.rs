//! Node types returned by the OpsLevel API
//!
//! Every node deserializes from, and serializes back to, the GraphQL field
//! names selected in the queries, so a node can be handed to a consumer
//! unmodified.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque OpsLevel identifier
pub type Id = String;

/// Cursor information for a paginated connection
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

/// One page of a GraphQL connection
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub(crate) nodes: Vec<T>,
    #[serde(default)]
    pub(crate) page_info: PageInfo,
}

/// The team or group that owns an entity
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct EntityOwner {
    #[serde(default)]
    pub alias: String,
    pub id: Id,
}

/// A bare `{ id name }` reference to another entity
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Reference {
    pub id: Id,
    pub name: String,
}

/// A named level such as a tier or lifecycle
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Level {
    pub alias: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timestamps {
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub address: String,
    pub display_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Manager {
    pub email: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Id,
    pub alias: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub name: String,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    pub html_url: String,
    pub manager: Option<Manager>,
    pub parent_team: Option<EntityOwner>,
    pub responsibilities: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub email: String,
    pub name: String,
    pub role: Option<String>,
    pub html_url: String,
}

/// An action a user can run, called a trigger definition by the API
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerDefinition {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub access_control: Option<String>,
    pub action: Option<Reference>,
    pub entity_type: Option<String>,
    pub filter: Option<Reference>,
    pub manual_inputs_definition: Option<String>,
    pub owner: Option<EntityOwner>,
    #[serde(default)]
    pub published: bool,
    pub response_template: Option<String>,
    pub timestamps: Option<Timestamps>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Predicate {
    pub key: String,
    pub key_data: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: Option<String>,
    pub case_sensitive: Option<bool>,
}

/// A rubric filter
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub id: Id,
    pub name: String,
    pub connective: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub predicates: Vec<Predicate>,
}

/// A component, called a service by the API
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub description: Option<String>,
    pub framework: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    pub lifecycle: Option<Level>,
    pub owner: Option<EntityOwner>,
    pub product: Option<String>,
    pub tier: Option<Level>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct InfrastructureResourceSchema {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderData {
    pub account_name: Option<String>,
    pub external_url: Option<String>,
    pub provider_name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureResource {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub owner: Option<EntityOwner>,
    pub provider_data: Option<ProviderData>,
    #[serde(default)]
    pub provider_resource_type: String,
    #[serde(default)]
    pub schema: InfrastructureResourceSchema,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub description: Option<String>,
    pub html_url: String,
    pub note: Option<String>,
    pub owner: Option<EntityOwner>,
}

/// The domain a system belongs to
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ParentDomain {
    pub id: Id,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct System {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub description: Option<String>,
    pub html_url: String,
    pub note: Option<String>,
    pub owner: Option<EntityOwner>,
    pub parent: Option<ParentDomain>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub affects_overall_service_levels: bool,
    pub description: Option<String>,
    pub filter: Option<Reference>,
    pub html_url: String,
    pub owner: Option<EntityOwner>,
    #[serde(default)]
    pub passing_checks: i64,
    #[serde(default)]
    pub service_count: i64,
    #[serde(default)]
    pub total_checks: i64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: Id,
    pub alias: String,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub parent: Option<EntityOwner>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ServiceReference {
    pub id: Id,
    #[serde(default)]
    pub aliases: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryReference {
    pub id: Id,
    pub default_alias: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ApiDocIntegration {
    pub id: Id,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ServiceRepository {
    pub id: Id,
    pub service: ServiceReference,
    pub repository: RepositoryReference,
}

/// Where a document was sourced from
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocumentSource {
    Known(KnownSource),
    /// A source type with no fields selected, kept by its typename
    Other {
        #[serde(rename = "__typename")]
        typename: String,
    },
}

/// Document sources whose fields are selected by the document queries
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "__typename")]
pub enum KnownSource {
    ApiDocIntegration(ApiDocIntegration),
    ServiceRepository(ServiceRepository),
}

/// A runbook, readme, API spec or other document attached to the account
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Id,
    pub html_url: Option<String>,
    pub path_in_repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub source: Option<DocumentSource>,
    pub timestamps: Option<Timestamps>,
}

/// The kinds of resource that can be looked up by ID or alias
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasOwnerType {
    Domain,
    Group,
    InfrastructureResource,
    Scorecard,
    Service,
    System,
    Team,
}

impl AliasOwnerType {
    pub const ALL: [AliasOwnerType; 7] = [
        AliasOwnerType::Domain,
        AliasOwnerType::Group,
        AliasOwnerType::InfrastructureResource,
        AliasOwnerType::Scorecard,
        AliasOwnerType::Service,
        AliasOwnerType::System,
        AliasOwnerType::Team,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AliasOwnerType::Domain => "domain",
            AliasOwnerType::Group => "group",
            AliasOwnerType::InfrastructureResource => "infrastructure_resource",
            AliasOwnerType::Scorecard => "scorecard",
            AliasOwnerType::Service => "service",
            AliasOwnerType::System => "system",
            AliasOwnerType::Team => "team",
        }
    }
}

impl fmt::Display for AliasOwnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single resource fetched by ID or alias
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AliasableResource {
    Domain(Domain),
    Group(Group),
    InfrastructureResource(InfrastructureResource),
    Scorecard(Scorecard),
    Service(Service),
    System(System),
    Team(Team),
}

/// Variables for a document search
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadVariables {
    pub search_term: String,
    pub after: String,
    pub first: u32,
}
