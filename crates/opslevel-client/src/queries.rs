//! GraphQL documents sent to the OpsLevel API
//!
//! Selections are kept in macros so the list and single-resource queries for
//! an entity always ask for the same fields.

macro_rules! page_info {
    () => {
        "pageInfo { hasNextPage endCursor }"
    };
}

// Services and trigger definitions are owned by a `Team`. Everything else is
// owned by the `EntityOwner` union of teams and groups.
macro_rules! team_owner_fields {
    () => {
        "owner { alias id }"
    };
}

macro_rules! owner_fields {
    () => {
        "owner { ... on Team { alias id } ... on Group { alias id } }"
    };
}

macro_rules! team_fields {
    () => {
        "id alias aliases name contacts { address displayName type } htmlUrl manager { email name } parentTeam { alias id } responsibilities"
    };
}

macro_rules! user_fields {
    () => {
        "id email name role htmlUrl"
    };
}

macro_rules! trigger_definition_fields {
    () => {
        concat!(
            "id name description aliases accessControl action { id name } entityType filter { id name } manualInputsDefinition ",
            team_owner_fields!(),
            " published responseTemplate timestamps { createdAt updatedAt }"
        )
    };
}

macro_rules! filter_fields {
    () => {
        "id name connective htmlUrl predicates { key keyData type value caseSensitive }"
    };
}

macro_rules! service_fields {
    () => {
        concat!(
            "id name aliases description framework htmlUrl language lifecycle { alias name } ",
            team_owner_fields!(),
            " product tier { alias name }"
        )
    };
}

macro_rules! infrastructure_fields {
    () => {
        concat!(
            "id name aliases ",
            owner_fields!(),
            " providerData { accountName externalUrl providerName } providerResourceType schema { type }"
        )
    };
}

macro_rules! domain_fields {
    () => {
        concat!(
            "id name aliases description htmlUrl note ",
            owner_fields!()
        )
    };
}

macro_rules! system_fields {
    () => {
        concat!(
            "id name aliases description htmlUrl note ",
            owner_fields!(),
            " parent { id aliases name }"
        )
    };
}

macro_rules! scorecard_fields {
    () => {
        concat!(
            "id name aliases affectsOverallServiceLevels description filter { id name } htmlUrl ",
            owner_fields!(),
            " passingChecks serviceCount totalChecks"
        )
    };
}

macro_rules! group_fields {
    () => {
        "id alias name description htmlUrl parent { alias id }"
    };
}

macro_rules! document_source_fields {
    () => {
        "source { __typename ... on ApiDocIntegration { id name type } ... on ServiceRepository { id service { id aliases } repository { id defaultAlias } } }"
    };
}

macro_rules! document_fields {
    () => {
        concat!(
            "id htmlUrl pathInRepository ",
            document_source_fields!(),
            " timestamps { createdAt updatedAt }"
        )
    };
}

macro_rules! list_query {
    ($name:literal, $field:literal, $fields:ident) => {
        concat!(
            "query ",
            $name,
            "($after: String, $first: Int) { account { ",
            $field,
            "(after: $after, first: $first) { nodes { ",
            $fields!(),
            " } ",
            page_info!(),
            " } } }"
        )
    };
}

pub(crate) const TEAM_LIST: &str = list_query!("TeamList", "teams", team_fields);
pub(crate) const USER_LIST: &str = list_query!("UserList", "users", user_fields);
pub(crate) const TRIGGER_DEFINITION_LIST: &str = list_query!(
    "TriggerDefinitionList",
    "triggerDefinitions",
    trigger_definition_fields
);
pub(crate) const FILTER_LIST: &str = list_query!("FilterList", "filters", filter_fields);
pub(crate) const SERVICE_LIST: &str = list_query!("ServiceList", "services", service_fields);
pub(crate) const INFRASTRUCTURE_LIST: &str = list_query!(
    "InfrastructureResourceList",
    "infrastructureResources",
    infrastructure_fields
);
pub(crate) const DOMAIN_LIST: &str = list_query!("DomainList", "domains", domain_fields);
pub(crate) const SYSTEM_LIST: &str = list_query!("SystemList", "systems", system_fields);

pub(crate) const DOCUMENT_LIST: &str = concat!(
    "query DocumentList($searchTerm: String, $after: String, $first: Int) { account { documents(searchTerm: $searchTerm, after: $after, first: $first) { nodes { ",
    document_fields!(),
    " } ",
    page_info!(),
    " } } }"
);

pub(crate) const SERVICE_DOCUMENT_LIST: &str = concat!(
    "query ServiceDocumentList($service: ID!, $searchTerm: String, $after: String, $first: Int) { account { service(id: $service) { documents(searchTerm: $searchTerm, after: $after, first: $first) { nodes { ",
    document_fields!(),
    " } ",
    page_info!(),
    " } } } }"
);

pub(crate) const DOCUMENT_GET: &str = concat!(
    "query DocumentGet($id: ID!) { account { document(id: $id) { ",
    document_fields!(),
    " content } } }"
);

// Services, teams and groups take `id` or `alias` arguments directly. The
// other aliasable resources take an `IdentifierInput`.
pub(crate) const SERVICE_GET: &str = concat!(
    "query ServiceGet($id: ID, $alias: String) { account { service(id: $id, alias: $alias) { ",
    service_fields!(),
    " } } }"
);
pub(crate) const TEAM_GET: &str = concat!(
    "query TeamGet($id: ID, $alias: String) { account { team(id: $id, alias: $alias) { ",
    team_fields!(),
    " } } }"
);
pub(crate) const GROUP_GET: &str = concat!(
    "query GroupGet($id: ID, $alias: String) { account { group(id: $id, alias: $alias) { ",
    group_fields!(),
    " } } }"
);
pub(crate) const SYSTEM_GET: &str = concat!(
    "query SystemGet($input: IdentifierInput!) { account { system(input: $input) { ",
    system_fields!(),
    " } } }"
);
pub(crate) const DOMAIN_GET: &str = concat!(
    "query DomainGet($input: IdentifierInput!) { account { domain(input: $input) { ",
    domain_fields!(),
    " } } }"
);
pub(crate) const INFRASTRUCTURE_GET: &str = concat!(
    "query InfrastructureResourceGet($input: IdentifierInput!) { account { infrastructureResource(input: $input) { ",
    infrastructure_fields!(),
    " } } }"
);
pub(crate) const SCORECARD_GET: &str = concat!(
    "query ScorecardGet($input: IdentifierInput!) { account { scorecard(input: $input) { ",
    scorecard_fields!(),
    " } } }"
);
