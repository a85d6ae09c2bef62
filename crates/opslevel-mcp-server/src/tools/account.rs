//! Tools that list every entity of one kind in the account

use std::sync::Arc;

use async_trait::async_trait;
use opslevel_client::OpsLevelApi;
use opslevel_client::types::{InfrastructureResource, Service};
use rmcp::model::{CallToolResult, JsonObject, Tool};
use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

use super::{AccountTool, input_schema, json_result, parse_arguments};
use crate::errors::{McpError, downstream};

pub const TEAMS_TOOL_NAME: &str = "teams";
pub const USERS_TOOL_NAME: &str = "users";
pub const ACTIONS_TOOL_NAME: &str = "actions";
pub const FILTERS_TOOL_NAME: &str = "filters";
pub const COMPONENTS_TOOL_NAME: &str = "components";
pub const INFRASTRUCTURE_TOOL_NAME: &str = "infrastructure";
pub const DOMAINS_TOOL_NAME: &str = "domains";
pub const SYSTEMS_TOOL_NAME: &str = "systems";

/// The list tools take no arguments
#[derive(JsonSchema, Deserialize)]
pub struct Input {}

/// A kind of entity that can be listed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Listing {
    Teams,
    Users,
    Actions,
    Filters,
    Components,
    Infrastructure,
    Domains,
    Systems,
}

impl Listing {
    pub const ALL: [Listing; 8] = [
        Listing::Teams,
        Listing::Users,
        Listing::Actions,
        Listing::Filters,
        Listing::Components,
        Listing::Infrastructure,
        Listing::Domains,
        Listing::Systems,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Listing::Teams => TEAMS_TOOL_NAME,
            Listing::Users => USERS_TOOL_NAME,
            Listing::Actions => ACTIONS_TOOL_NAME,
            Listing::Filters => FILTERS_TOOL_NAME,
            Listing::Components => COMPONENTS_TOOL_NAME,
            Listing::Infrastructure => INFRASTRUCTURE_TOOL_NAME,
            Listing::Domains => DOMAINS_TOOL_NAME,
            Listing::Systems => SYSTEMS_TOOL_NAME,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Listing::Teams => {
                "Get all the team names, identifiers and metadata for the opslevel account.  Teams are owners of other objects in opslevel. Only use this if you need to search all teams."
            }
            Listing::Users => {
                "Get all the user names, e-mail addresses and metadata for the opslevel account.  Users are the people in opslevel. Only use this if you need to search all users."
            }
            Listing::Actions => {
                "Get all the information about actions the user can run in the opslevel account"
            }
            Listing::Filters => {
                "Get all the rubric filter names and which predicates they have for the opslevel account"
            }
            Listing::Components => {
                "Get all the components in the opslevel account.  Components are objects in opslevel that represent things like apis, libraries, services, frontends, backends, etc."
            }
            Listing::Infrastructure => {
                "Get all the infrastructure in the opslevel account.  Infrastructure are objects in opslevel that represent cloud provider resources like vpc, databases, caches, networks, vms, etc."
            }
            Listing::Domains => {
                "Get all the domains in the opslevel account.  Domains are objects in opslevel that represent a top-level abstraction used to organize and categorize software systems."
            }
            Listing::Systems => {
                "Get all the systems in the opslevel account.  Systems are objects in opslevel that represent a grouping of services or components that act together to serve a business function or process."
            }
        }
    }

    pub fn into_tool(self, api: Arc<dyn OpsLevelApi>) -> ListTool {
        ListTool {
            listing: self,
            api,
            tool: Tool::new(self.name(), self.description(), input_schema::<Input>()),
        }
    }
}

/// A component reduced to the fields a client needs to identify it
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Component {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub url: String,
}

impl From<Service> for Component {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            name: service.name,
            owner: service.owner.map(|owner| owner.alias).unwrap_or_default(),
            url: service.html_url,
        }
    }
}

/// An infrastructure resource reduced to its identifying fields
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Infrastructure {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub aliases: Vec<String>,
    pub schema: String,
    pub provider_type: String,
}

impl From<InfrastructureResource> for Infrastructure {
    fn from(resource: InfrastructureResource) -> Self {
        Self {
            id: resource.id,
            name: resource.name,
            owner: resource.owner.map(|owner| owner.alias).unwrap_or_default(),
            aliases: resource.aliases,
            schema: resource.schema.kind,
            provider_type: resource.provider_resource_type,
        }
    }
}

/// Lists every entity of one kind
pub struct ListTool {
    listing: Listing,
    api: Arc<dyn OpsLevelApi>,
    pub tool: Tool,
}

#[async_trait]
impl AccountTool for ListTool {
    fn tool(&self) -> &Tool {
        &self.tool
    }

    async fn execute(&self, arguments: JsonObject) -> Result<CallToolResult, McpError> {
        let Input {} = parse_arguments(arguments)?;
        let api = self.api.as_ref();

        match self.listing {
            Listing::Teams => json_result(&api.list_teams().await.map_err(downstream)?),
            Listing::Users => json_result(&api.list_users().await.map_err(downstream)?),
            Listing::Actions => {
                json_result(&api.list_trigger_definitions().await.map_err(downstream)?)
            }
            Listing::Filters => json_result(&api.list_filters().await.map_err(downstream)?),
            Listing::Components => json_result(
                &api.list_services()
                    .await
                    .map_err(downstream)?
                    .into_iter()
                    .map(Component::from)
                    .collect::<Vec<_>>(),
            ),
            Listing::Infrastructure => json_result(
                &api.list_infrastructure()
                    .await
                    .map_err(downstream)?
                    .into_iter()
                    .map(Infrastructure::from)
                    .collect::<Vec<_>>(),
            ),
            Listing::Domains => json_result(&api.list_domains().await.map_err(downstream)?),
            Listing::Systems => json_result(&api.list_systems().await.map_err(downstream)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::{Call, StubApi, text_of};
    use insta::assert_snapshot;
    use rmcp::model::ErrorCode;
    use rstest::rstest;

    fn run(listing: Listing, api: &Arc<StubApi>) -> ListTool {
        listing.into_tool(api.clone())
    }

    #[tokio::test]
    async fn components_are_projected() {
        let api = Arc::new(StubApi::default());

        let result = run(Listing::Components, &api)
            .execute(JsonObject::new())
            .await
            .unwrap();

        assert_eq!(
            text_of(&result),
            r#"[{"Id":"X1","Name":"svc","Owner":"team-a","Url":"http://x"}]"#
        );
        assert_eq!(api.calls(), vec![Call::ListServices]);
    }

    #[tokio::test]
    async fn infrastructure_is_projected() {
        let api = Arc::new(StubApi::default());

        let result = run(Listing::Infrastructure, &api)
            .execute(JsonObject::new())
            .await
            .unwrap();

        assert_snapshot!(
            text_of(&result),
            @r#"[{"Id":"I1","Name":"orders-db","Owner":"team-a","Aliases":["orders-db","orders-postgres"],"Schema":"Database","ProviderType":"aws_rds_instance"}]"#
        );
    }

    fn json<T: Serialize>(nodes: Vec<T>) -> String {
        serde_json::to_string(&nodes).unwrap()
    }

    #[rstest]
    #[case(Listing::Teams, json(StubApi::teams()))]
    #[case(Listing::Users, json(StubApi::users()))]
    #[case(Listing::Actions, json(StubApi::trigger_definitions()))]
    #[case(Listing::Filters, json(StubApi::filters()))]
    #[case(Listing::Domains, json(StubApi::domains()))]
    #[case(Listing::Systems, json(StubApi::systems()))]
    #[tokio::test]
    async fn raw_listings_are_returned_unmodified(
        #[case] listing: Listing,
        #[case] expected: String,
    ) {
        let api = Arc::new(StubApi::default());

        let result = run(listing, &api).execute(JsonObject::new()).await.unwrap();

        assert_eq!(text_of(&result), expected);
    }

    #[tokio::test]
    async fn teams_keep_their_api_field_names() {
        let api = Arc::new(StubApi::default());

        let result = run(Listing::Teams, &api)
            .execute(JsonObject::new())
            .await
            .unwrap();

        assert!(text_of(&result).contains(r#""htmlUrl":"https://app.opslevel.com/teams/team-a""#));
    }

    #[rstest]
    #[case(Listing::Teams, Call::ListTeams)]
    #[case(Listing::Users, Call::ListUsers)]
    #[case(Listing::Actions, Call::ListTriggerDefinitions)]
    #[case(Listing::Filters, Call::ListFilters)]
    #[case(Listing::Components, Call::ListServices)]
    #[case(Listing::Infrastructure, Call::ListInfrastructure)]
    #[case(Listing::Domains, Call::ListDomains)]
    #[case(Listing::Systems, Call::ListSystems)]
    #[tokio::test]
    async fn each_listing_makes_one_downstream_call(#[case] listing: Listing, #[case] call: Call) {
        let api = Arc::new(StubApi::default());

        let first = run(listing, &api).execute(JsonObject::new()).await.unwrap();
        let second = run(listing, &api).execute(JsonObject::new()).await.unwrap();

        assert_eq!(text_of(&first), text_of(&second));
        assert_eq!(api.calls(), vec![call.clone(), call]);
    }

    #[rstest]
    #[case(Listing::Teams)]
    #[case(Listing::Users)]
    #[case(Listing::Actions)]
    #[case(Listing::Filters)]
    #[case(Listing::Components)]
    #[case(Listing::Infrastructure)]
    #[case(Listing::Domains)]
    #[case(Listing::Systems)]
    #[tokio::test]
    async fn downstream_failures_are_forwarded(#[case] listing: Listing) {
        let api = Arc::new(StubApi::failing());

        let error = run(listing, &api)
            .execute(JsonObject::new())
            .await
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::INTERNAL_ERROR);
        assert_eq!(error.message, StubApi::FAILURE);
    }

    #[tokio::test]
    async fn empty_accounts_produce_an_empty_list() {
        let api = Arc::new(StubApi::empty());

        let result = run(Listing::Components, &api)
            .execute(JsonObject::new())
            .await
            .unwrap();

        assert_eq!(text_of(&result), "[]");
    }

    #[test]
    fn components_without_an_owner_have_an_empty_owner() {
        let component = Component::from(Service {
            id: "X2".to_string(),
            name: "orphan".to_string(),
            html_url: "http://y".to_string(),
            ..Default::default()
        });

        assert_eq!(component.owner, "");
    }
}
