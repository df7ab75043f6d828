//! Built-in registry for the GitHub GraphQL API.
//!
//! `organization` and the search-based pull request and issue resources are
//! roots. Pull requests are deliberately not children of `repositories`:
//! together with commits, reviews and labels that nesting gets deep enough
//! that one failed page takes the whole request down with it.
//!
//! Fragment spreads such as `...userFields` name fragments registered with
//! the executing client, not here.

use crate::{Fragment, Registry, RegistryConfig, ResourceId, ResourceMetadata};

pub const ORGANIZATION: ResourceId = ResourceId::from_static("organization");
pub const ORGANIZATION_MEMBERS: ResourceId = ResourceId::from_static("membersWithRole");
pub const TEAMS: ResourceId = ResourceId::from_static("teams");
pub const TEAM_MEMBERS: ResourceId = ResourceId::from_static("members");
pub const TEAM_REPOSITORIES: ResourceId = ResourceId::from_static("teamRepositories");
pub const REPOSITORIES: ResourceId = ResourceId::from_static("repositories");
pub const COLLABORATORS: ResourceId = ResourceId::from_static("collaborators");
pub const PULL_REQUEST: ResourceId = ResourceId::from_static("pullRequest");
pub const PULL_REQUESTS: ResourceId = ResourceId::from_static("pullRequests");
pub const COMMITS: ResourceId = ResourceId::from_static("commits");
pub const REVIEWS: ResourceId = ResourceId::from_static("reviews");
pub const LABELS: ResourceId = ResourceId::from_static("labels");
pub const ISSUES: ResourceId = ResourceId::from_static("issues");
pub const ASSIGNEES: ResourceId = ResourceId::from_static("assignees");
/// Labels selected through `... on Issue` rather than `... on PullRequest`.
pub const LABELS_ON_ISSUES: ResourceId = ResourceId::from_static("labelsOnIssues");
/// Repositories with ids only, for walking collaborators.
pub const REPOS_FOR_COLLABS: ResourceId = ResourceId::from_static("reposForCollabs");

const PAGE_INFO: &str = "pageInfo {\nendCursor\nhasNextPage\n}";

/// Cursor variable for a paginated connection, named after its resource.
fn cursor(id: &ResourceId) -> String {
    id.as_str().to_owned()
}

/// `field(first: N, after: $cursor) { edges { node { ... } ... } pageInfo }`
fn connection(
    field: &str,
    page: u32,
    cursor: &str,
    node_fields: &str,
    edge_fields: Option<&str>,
) -> Fragment {
    let open = format!(
        "{field}(first: {page}, after: ${cursor}) {{\nedges {{\nnode {{\n{node_fields}\n"
    );
    let close = match edge_fields {
        Some(edge) => format!("}}\n{edge}\n}}\n{PAGE_INFO}\n}}"),
        None => format!("}}\n}}\n{PAGE_INFO}\n}}"),
    };
    Fragment::nested(open, close)
}

/// A connection selected through an inline fragment on `on_type`, never nested further.
fn inline_connection(on_type: &str, field: &str, page: u32, cursor: &str, node: &str) -> Fragment {
    Fragment::leaf(format!(
        "... on {on_type} {{\n{field}(first: {page}, after: ${cursor}) {{\ntotalCount\nedges {{\nnode {{\n{node}\n}}\n}}\n{PAGE_INFO}\n}}\n}}"
    ))
}

/// Issue search: `search(type: ISSUE)` with the node fields given.
fn issue_search(page: u32, cursor: &str, node_fields: &str) -> Fragment {
    Fragment::nested(
        format!(
            "search(first: {page}, after: ${cursor}, type: ISSUE, query: $query) {{\nissueCount\nedges {{\nnode {{\n{node_fields}\n"
        ),
        format!("}}\n}}\n{PAGE_INFO}\n}}"),
    )
}

pub(crate) fn registry(config: &RegistryConfig) -> Registry {
    let page = config.page_limit;
    let nested = config.nested_page_limit;
    let pr_children = [COMMITS, REVIEWS, LABELS];

    Registry::builder()
        .config(*config)
        .resource(
            PULL_REQUEST,
            ResourceMetadata::new(Fragment::nested(
                "repository(name: $repoName, owner: $repoOwner) {\npullRequest(number: $pullRequestNumber) {\n...pullRequestFields\n",
                "}\n}",
            ))
            .variable("pullRequestNumber", "Int!")
            .variable("repoName", "String!")
            .variable("repoOwner", "String!")
            .response_path("repository.pullRequest")
            .children(pr_children.clone()),
        )
        .resource(
            PULL_REQUESTS,
            ResourceMetadata::new(issue_search(
                nested,
                &cursor(&PULL_REQUESTS),
                "...pullRequestFields",
            ))
            .variable("query", "String!")
            .variable(cursor(&PULL_REQUESTS), "String")
            .response_path("search")
            .children(pr_children),
        )
        .resource(
            COMMITS,
            ResourceMetadata::new(inline_connection(
                "PullRequest",
                COMMITS.as_str(),
                page,
                &cursor(&COMMITS),
                "commit {\n...commitFields\n}",
            ))
            .variable(cursor(&COMMITS), "String"),
        )
        .resource(
            REVIEWS,
            ResourceMetadata::new(inline_connection(
                "PullRequest",
                REVIEWS.as_str(),
                page,
                &cursor(&REVIEWS),
                "...reviewFields",
            ))
            .variable(cursor(&REVIEWS), "String"),
        )
        .resource(
            LABELS,
            ResourceMetadata::new(inline_connection(
                "PullRequest",
                LABELS.as_str(),
                page,
                &cursor(&LABELS),
                "id\nname",
            ))
            .variable(cursor(&LABELS), "String"),
        )
        .resource(
            ISSUES,
            ResourceMetadata::new(issue_search(nested, &cursor(&ISSUES), "...issueFields"))
                .variable("query", "String!")
                .variable(cursor(&ISSUES), "String")
                .response_path("search")
                .children([ASSIGNEES, LABELS_ON_ISSUES]),
        )
        .resource(
            ASSIGNEES,
            ResourceMetadata::new(inline_connection(
                "Issue",
                ASSIGNEES.as_str(),
                page,
                &cursor(&ASSIGNEES),
                "name\nlogin",
            ))
            .variable(cursor(&ASSIGNEES), "String"),
        )
        .resource(
            LABELS_ON_ISSUES,
            // Same `labels` field and cursor as pull request labels, on Issue.
            ResourceMetadata::new(inline_connection(
                "Issue",
                LABELS.as_str(),
                page,
                &cursor(&LABELS),
                "id\nname",
            ))
            .variable(cursor(&LABELS), "String")
            .alternate_field(LABELS.as_str()),
        )
        .resource(
            ORGANIZATION,
            ResourceMetadata::new(Fragment::nested(
                "organization(login: $login) {\nid\n...organizationFields\n",
                "}",
            ))
            .variable("login", "String!")
            .response_path("organization")
            .children([ORGANIZATION_MEMBERS, TEAMS, TEAM_MEMBERS, REPOSITORIES]),
        )
        .resource(
            ORGANIZATION_MEMBERS,
            ResourceMetadata::new(connection(
                ORGANIZATION_MEMBERS.as_str(),
                page,
                &cursor(&ORGANIZATION_MEMBERS),
                "id\n...userFields",
                Some("...userEdgeFields"),
            ))
            .variable(cursor(&ORGANIZATION_MEMBERS), "String"),
        )
        .resource(
            TEAMS,
            ResourceMetadata::new(connection(
                TEAMS.as_str(),
                page,
                &cursor(&TEAMS),
                "id\n...teamFields",
                None,
            ))
            .variable(cursor(&TEAMS), "String")
            .children([TEAM_MEMBERS, TEAM_REPOSITORIES]),
        )
        .resource(
            TEAM_MEMBERS,
            ResourceMetadata::new(connection(
                TEAM_MEMBERS.as_str(),
                page,
                &cursor(&TEAM_MEMBERS),
                "id\n...teamMemberFields",
                Some("...teamMemberEdgeFields"),
            ))
            .variable(cursor(&TEAM_MEMBERS), "String")
            .parent(TEAMS),
        )
        .resource(
            TEAM_REPOSITORIES,
            // Still the `repositories` field, only reached under a team.
            ResourceMetadata::new(connection(
                REPOSITORIES.as_str(),
                page,
                &cursor(&TEAM_REPOSITORIES),
                "id\n...repositoryFields",
                Some("...teamRepositoryEdgeFields"),
            ))
            .variable(cursor(&TEAM_REPOSITORIES), "String")
            .alternate_field(REPOSITORIES.as_str())
            .parent(TEAMS),
        )
        .resource(
            REPOSITORIES,
            ResourceMetadata::new(connection(
                REPOSITORIES.as_str(),
                page,
                &cursor(&REPOSITORIES),
                "id\n...repositoryFields",
                None,
            ))
            .variable(cursor(&REPOSITORIES), "String")
            .children([COLLABORATORS]),
        )
        .resource(
            COLLABORATORS,
            ResourceMetadata::new(connection(
                COLLABORATORS.as_str(),
                page,
                &cursor(&COLLABORATORS),
                "id\nlogin",
                Some("permission"),
            ))
            .variable(cursor(&COLLABORATORS), "String")
            .parent(REPOSITORIES),
        )
        .resource(
            REPOS_FOR_COLLABS,
            ResourceMetadata::new(connection(
                REPOSITORIES.as_str(),
                page,
                &cursor(&REPOSITORIES),
                "id",
                None,
            ))
            .variable(cursor(&REPOSITORIES), "String")
            .alternate_field(REPOSITORIES.as_str()),
        )
        .build()
}
