use indoc::indoc;

use crate::github::{
    COLLABORATORS, ORGANIZATION, ORGANIZATION_MEMBERS, PULL_REQUESTS, REPOSITORIES, TEAM_MEMBERS,
    TEAM_REPOSITORIES, TEAMS,
};
use crate::{Fragment, Registry, RegistryConfig, ResourceId, ResourceMetadata, build_registry};

fn listing(registry: &Registry) -> String {
    registry
        .iter()
        .map(|(id, entry)| {
            let mut line = id.to_string();
            if let Some(parent) = &entry.parent {
                line.push_str(&format!(" < {parent}"));
            }
            if !entry.children.is_empty() {
                let children: Vec<_> = entry.children.iter().map(ResourceId::as_str).collect();
                line.push_str(&format!(" > {}", children.join(", ")));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn config_defaults() {
    let config = RegistryConfig::default();
    assert_eq!(config.page_limit, 100);
    assert_eq!(config.nested_page_limit, 25);
}

#[test]
fn config_from_partial_json_keeps_defaults() {
    let config = RegistryConfig::from_json(r#"{ "pageLimit": 40 }"#).unwrap();
    assert_eq!(config, RegistryConfig::new().page_limit(40));
}

#[test]
fn config_rejects_wrong_types() {
    assert!(RegistryConfig::from_json(r#"{ "pageLimit": "many" }"#).is_err());
}

#[test]
fn builder_replaces_duplicate_ids() {
    let registry = Registry::builder()
        .resource("org", ResourceMetadata::new(Fragment::leaf("first")))
        .resource("org", ResourceMetadata::new(Fragment::leaf("second")))
        .build();

    assert_eq!(registry.len(), 1);
    let entry = registry.get(&"org".into()).unwrap();
    assert_eq!(entry.fragment, Fragment::leaf("second"));
}

#[test]
fn empty_registry() {
    let registry = Registry::builder().build();
    assert!(registry.is_empty());
    assert!(registry.get(&ORGANIZATION).is_none());
    assert!(registry.validate().is_ok());
}

#[test]
fn github_registry_is_deterministic() {
    assert_eq!(build_registry(100, 25), build_registry(100, 25));
    assert_ne!(build_registry(100, 25), build_registry(50, 25));
}

#[test]
fn github_registry_is_well_formed() {
    let registry = Registry::github(&RegistryConfig::default());
    assert_eq!(registry.validate(), Ok(()));
}

#[test]
fn github_registry_links() {
    let registry = build_registry(100, 25);

    insta::assert_snapshot!(listing(&registry), @r"
    pullRequest > commits, reviews, labels
    pullRequests > commits, reviews, labels
    commits
    reviews
    labels
    issues > assignees, labelsOnIssues
    assignees
    labelsOnIssues
    organization > membersWithRole, teams, members, repositories
    membersWithRole
    teams > members, teamRepositories
    members < teams
    teamRepositories < teams
    repositories > collaborators
    collaborators < repositories
    reposForCollabs
    ");
}

#[test]
fn github_registry_bakes_page_limits() {
    let registry = build_registry(42, 7);
    assert_eq!(registry.page_limit(), 42);
    assert_eq!(registry.nested_page_limit(), 7);

    let members = registry.get(&ORGANIZATION_MEMBERS).unwrap().fragment.render("");
    assert!(members.starts_with("membersWithRole(first: 42, after: $membersWithRole) {"));

    let search = registry.get(&PULL_REQUESTS).unwrap().fragment.render("");
    assert!(search.starts_with("search(first: 7, after: $pullRequests, type: ISSUE"));
}

#[test]
fn github_team_repositories_select_repositories_field() {
    let registry = build_registry(100, 25);
    let entry = registry.get(&TEAM_REPOSITORIES).unwrap();

    assert_eq!(entry.field_name(&TEAM_REPOSITORIES), "repositories");
    assert_eq!(entry.parent, Some(TEAMS));
    assert!(
        entry
            .fragment
            .render("")
            .starts_with("repositories(first: 100, after: $teamRepositories)")
    );
}

#[test]
fn github_leaf_connection_text() {
    let registry = build_registry(100, 25);
    let collaborators = registry.get(&COLLABORATORS).unwrap();

    assert_eq!(
        collaborators.fragment.render(""),
        indoc! {"
            collaborators(first: 100, after: $collaborators) {
            edges {
            node {
            id
            login
            }
            permission
            }
            pageInfo {
            endCursor
            hasNextPage
            }
            }"}
    );
}

#[test]
fn github_roots_have_no_parent() {
    let registry = build_registry(100, 25);
    for root in [ORGANIZATION, PULL_REQUESTS, REPOSITORIES] {
        assert!(registry.get(&root).unwrap().parent.is_none(), "{root}");
    }
    assert_eq!(registry.get(&TEAM_MEMBERS).unwrap().parent, Some(TEAMS));
}

#[test]
fn registry_json_round_trip() {
    let registry = build_registry(100, 25);
    let json = registry.to_json_pretty().unwrap();

    assert!(json.contains(r#""pageLimit": 100"#));
    assert_eq!(Registry::from_json(&json).unwrap(), registry);
}
