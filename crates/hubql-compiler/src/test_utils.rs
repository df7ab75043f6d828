//! Small registries with one-line fragments, so whole documents fit in a test.

use hubql_core::{Fragment, Registry, ResourceId, ResourceMetadata};

pub fn ids(names: &[&str]) -> Vec<ResourceId> {
    names.iter().map(|&n| ResourceId::from(n)).collect()
}

/// `org` root with members, teams (team members, team repos) and repos (collaborators).
///
/// `members` names the root as its parent; `orphan` names `teams` as its
/// parent but `teams` does not declare it.
pub fn org_registry() -> Registry {
    Registry::builder()
        .resource(
            "org",
            ResourceMetadata::new(Fragment::nested("organization(login: $login) {\n", "}"))
                .variable("login", "String!")
                .children(ids(&["members", "teams", "repos"])),
        )
        .resource(
            "members",
            ResourceMetadata::new(Fragment::leaf("members(after: $membersCursor) { id }"))
                .variable("membersCursor", "String")
                .parent("org".into()),
        )
        .resource(
            "teams",
            ResourceMetadata::new(Fragment::nested("teams(after: $teamsCursor) {\n", "}"))
                .variable("teamsCursor", "String")
                .children(ids(&["teamMembers", "teamRepos"])),
        )
        .resource(
            "teamMembers",
            ResourceMetadata::new(Fragment::leaf("teamMembers(after: $teamMembersCursor) { id }"))
                .variable("teamMembersCursor", "String")
                .parent("teams".into()),
        )
        .resource(
            "teamRepos",
            ResourceMetadata::new(Fragment::leaf("repositories(after: $teamReposCursor) { id }"))
                .variable("teamReposCursor", "String")
                .alternate_field("repositories")
                .parent("teams".into()),
        )
        .resource(
            "repos",
            ResourceMetadata::new(Fragment::nested("repositories(after: $reposCursor) {\n", "}"))
                .variable("reposCursor", "String")
                .children(ids(&["collaborators"])),
        )
        .resource(
            "collaborators",
            ResourceMetadata::new(Fragment::leaf("collaborators(after: $collabCursor) { login }"))
                .variable("collabCursor", "String")
                .variable("login", "String!")
                .parent("repos".into()),
        )
        .resource(
            "orphan",
            ResourceMetadata::new(Fragment::leaf("orphan { id }")).parent("teams".into()),
        )
        .build()
}
