use crate::{Fragment, ResourceId, ResourceMetadata, VariableDecl};

#[test]
fn resource_id_equality_ignores_ownership() {
    const TEAMS: ResourceId = ResourceId::from_static("teams");

    assert_eq!(TEAMS, ResourceId::new("teams"));
    assert_eq!(TEAMS, ResourceId::from("teams".to_string()));
    assert_ne!(TEAMS, ResourceId::from("members"));
}

#[test]
fn resource_id_serializes_as_plain_string() {
    let id = ResourceId::from_static("membersWithRole");

    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, r#""membersWithRole""#);

    let back: ResourceId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn variable_decl_display() {
    let decl = VariableDecl::new("login", "String!");
    assert_eq!(decl.to_string(), "$login: String!");
}

#[test]
fn leaf_fragment_ignores_children() {
    let fragment = Fragment::leaf("...rateLimit");

    assert_eq!(fragment.render(""), "...rateLimit");
    assert_eq!(fragment.render("ignored"), "...rateLimit");
    assert!(!fragment.accepts_children());
}

#[test]
fn nested_fragment_without_children_is_self_contained() {
    let fragment = Fragment::nested("org {\nid\n", "}");
    assert_eq!(fragment.render(""), "org {\nid\n}");
}

#[test]
fn nested_fragment_splices_children_on_their_own_lines() {
    let fragment = Fragment::nested("org {\nid\n", "}");
    assert_eq!(fragment.render("a\nb"), "org {\nid\na\nb\n}");
}

#[test]
fn field_name_prefers_alternate() {
    let id = ResourceId::from("teamRepositories");
    let plain = ResourceMetadata::new(Fragment::leaf("x"));
    let aliased = ResourceMetadata::new(Fragment::leaf("x")).alternate_field("repositories");

    assert_eq!(plain.field_name(&id), "teamRepositories");
    assert_eq!(aliased.field_name(&id), "repositories");
}

#[test]
fn metadata_builder_keeps_declaration_order() {
    let entry = ResourceMetadata::new(Fragment::leaf("x"))
        .variable("b", "Int")
        .variable("a", "String!")
        .children([ResourceId::from("y"), ResourceId::from("x")]);

    let names: Vec<_> = entry.variables.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["b", "a"]);
    assert_eq!(entry.children, [ResourceId::from("y"), ResourceId::from("x")]);
    assert!(entry.declares_child(&"x".into()));
    assert!(!entry.declares_child(&"z".into()));
}
