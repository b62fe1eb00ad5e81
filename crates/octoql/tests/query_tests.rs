//! Parses the built query documents and checks that every variable the
//! document declares is exactly what the builder ships alongside it.

use apollo_parser::Parser;
use apollo_parser::cst;
use octoql::queries::{IssueState, marketplace_categories, repository_issues};
use serde_json::json;

fn declared_variables(document: &str) -> Vec<String> {
    let tree = Parser::new(document).parse();
    assert_eq!(
        tree.errors().count(),
        0,
        "document should parse cleanly: {document}"
    );

    let mut names = Vec::new();
    for definition in tree.document().definitions() {
        if let cst::Definition::OperationDefinition(operation) = definition {
            for variable_definition in operation
                .variable_definitions()
                .iter()
                .flat_map(|definitions| definitions.variable_definitions())
            {
                let name = variable_definition
                    .variable()
                    .and_then(|variable| variable.name())
                    .map(|name| name.text().to_string());
                names.extend(name);
            }
        }
    }
    names.sort();
    names
}

fn operation_name(document: &str) -> Option<String> {
    let tree = Parser::new(document).parse();
    tree.document().definitions().find_map(|definition| {
        match definition {
            cst::Definition::OperationDefinition(operation) => {
                operation.name().map(|name| name.text().to_string())
            }
            _ => None,
        }
    })
}

#[test]
fn test_repository_issues_document_is_valid() {
    let (query, variables) = repository_issues("pydantic", "FastUI", 2, &[IssueState::Closed]);

    let declared = declared_variables(&query);
    let mut provided: Vec<String> = variables.keys().cloned().collect();
    provided.sort();
    assert_eq!(declared, provided);
    assert_eq!(declared, vec!["last", "name", "owner", "states"]);
}

#[test]
fn test_repository_issues_operation_name() {
    let (query, _) = repository_issues("rust-lang", "rust", 5, &[IssueState::Open]);
    assert_eq!(operation_name(&query).as_deref(), Some("getRepositoryIssues"));
}

#[test]
fn test_repository_issues_variable_values() {
    let (_, variables) = repository_issues("pydantic", "FastUI", 2, &[IssueState::Closed]);

    assert_eq!(variables["owner"], json!("pydantic"));
    assert_eq!(variables["name"], json!("FastUI"));
    assert_eq!(variables["last"], json!(2));
    assert_eq!(variables["states"], json!(["CLOSED"]));
}

#[test]
fn test_marketplace_categories_document_is_valid() {
    let (query, variables) = marketplace_categories(true, false, &[]);

    let declared = declared_variables(&query);
    let mut provided: Vec<String> = variables.keys().cloned().collect();
    provided.sort();
    assert_eq!(declared, provided);
    assert_eq!(
        declared,
        vec!["excludeEmpty", "excludeSubcategories", "includeCategories"]
    );
}

#[test]
fn test_marketplace_categories_operation_name() {
    let (query, _) = marketplace_categories(false, false, &[]);
    assert_eq!(
        operation_name(&query).as_deref(),
        Some("getMarketplaceCategories")
    );
}

#[test]
fn test_marketplace_categories_carries_requested_filters() {
    let categories = vec!["apps".to_string(), "actions".to_string()];
    let (_, variables) = marketplace_categories(true, true, &categories);

    assert_eq!(variables["excludeEmpty"], json!(true));
    assert_eq!(variables["excludeSubcategories"], json!(true));
    assert_eq!(variables["includeCategories"], json!(["apps", "actions"]));
}

#[test]
fn test_owner_input_cannot_break_out_of_the_document() {
    let hostile = "\") { privateRepositories { secrets } } #";
    let (query, variables) = repository_issues(hostile, "repo", 1, &[IssueState::Open]);

    // The hostile text travels only as a variable value.
    assert!(!query.contains("privateRepositories"));
    assert_eq!(variables["owner"], json!(hostile));
    assert_eq!(declared_variables(&query), vec!["last", "name", "owner", "states"]);
}
