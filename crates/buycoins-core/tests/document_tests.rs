//! Integration tests for document construction and normalization together.

use buycoins_core::{
    build, normalize, ApiResponse, Error, ErrorEntry, FieldSelection, OperationKind,
    OperationRequest,
};
use serde_json::json;

/// Returns (maximum brace nesting, number of top-level brace groups).
fn brace_profile(document: &str) -> (usize, usize) {
    let mut depth = 0usize;
    let mut max_depth = 0usize;
    let mut top_level = 0usize;
    for c in document.chars() {
        match c {
            '{' => {
                if depth == 0 {
                    top_level += 1;
                }
                depth += 1;
                max_depth = max_depth.max(depth);
            }
            '}' => {
                assert!(depth > 0, "unbalanced braces in {document}");
                depth -= 1;
            }
            _ => {}
        }
    }
    assert_eq!(depth, 0, "unbalanced braces in {document}");
    (max_depth, top_level)
}

fn selections() -> Vec<Vec<FieldSelection>> {
    vec![
        FieldSelection::leaves(["id"]),
        FieldSelection::leaves(["estimatedFee", "total"]),
        vec![
            FieldSelection::new("id"),
            FieldSelection::with_children("transaction", FieldSelection::leaves(["hash", "id"])),
        ],
        vec![
            FieldSelection::new("dynamicPriceExpiry"),
            FieldSelection::with_children(
                "orders",
                [FieldSelection::with_children(
                    "edges",
                    [FieldSelection::with_children(
                        "node",
                        FieldSelection::leaves(["id", "coinAmount", "priceType"]),
                    )],
                )],
            ),
        ],
    ]
}

#[test]
fn test_brace_nesting_matches_selection_depth() {
    for selection in selections() {
        let depth = selection.iter().map(FieldSelection::depth).max().unwrap();
        for kind in [OperationKind::Query, OperationKind::Mutation] {
            let request = OperationRequest::new(kind, "command", selection.clone())
                .unwrap()
                .argument("cryptocurrency", "bitcoin");
            let document = build(&request).unwrap();

            let (max_depth, top_level) = brace_profile(&document);
            assert_eq!(max_depth, depth + 1, "{document}");
            assert_eq!(top_level, 1, "{document}");
            assert!(document.starts_with(kind.as_str()));
        }
    }
}

#[test]
fn test_command_token_and_innermost_fields() {
    let request = OperationRequest::new(
        OperationKind::Query,
        "getPrices",
        [FieldSelection::new("id")],
    )
    .unwrap();
    let document = build(&request).unwrap();

    let tokens: Vec<&str> = document.split_whitespace().collect();
    assert_eq!(tokens[0], "query");
    assert_eq!(tokens[2], "getPrices");

    let open = document.rfind('{').unwrap();
    let close = document[open..].find('}').unwrap() + open;
    assert_eq!(document[open + 1..close].trim(), "id");
}

#[test]
fn test_build_is_deterministic() {
    for selection in selections() {
        let request = OperationRequest::mutation("send", selection)
            .unwrap()
            .argument("cryptocurrency", "bitcoin")
            .argument("amount", 0.01)
            .argument("address", "xyz");
        let first = build(&request).unwrap();
        for _ in 0..10 {
            assert_eq!(build(&request).unwrap(), first);
        }
    }
}

#[test]
fn test_unnamed_node_at_any_depth_fails_cleanly() {
    let broken = [
        vec![FieldSelection::new("")],
        vec![FieldSelection::new("id"), FieldSelection::new("\t")],
        vec![FieldSelection::with_children("a", [FieldSelection::new("")])],
        vec![FieldSelection::with_children(
            "a",
            [FieldSelection::with_children("b", [FieldSelection::new("c"), FieldSelection::new(" ")])],
        )],
    ];

    for selection in broken {
        let err = OperationRequest::query("getPrices", selection).unwrap_err();
        assert!(matches!(err, Error::EmptySelection { .. }));
        assert!(err.is_construction_error());
    }
}

#[test]
fn test_unnamed_node_from_json_fails_on_build() {
    let fields: Vec<FieldSelection> = serde_json::from_value(json!([
        {"field": "id"},
        {"field": "transaction", "fields": [{"args": {"x": 1}}]},
    ]))
    .unwrap();

    assert_eq!(
        OperationRequest::mutation("send", fields),
        Err(Error::empty_selection("transaction"))
    );
}

#[test]
fn test_normalize_upstream_failure() {
    let body = json!({"errors": [{
        "message": "Field 'edgesa' doesn't exist on type 'PostOrderConnection'",
        "locations": [{"line": 1, "column": 59}],
        "path": ["query", "getOrders", "orders", "edgesa"],
        "extensions": {"code": "undefinedField"}
    }]});

    match normalize(&body).unwrap() {
        ApiResponse::Failure { errors, raw } => {
            assert_eq!(
                errors,
                vec![ErrorEntry::new(
                    "Field 'edgesa' doesn't exist on type 'PostOrderConnection'",
                    "query.getOrders.orders.edgesa",
                )]
            );
            assert_eq!(raw, body["errors"]);
        }
        ApiResponse::Success { .. } => panic!("expected failure"),
    }
}

#[test]
fn test_normalize_success_payload() {
    let body = json!({"data": {"getOrders": {"dynamicPriceExpiry": 1612396362, "orders": {"edges": []}}}});
    let response = normalize(&body).unwrap();

    assert_eq!(
        response.field("getOrders").unwrap()["dynamicPriceExpiry"],
        1612396362
    );
}
