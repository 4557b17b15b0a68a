//! Integration tests for the endpoint wrappers over an in-memory transport.

use std::sync::Arc;

use buycoins::prelude::*;
use buycoins::{Error, NetworkError, ValidationError};
use parking_lot::Mutex;
use serde_json::{json, Value};

/// Records every document and answers with a canned body.
#[derive(Clone)]
struct RecordingTransport {
    body: Value,
    documents: Arc<Mutex<Vec<String>>>,
    public_keys: Arc<Mutex<Vec<String>>>,
}

impl RecordingTransport {
    fn new(body: Value) -> Self {
        Self {
            body,
            documents: Arc::default(),
            public_keys: Arc::default(),
        }
    }

    fn documents(&self) -> Vec<String> {
        self.documents.lock().clone()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, document: &str, credentials: &Credentials) -> Result<Value, NetworkError> {
        self.documents.lock().push(document.to_string());
        self.public_keys.lock().push(credentials.public_key().to_string());
        Ok(self.body.clone())
    }
}

fn client(body: Value) -> (Buycoins<RecordingTransport>, RecordingTransport) {
    let transport = RecordingTransport::new(body);
    let credentials = Credentials::new("chuks", "emeka").unwrap();
    (Buycoins::with_transport(transport.clone(), credentials), transport)
}

fn order_errors(command: &str) -> Value {
    json!({"errors": [{
        "message": "Field 'edgesa' doesn't exist on type 'PostOrderConnection'",
        "locations": [{"line": 1, "column": 59}],
        "path": ["query", command, "orders", "edgesa"],
        "extensions": {"code": "undefinedField", "typeName": "PostOrderConnection", "fieldName": "edgesa"}
    }]})
}

#[tokio::test]
async fn test_invalid_account_name() {
    let (buycoins, transport) = client(json!({"data": {}}));
    let err = buycoins.create_deposit_account("", &[]).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Please provide account name to create bank account for"
    );
    assert!(transport.documents().is_empty());
}

#[tokio::test]
async fn test_failed_account_creation() {
    let (buycoins, _) = client(json!({"errors": [{"message": "hello world", "path": ["ajah", "chuks"]}]}));
    let response = buycoins.create_deposit_account("Emeka", &[]).await.unwrap();

    assert_eq!(response.status(), buycoins::Status::Failure);
    assert_eq!(response.errors(), &[ErrorEntry::new("hello world", "ajah.chuks")]);
}

#[tokio::test]
async fn test_successful_account_creation() {
    let (buycoins, transport) =
        client(json!({"data": {"createDepositAccount": {"accountName": "Emeka"}}}));
    let response = buycoins.create_deposit_account("Emeka", &[]).await.unwrap();

    assert!(response.is_success());
    assert_eq!(
        response.field("createDepositAccount").unwrap()["accountName"],
        "Emeka"
    );
    assert!(transport.documents()[0].starts_with("mutation { createDepositAccount(accountName:Emeka)"));
    assert_eq!(*transport.public_keys.lock(), ["chuks"]);
}

#[test]
fn test_invalid_order_status() {
    let err = "closed".parse::<OrderStatus>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Personal orders status can only be 'open' or 'completed'."
    );
}

#[tokio::test]
async fn test_invalid_order_fields() {
    let (buycoins, transport) = client(json!({"data": {}}));
    let fields: Vec<FieldSelection> =
        serde_json::from_value(json!([{"field": "cryptocrrency"}, {"name": "chuks"}])).unwrap();

    let err = buycoins
        .my_orders(OrderStatus::Completed, &fields)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::InvalidFields)
    ));
    assert_eq!(
        err.to_string(),
        "Fields contains a node dict without a 'field' property."
    );
    assert!(transport.documents().is_empty());
}

#[tokio::test]
async fn test_failed_my_orders() {
    let (buycoins, _) = client(order_errors("getOrders"));
    let response = buycoins.my_orders(OrderStatus::Completed, &[]).await.unwrap();

    assert!(response.is_failure());
    assert_eq!(
        response.errors()[0].reason,
        "Field 'edgesa' doesn't exist on type 'PostOrderConnection'"
    );
    assert_eq!(response.errors()[0].field, "query.getOrders.orders.edgesa");
}

#[tokio::test]
async fn test_successful_my_orders() {
    let (buycoins, transport) = client(json!({"data": {"getOrders": {"dynamicPriceExpiry": 1612396362, "orders": {"edges": []}}}}));
    let response = buycoins.my_orders(OrderStatus::default(), &[]).await.unwrap();

    assert_eq!(
        response.field("getOrders").unwrap()["dynamicPriceExpiry"],
        1612396362
    );
    assert!(transport.documents()[0].starts_with("query { getOrders(status:open) {"));
}

#[tokio::test]
async fn test_market_book() {
    let (buycoins, _) = client(order_errors("getMarketBook"));
    let response = buycoins.market_book(&[]).await.unwrap();
    assert!(response.is_failure());

    let (buycoins, transport) = client(json!({"data": {"getMarketBook": {"dynamicPriceExpiry": 1612396362, "orders": {"edges": []}}}}));
    let response = buycoins.market_book(&[]).await.unwrap();
    assert!(response.is_success());
    assert!(transport.documents()[0].starts_with("query { getMarketBook {"));
}

#[tokio::test]
async fn test_fee_validation() {
    let (buycoins, transport) = client(json!({"data": {}}));

    let fee = NetworkFee {
        cryptocurrency: "".into(),
        amount: 0.1,
    };
    let err = buycoins.estimated_network_fee(&fee, &[]).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "cryptocurrency argument must be a valid string identifier."
    );

    let fee = NetworkFee {
        cryptocurrency: "bitcoin".into(),
        amount: -3.0,
    };
    let err = buycoins.estimated_network_fee(&fee, &[]).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "amount argument must be a valid float and greater than 0."
    );
    assert!(transport.documents().is_empty());
}

#[tokio::test]
async fn test_successful_fee_estimate() {
    let (buycoins, transport) = client(json!({"data": {"getEstimatedNetworkFee": {"estimatedFee": "0.00044", "total": "0.01044"}}}));
    let fee = NetworkFee {
        cryptocurrency: "bitcoin".into(),
        amount: 0.01,
    };
    let response = buycoins.estimated_network_fee(&fee, &[]).await.unwrap();

    assert_eq!(
        response.field("getEstimatedNetworkFee").unwrap()["total"],
        "0.01044"
    );
    assert_eq!(
        transport.documents(),
        ["query { getEstimatedNetworkFee(cryptocurrency:bitcoin,amount:0.01) { estimatedFee,total } }"]
    );
}

#[tokio::test]
async fn test_send_with_custom_fields() {
    let (buycoins, transport) = client(json!({"data": {"send": {"id": "x", "transaction": {"hash": "abc"}}}}));
    let transfer = SendCoins {
        address: "bc1qxyz".into(),
        cryptocurrency: "bitcoin".into(),
        amount: 0.25,
    };
    let fields = [
        FieldSelection::new("id"),
        FieldSelection::with_children("transaction", FieldSelection::leaves(["hash"])),
    ];
    let response = buycoins.send(&transfer, &fields).await.unwrap();

    assert_eq!(response.field("send").unwrap()["transaction"]["hash"], "abc");
    assert_eq!(
        transport.documents(),
        ["mutation { send(cryptocurrency:bitcoin,amount:0.25,address:bc1qxyz) { id,transaction{hash} } }"]
    );
}

#[tokio::test]
async fn test_trading_and_orders_dispatch() {
    let (buycoins, transport) = client(json!({"data": {}}));

    buycoins.prices(&[]).await.unwrap();
    buycoins.balances(&[]).await.unwrap();
    buycoins.balance("bitcoin", &[]).await.unwrap();
    buycoins
        .buy(&Trade::new("price-1", 0.01, "bitcoin"), &[])
        .await
        .unwrap();
    buycoins
        .sell(&Trade::new("price-2", 0.01, "bitcoin"), &[])
        .await
        .unwrap();
    buycoins
        .post_limit_order(&LimitOrder::fixed(OrderSide::Buy, 0.01, "bitcoin", 4_000_000.0), &[])
        .await
        .unwrap();
    buycoins
        .post_market_order(
            &MarketOrder {
                order_side: OrderSide::Sell,
                coin_amount: 0.01,
                cryptocurrency: "bitcoin".into(),
            },
            &[],
        )
        .await
        .unwrap();
    buycoins.create_address("bitcoin", &[]).await.unwrap();

    let commands: Vec<String> = transport
        .documents()
        .iter()
        .map(|document| {
            let mut tokens = document.split_whitespace();
            let kind = tokens.next().unwrap();
            let command = tokens.nth(1).unwrap();
            let command = command.split('(').next().unwrap();
            format!("{kind} {command}")
        })
        .collect();

    assert_eq!(
        commands,
        [
            "query getPrices",
            "query getBalances",
            "query getBalances",
            "mutation buy",
            "mutation sell",
            "mutation postLimitOrder",
            "mutation postMarketOrder",
            "mutation createAddress",
        ]
    );
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
    let (buycoins, _) = client(json!("unexpected"));
    let err = buycoins.prices(&[]).await.unwrap_err();

    assert!(matches!(err, Error::Network(NetworkError::Core(_))));
    assert!(err.as_validation().is_none());
    assert!(err.to_string().starts_with("Malformed response"));
}

#[tokio::test]
async fn test_envelope_serialization() {
    let (buycoins, _) = client(json!({"data": {"getPrices": []}}));
    let response = buycoins.prices(&[]).await.unwrap();

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"status": "success", "data": {"getPrices": []}})
    );
}

mod http {
    use super::*;
    use buycoins::ClientConfig;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_prices_over_http() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/graphql"))
            .and(header("authorization", "Basic Y2h1a3M6ZW1la2E="))
            .and(body_string_contains("getPrices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"getPrices": [{"id": "QnV5", "cryptocurrency": "bitcoin", "sellPricePerCoin": "18000000"}]}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig {
            endpoint: format!("{}/api/graphql", server.uri()),
            ..ClientConfig::default()
        };
        let buycoins = Buycoins::with_config(config, Credentials::new("chuks", "emeka").unwrap())
            .expect("Failed to build client");

        let response = buycoins.prices(&[]).await.unwrap();
        assert_eq!(
            response.field("getPrices").unwrap()[0]["sellPricePerCoin"],
            "18000000"
        );
    }
}
