use pay_now_core::{Currency, Failure, FailureKind, FormData, Outcome};

#[test]
fn payment_request_json_shape() {
    let form = FormData {
        to: "a@b.com".to_owned(),
        from: "ETH".to_owned(),
        amount: "0.25".to_owned(),
        description: String::new(),
    };
    let json = serde_json::to_value(form.to_request()).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({"to": "a@b.com", "from": "ETH", "amount": "0.25"})
    );

    let with_note = FormData {
        description: "dinner".to_owned(),
        ..form
    };
    let json = serde_json::to_value(with_note.to_request()).expect("serialize");
    assert_eq!(json["description"], "dinner");
}

#[test]
fn currency_serializes_as_code() {
    assert_eq!(
        serde_json::to_string(&Currency::Btc).expect("serialize"),
        "\"BTC\""
    );
    let parsed: Currency = serde_json::from_str("\"ETH\"").expect("deserialize");
    assert_eq!(parsed, Currency::Eth);
}

#[test]
fn outcome_survives_json() {
    let outcome = Outcome::Failed(Failure::new(FailureKind::Unauthorized, "Unauthorized"));
    let text = serde_json::to_string(&outcome).expect("serialize");
    let back: Outcome = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(back, outcome);
    assert_eq!(back.status(), 401);
}
