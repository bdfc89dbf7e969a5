/// Order used when no input file is supplied.
pub const SAMPLE_ORDER_JSON: &str = r#"{
    "order_id": 12345,
    "customer": {
        "name": "John Doe",
        "email": "john.doe@example.com"
    },
    "items": [
        {"name": "Laptop", "price": 1000.50, "quantity": 1},
        {"name": "Mouse", "price": 25.00, "quantity": 2},
        {"name": "Keyboard", "price": 45.00, "quantity": 1}
    ]
}"#;
