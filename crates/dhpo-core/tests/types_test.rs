//! JSON shape tests for the response records
//!
//! The façade has always returned every field, with `null` for whatever the
//! backend left unset. These tests pin that contract.

use dhpo_core::{
    CheckNewPriorAuthorizationsResponse, DownloadTransactionFileResponse,
    NewTransactionsResponse, SearchTransactionsResponse, SetTransactionDownloadedResponse,
    UploadTransactionResponse,
};
use dhpo_xml::parse;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_new_transactions_serializes_explicit_nulls() {
    let record = NewTransactionsResponse {
        result: -4,
        xml_transaction: None,
        error_message: Some("Invalid login credentials.".to_string()),
    };
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({
            "result": -4,
            "xml_transaction": null,
            "error_message": "Invalid login credentials."
        })
    );
}

#[test]
fn test_new_transactions_embeds_parsed_payload() {
    let record = NewTransactionsResponse {
        result: 1,
        xml_transaction: Some(parse("<Transactions><FileID>8812</FileID></Transactions>").unwrap()),
        error_message: None,
    };
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({
            "result": 1,
            "xml_transaction": {"Transactions": {"FileID": "8812"}},
            "error_message": null
        })
    );
}

#[test]
fn test_upload_serializes_all_fields() {
    let record = UploadTransactionResponse {
        result: -10,
        error_message: Some("Schema validation failed".to_string()),
        error_report: Some("line 4: missing PayerID".to_string()),
    };
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({
            "result": -10,
            "error_message": "Schema validation failed",
            "error_report": "line 4: missing PayerID"
        })
    );
}

#[test]
fn test_download_keeps_file_and_name_separate() {
    let record = DownloadTransactionFileResponse {
        result: 0,
        file_name: Some("claims_batch_17.xml".to_string()),
        file: Some(parse("<Remittance.Advice><RecordCount>1</RecordCount></Remittance.Advice>").unwrap()),
        error_message: None,
    };
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({
            "result": 0,
            "file_name": "claims_batch_17.xml",
            "file": {"Remittance.Advice": {"RecordCount": "1"}},
            "error_message": null
        })
    );
}

#[test]
fn test_check_and_set_records_are_minimal() {
    let check = CheckNewPriorAuthorizationsResponse {
        result: 3,
        error_message: None,
    };
    assert_eq!(
        serde_json::to_value(&check).unwrap(),
        json!({"result": 3, "error_message": null})
    );

    let set = SetTransactionDownloadedResponse {
        result: 0,
        error_message: Some(String::new()),
    };
    assert_eq!(
        serde_json::to_value(&set).unwrap(),
        json!({"result": 0, "error_message": ""})
    );
}

#[test]
fn test_search_response_shape() {
    let record = SearchTransactionsResponse {
        result: 2,
        found_transactions: Some(
            parse("<Transactions><Transaction><FileID>1</FileID></Transaction><Transaction><FileID>2</FileID></Transaction></Transactions>")
                .unwrap(),
        ),
        error_message: None,
    };
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({
            "result": 2,
            "found_transactions": {
                "Transactions": {
                    "Transaction": [{"FileID": "1"}, {"FileID": "2"}]
                }
            },
            "error_message": null
        })
    );
}
