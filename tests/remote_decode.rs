//! Decoding and rendering of the lookup API's reply shapes.

use unlock_bot::commands::check::logic::format_remote;
use unlock_bot::services::lookup::RemoteReply;

#[test]
fn error_body_decodes_to_error_variant() {
    let reply: RemoteReply = serde_json::from_str(r#"{"error":"not found"}"#).expect("decode");
    assert!(matches!(reply, RemoteReply::Error { ref error } if error == "not found"));
}

#[test]
fn record_body_decodes_to_found_variant() {
    let reply: RemoteReply =
        serde_json::from_str(r#"{"marca":"Samsung","modelo":"A14","estado":"Liberado"}"#)
            .expect("decode");
    match reply {
        RemoteReply::Found {
            marca,
            modelo,
            estado,
        } => {
            assert_eq!(marca, "Samsung");
            assert_eq!(modelo, "A14");
            assert_eq!(estado, "Liberado");
        }
        RemoteReply::Error { .. } => panic!("expected Found variant"),
    }
}

#[test]
fn body_matching_neither_shape_fails_to_decode() {
    // Missing both `error` and the record fields; treated as unavailable at
    // the call site.
    assert!(serde_json::from_str::<RemoteReply>(r#"{"status":"ok"}"#).is_err());
    assert!(serde_json::from_str::<RemoteReply>(r#"{"marca":"Samsung"}"#).is_err());
}

#[test]
fn remote_error_renders_as_notice() {
    let reply = RemoteReply::Error {
        error: "not found".to_string(),
    };
    assert_eq!(format_remote("999999999", &reply), "⚠️ not found");
}

#[test]
fn remote_record_renders_as_card() {
    let reply = RemoteReply::Found {
        marca: "Samsung".to_string(),
        modelo: "A14".to_string(),
        estado: "Liberado".to_string(),
    };
    let card = format_remote("999999999", &reply);
    assert!(card.contains("`999999999`"));
    assert!(card.contains("- Estado: Liberado"));
}
