// SPDX-License-Identifier: Apache-2.0

use dose_certa_core::{IdPrefix, RecordId, SequenceIdSource, UserId, UuidIdSource};
use proptest::prelude::*;

proptest! {
    #[test]
    fn record_ids_accept_the_documented_charset(id in "[A-Za-z0-9_-]{0,63}[A-Za-z0-9_]") {
        prop_assert!(RecordId::new(id.clone()).is_ok());
        let parsed: RecordId = id.parse().expect("parse");
        prop_assert_eq!(parsed.as_str(), id.as_str());
    }

    #[test]
    fn derived_alert_ids_are_recognised_for_any_source_record(
        source in "(vac|stock|camp)-[a-z0-9]{1,20}"
    ) {
        let source = RecordId::new(source).expect("source id");
        for prefix in IdPrefix::DERIVED_ALERTS {
            let derived = RecordId::prefixed(prefix, source.as_str()).expect("derived");
            prop_assert!(derived.is_derived_alert());
        }
        prop_assert_eq!(source.is_derived_alert(), false);
    }
}

#[test]
fn record_ids_reject_empty_long_and_spaced_values() {
    assert!(RecordId::new("").is_err());
    assert!(RecordId::new("a".repeat(65)).is_err());
    assert!(RecordId::new("post 1").is_err());
    let err = RecordId::new("x/y").expect_err("slash");
    assert!(err.to_string().contains("record id"));
}

#[test]
fn record_ids_round_trip_through_json_as_plain_strings() {
    let id = RecordId::new("vac-1").expect("id");
    assert_eq!(serde_json::to_string(&id).expect("encode"), "\"vac-1\"");
    assert!(serde_json::from_str::<RecordId>("\"bad id\"").is_err());
}

#[test]
fn uuid_minted_user_ids_fit_the_length_limit() {
    let user = UserId::mint(&UuidIdSource).expect("user id");
    assert!(user.as_str().starts_with("user-"));
    assert_eq!(user.as_str().len(), "user-".len() + 32);

    let ids = SequenceIdSource::new("exam");
    let file = RecordId::mint(IdPrefix::ExamFile, &ids).expect("file id");
    assert_eq!(file.as_str(), "file-exam-1");
}
