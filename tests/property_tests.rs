//! Property-based tests using proptest
//!
//! These tests generate many random inputs to check counter, payload,
//! validation and file-naming invariants.

use proptest::prelude::*;

use spine_labels::application::dto::RawLabelInput;
use spine_labels::application::errors::LabelError;
use spine_labels::application::labels::file_names::{
    document_file_name, is_safe_file_name, sanitize_component,
};
use spine_labels::application::labels::{QrPayload, PAYLOAD_SEPARATOR};
use spine_labels::application::validation::{coerce_count, validate_label_input};
use spine_labels::domain::value_objects::{BinderSize, CopyCounter, DocumentVariant};

/// Strategy for field text without the payload separator
fn field_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9가-힣 _.-]{1,24}".prop_filter("non-blank", |s| !s.trim().is_empty())
}

/// Strategy for binder sizes
fn binder_size_strategy() -> impl Strategy<Value = BinderSize> {
    prop_oneof![
        Just(BinderSize::OneCm),
        Just(BinderSize::ThreeCm),
        Just(BinderSize::FiveCm),
        Just(BinderSize::SevenCm)
    ]
}

fn equipment_input(
    binder_size: BinderSize,
    unit: &str,
    doc: &str,
    title: &str,
    department: &str,
    copies: u32,
) -> RawLabelInput {
    RawLabelInput::new()
        .with("doc_type", DocumentVariant::Equipment.code())
        .with("binder_size", binder_size.cm().to_string())
        .with("unit_number", unit)
        .with("doc_number", doc)
        .with("doc_title", title)
        .with("department", department)
        .with("copy_count", copies.to_string())
        .with("year", "2024")
}

proptest! {
    /// Counters run 1..=N without gaps and always read "i/N"
    #[test]
    fn counters_are_contiguous(n in 1u32..200) {
        let counters: Vec<CopyCounter> = CopyCounter::run(n).collect();
        prop_assert_eq!(counters.len(), n as usize);
        for (i, counter) in counters.iter().enumerate() {
            prop_assert_eq!(counter.index(), i as u32 + 1);
            prop_assert_eq!(counter.to_string(), format!("{}/{}", i + 1, n));
        }
    }

    /// Payloads of two copies differ only in the counter segment
    #[test]
    fn payloads_differ_only_in_counter(
        unit in field_strategy(),
        doc in field_strategy(),
        title in field_strategy(),
        department in field_strategy(),
        binder_size in binder_size_strategy(),
        n in 2u32..20,
    ) {
        let input = equipment_input(binder_size, &unit, &doc, &title, &department, n);
        let request = validate_label_input(&input, 2024).unwrap();

        let first = QrPayload::for_request(&request, CopyCounter::new(1, n));
        let last = QrPayload::for_request(&request, CopyCounter::new(n, n));

        let a: Vec<&str> = first.as_str().split(PAYLOAD_SEPARATOR).collect();
        let b: Vec<&str> = last.as_str().split(PAYLOAD_SEPARATOR).collect();
        prop_assert_eq!(a.len(), 6);
        prop_assert_eq!(&a[..5], &b[..5]);
        prop_assert_eq!(a[5], format!("1/{}", n));
        prop_assert_eq!(b[5], format!("{}/{}", n, n));
    }

    /// A 1cm project binder is rejected whatever the other fields hold
    #[test]
    fn project_never_fits_one_cm(
        project in field_strategy(),
        test in field_strategy(),
        title in field_strategy(),
        writer in proptest::option::of(field_strategy()),
    ) {
        let mut input = RawLabelInput::new()
            .with("doc_type", DocumentVariant::Project.code())
            .with("binder_size", "1")
            .with("project_number", project)
            .with("test_number", test)
            .with("doc_title", title);
        if let Some(writer) = writer {
            input.insert("writer", writer);
        }

        let result = validate_label_input(&input, 2024);
        let is_incompatible = matches!(result, Err(LabelError::IncompatibleBinderSize { .. }));
        prop_assert!(is_incompatible);
    }

    /// Count coercion never fails and never drops below one
    #[test]
    fn coerced_counts_are_positive(raw in proptest::option::of(".{0,12}"), default in 1u32..10) {
        let count = coerce_count(raw.as_deref(), default);
        prop_assert!(count >= 1);
    }

    /// Generated document names are always safe to serve back
    #[test]
    fn document_names_are_safe(base in ".{1,40}") {
        let at = chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let name = document_file_name(&base, at);
        prop_assert!(is_safe_file_name(&name));
        prop_assert!(name.ends_with("_20240501093000.xlsx"));
        prop_assert!(!sanitize_component(&base).contains('/'));
    }
}
