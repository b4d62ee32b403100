//! End-to-end label document tests
//!
//! These tests run the create-label use case against the real QR encoder,
//! xlsx writer and a temporary output directory.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

use spine_labels::application::dto::RawLabelInput;
use spine_labels::application::errors::LabelError;
use spine_labels::application::labels::{DocumentAssembler, QrPayload};
use spine_labels::application::ports::{ArtifactStore, QrEncoder};
use spine_labels::application::validation::validate_label_input;
use spine_labels::domain::value_objects::{BinderSize, BuildState, CellRef, CopyCounter};
use spine_labels::infrastructure::{
    clock::FixedClock, qr::QrCodeEncoder, storage::LocalOutputDirectory,
    xlsx::XlsxDocumentWriter,
};
use spine_labels::use_cases::CreateLabelUseCase;

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

struct Fixture {
    dir: TempDir,
    store: Arc<LocalOutputDirectory>,
    encoder: Arc<QrCodeEncoder>,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        Self {
            store: Arc::new(LocalOutputDirectory::new(dir.path())),
            encoder: Arc::new(QrCodeEncoder::default()),
            dir,
        }
    }

    fn assembler(&self) -> DocumentAssembler {
        DocumentAssembler::new(
            self.encoder.clone(),
            Arc::new(XlsxDocumentWriter::new()),
            self.store.clone(),
        )
    }

    fn use_case(&self) -> CreateLabelUseCase {
        CreateLabelUseCase::new(
            self.assembler(),
            self.store.clone(),
            Arc::new(FixedClock(fixed_now())),
        )
    }

    fn files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Read one part of a saved workbook as text
fn read_part(workbook: &Path, name: &str) -> String {
    let file = std::fs::File::open(workbook).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

fn part_names(workbook: &Path) -> Vec<String> {
    let file = std::fs::File::open(workbook).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    archive.file_names().map(str::to_string).collect()
}

/// Pixel width Excel renders for a `<col width>` value
fn rendered_pixels(width: f64) -> u32 {
    ((256.0 * width + (128.0_f64 / 7.0).floor()).floor() / 256.0 * 7.0).floor() as u32
}

/// Rendered pixel width per 1-based column, from the `<col>` elements
fn column_pixels(sheet_xml: &str) -> Vec<(u32, u32)> {
    let attr = |element: &str, name: &str| -> String {
        let key = format!("{name}=\"");
        let start = element.find(&key).unwrap() + key.len();
        let end = element[start..].find('"').unwrap() + start;
        element[start..end].to_string()
    };

    let mut columns = Vec::new();
    for element in sheet_xml.split("<col ").skip(1) {
        let element = &element[..element.find("/>").unwrap()];
        let min: u32 = attr(element, "min").parse().unwrap();
        let max: u32 = attr(element, "max").parse().unwrap();
        let px = rendered_pixels(attr(element, "width").parse().unwrap());
        columns.extend((min..=max).map(|col| (col, px)));
    }
    columns
}

fn equipment_input(binder_size: &str) -> RawLabelInput {
    RawLabelInput::new()
        .with("doc_type", "1")
        .with("binder_size", binder_size)
        .with("unit_number", "U1")
        .with("doc_number", "D100")
        .with("doc_title", "Spec")
        .with("copy_count", "3")
        .with("department", "QA")
        .with("year", "2024")
}

fn project_input(binder_size: &str) -> RawLabelInput {
    RawLabelInput::new()
        .with("doc_type", "2")
        .with("binder_size", binder_size)
        .with("project_number", "P-7")
        .with("test_number", "T-42")
        .with("doc_title", "Fatigue")
        .with("copy_count", "2")
        .with("writer", "Kim")
}

#[test]
fn test_equipment_label_end_to_end() {
    let fixture = Fixture::new();

    let created = fixture.use_case().execute(&equipment_input("3")).unwrap();

    assert_eq!(created.file_name, "D100_20240501093000.xlsx");
    assert_eq!(created.sheet_count, 3);
    assert_eq!(created.deleted_images, 3);
    assert!(created.file_size > 0);

    // Only the document remains; every QR image was cleaned up
    assert_eq!(fixture.files(), vec!["D100_20240501093000.xlsx"]);
    let bytes = std::fs::read(&created.file_path).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_every_compatible_binder_size_builds() {
    for binder_size in BinderSize::ALL {
        let fixture = Fixture::new();
        let cm = binder_size.cm().to_string();

        let created = fixture.use_case().execute(&equipment_input(&cm)).unwrap();
        assert_eq!(created.sheet_count, 3, "equipment at {binder_size}");

        let result = fixture.use_case().execute(&project_input(&cm));
        if binder_size == BinderSize::OneCm {
            assert!(matches!(
                result,
                Err(LabelError::IncompatibleBinderSize { .. })
            ));
        } else {
            assert_eq!(result.unwrap().sheet_count, 2, "project at {binder_size}");
        }
    }
}

#[test]
fn test_incompatible_project_leaves_no_files() {
    let fixture = Fixture::new();

    let err = fixture.use_case().execute(&project_input("1")).unwrap_err();

    assert!(matches!(err, LabelError::IncompatibleBinderSize { .. }));
    assert!(fixture.files().is_empty());
}

#[test]
fn test_missing_writer_reported_before_any_work() {
    let fixture = Fixture::new();
    let mut input = project_input("5");
    input.insert("writer", "  \n");

    let err = fixture.use_case().execute(&input).unwrap_err();

    assert!(matches!(err, LabelError::MissingField(ref f) if f == "writer"));
    assert!(fixture.files().is_empty());
}

#[test]
fn test_sheets_carry_counters_and_payloads() {
    let fixture = Fixture::new();
    let request = validate_label_input(&equipment_input("3"), 2024).unwrap();

    let document = fixture.assembler().build_document(&request).unwrap();
    assert_eq!(document.state(), BuildState::Populated(3));

    for (i, sheet) in document.sheets().iter().enumerate() {
        let counter = CopyCounter::new(i as u32 + 1, 3);
        assert_eq!(sheet.text(CellRef::a1("B5")), counter.to_string());
    }
    assert_eq!(
        QrPayload::for_request(&request, CopyCounter::new(2, 3)).as_str(),
        "U1|D100|Spec|QA|2024|2/3"
    );
}

#[test]
fn test_same_input_same_second_is_deterministic() {
    let fixture = Fixture::new();
    let request = validate_label_input(&project_input("7"), 2024).unwrap();

    let first = fixture
        .assembler()
        .build_label_document(&request, fixed_now())
        .unwrap();
    let second = fixture
        .assembler()
        .build_label_document(&request, fixed_now())
        .unwrap();

    // Same second, same name: the later build replaces the earlier file
    assert_eq!(first.file_name, second.file_name);
    assert!(second.file_path.exists());

    let a = fixture.assembler().build_document(&request).unwrap();
    let b = fixture.assembler().build_document(&request).unwrap();
    assert_eq!(a, b);

    let png_a = fixture.encoder.encode_png("[P-7] T-42|Fatigue|Kim|1/2").unwrap();
    let png_b = fixture.encoder.encode_png("[P-7] T-42|Fatigue|Kim|1/2").unwrap();
    assert_eq!(png_a, png_b);
}

#[test]
fn test_unicode_fields_encode() {
    let fixture = Fixture::new();
    let input = equipment_input("5")
        .with("unit_number", "설비-1")
        .with("doc_title", "정비 절차서");

    let created = fixture.use_case().execute(&input).unwrap();
    assert_eq!(created.sheet_count, 3);
}

#[test]
fn test_oversized_payload_fails_and_cleans_up() {
    let fixture = Fixture::new();
    let input = equipment_input("3").with("doc_title", "x".repeat(4000));

    let err = fixture.use_case().execute(&input).unwrap_err();

    assert!(matches!(err, LabelError::QrEncoding(_)));
    assert!(fixture.files().is_empty());
}

#[test]
fn test_download_resolution_after_build() {
    let fixture = Fixture::new();
    let created = fixture.use_case().execute(&equipment_input("3")).unwrap();

    assert_eq!(
        fixture.store.resolve_download(&created.file_name).unwrap(),
        created.file_path
    );
    assert!(fixture.store.resolve_download("../D100.xlsx").is_err());
}

#[test]
fn test_saved_workbook_contents() {
    let fixture = Fixture::new();
    let input = project_input("5").with("copy_count", "3");

    let created = fixture.use_case().execute(&input).unwrap();
    let path = created.file_path.as_path();

    let workbook = read_part(path, "xl/workbook.xml");
    for n in 1..=3 {
        assert!(workbook.contains(&format!("name=\"Sheet {n}\"")), "Sheet {n}");
    }
    assert!(!workbook.contains("name=\"Sheet 4\""));
    assert!(workbook.contains("$A$1:$T$24"));

    let media: Vec<String> = part_names(path)
        .into_iter()
        .filter(|name| name.starts_with("xl/media/") && name.ends_with(".png"))
        .collect();
    assert_eq!(media.len(), 3);

    let strings = read_part(path, "xl/sharedStrings.xml");
    for counter in ["1/3", "2/3", "3/3"] {
        assert!(strings.contains(&format!(">{counter}<")), "{counter}");
    }
    assert!(strings.contains("[P-7] T-42"));

    for n in 1..=3 {
        let sheet = read_part(path, &format!("xl/worksheets/sheet{n}.xml"));
        assert!(sheet.contains("<mergeCell ref=\"B4:M4\"/>"));
        assert!(sheet.contains("<mergeCell ref=\"Q21:S21\"/>"));
        assert!(sheet.contains("<drawing "));
    }
}

#[test]
fn test_saved_column_widths_match_layout() {
    let fixture = Fixture::new();
    let created = fixture.use_case().execute(&project_input("5")).unwrap();

    let sheet = read_part(&created.file_path, "xl/worksheets/sheet2.xml");
    let columns = column_pixels(&sheet);

    // Raw widths: gutters 0.375, QR block 1.25 at 5cm, summary 8.13/34.88/8.13
    let mut expected: Vec<(u32, f64)> = vec![(1, 0.375)];
    expected.extend((2..=13).map(|col| (col, 1.25)));
    expected.extend([
        (14, 0.375),
        (15, 0.375),
        (16, 0.375),
        (17, 8.13),
        (18, 34.88),
        (19, 8.13),
        (20, 0.375),
    ]);
    let expected: Vec<(u32, u32)> = expected
        .into_iter()
        .map(|(col, width)| (col, rendered_pixels(width)))
        .collect();

    assert_eq!(columns, expected);
    // Twelve 9px columns hold the 75px QR image
    let qr_block: u32 = columns[1..13].iter().map(|(_, px)| px).sum();
    assert_eq!(qr_block, 108);
}

#[test]
fn test_saved_qr_block_width_per_binder() {
    for (binder, px) in [("1", 5), ("3", 7), ("5", 9), ("7", 13)] {
        let fixture = Fixture::new();
        let created = fixture.use_case().execute(&equipment_input(binder)).unwrap();

        let sheet = read_part(&created.file_path, "xl/worksheets/sheet1.xml");
        let columns = column_pixels(&sheet);
        assert_eq!(columns[0], (1, 3), "gutter at {binder}cm");
        assert!(
            columns[1..13].iter().all(|&(_, width)| width == px),
            "QR columns at {binder}cm: {columns:?}"
        );
    }
}
