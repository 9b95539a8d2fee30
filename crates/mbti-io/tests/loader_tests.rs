use std::io::Cursor;

use pretty_assertions::assert_eq;

use mbti_io::{load_table, ColumnMergeRule, LoadError, LoadOptions, TextEncoding};
use mbti_model::MbtiType;

fn load(csv: &str) -> mbti_model::Table {
    load_table(Cursor::new(csv.as_bytes()), &LoadOptions::default()).unwrap()
}

#[test]
fn loads_a_plain_sixteen_column_file() {
    let csv = "Country,INTJ,INTP,ENTJ,ENTP,INFJ,INFP,ENFJ,ENFP,ISTJ,ISFJ,ESTJ,ESFJ,ISTP,ISFP,ESTP,ESFP\n\
               Freedonia,10,5,5,5,10,15,5,5,5,5,5,5,5,5,5,5\n";
    let table = load(csv);

    assert_eq!(table.len(), 1);
    let rec = table.get("Freedonia").unwrap();
    assert_eq!(rec.share(MbtiType::INTJ), Some(10.0));
    assert_eq!(rec.share(MbtiType::INFP), Some(15.0));
    assert!((rec.present_sum() - 100.0).abs() < 1e-9);
}

#[test]
fn suffixed_columns_fold_into_their_base_type() {
    let csv = "Country,INTJ-T,INTJ-A,ENFP-T\n\
               Freedonia,6.25,3.75,20\n";
    let table = load(csv);

    let rec = table.get("Freedonia").unwrap();
    assert_eq!(rec.share(MbtiType::INTJ), Some(10.0));
    assert_eq!(rec.share(MbtiType::ENFP), Some(20.0));
    // Types with no mapped column stay missing.
    assert_eq!(rec.share(MbtiType::ISTP), None);
}

#[test]
fn duplicate_country_rows_are_summed() {
    let csv = "Country,INTJ,INFP\n\
               Freedonia,6,1\n\
               Freedonia,4,2\n";
    let table = load(csv);

    assert_eq!(table.len(), 1);
    let rec = table.get("Freedonia").unwrap();
    assert_eq!(rec.share(MbtiType::INTJ), Some(10.0));
    assert_eq!(rec.share(MbtiType::INFP), Some(3.0));
}

#[test]
fn non_numeric_cells_become_missing_not_zero() {
    let csv = "Country,INTJ,INFP,ESTP\n\
               Freedonia,abc,7.5,\n";
    let table = load(csv);

    let rec = table.get("Freedonia").unwrap();
    assert_eq!(rec.share(MbtiType::INTJ), None);
    assert_eq!(rec.share(MbtiType::INFP), Some(7.5));
    assert_eq!(rec.share(MbtiType::ESTP), None);
    assert_eq!(rec.present_sum(), 7.5);
}

#[test]
fn unmapped_columns_are_ignored() {
    let csv = "Country,INTJ,Population\n\
               Freedonia,9,123456\n";
    let table = load(csv);

    let rec = table.get("Freedonia").unwrap();
    assert_eq!(rec.share(MbtiType::INTJ), Some(9.0));
    assert_eq!(rec.present_sum(), 9.0);
}

#[test]
fn short_rows_read_as_missing() {
    let csv = "Country,INTJ,INFP\n\
               Freedonia,5\n";
    let table = load(csv);

    let rec = table.get("Freedonia").unwrap();
    assert_eq!(rec.share(MbtiType::INTJ), Some(5.0));
    assert_eq!(rec.share(MbtiType::INFP), None);
}

#[test]
fn rows_with_empty_country_are_skipped() {
    let csv = "Country,INTJ\n\
               ,5\n\
               Freedonia,6\n";
    let table = load(csv);

    assert_eq!(table.len(), 1);
    assert!(table.contains("Freedonia"));
}

#[test]
fn utf8_bom_is_stripped_from_the_header() {
    let csv = "\u{feff}Country,INTJ\nFreedonia,5\n";
    let table = load(csv);
    assert_eq!(
        table.get("Freedonia").unwrap().share(MbtiType::INTJ),
        Some(5.0)
    );
}

#[test]
fn windows_1252_country_names_decode_under_auto() {
    // "Curaçao" with ç encoded as 0xE7 (invalid as UTF-8).
    let mut bytes = b"Country,INTJ\nCura".to_vec();
    bytes.push(0xE7);
    bytes.extend_from_slice(b"ao,5\n");

    let table = load_table(Cursor::new(bytes.clone()), &LoadOptions::default()).unwrap();
    assert!(table.contains("Curaçao"));

    let strict = LoadOptions {
        encoding: TextEncoding::Utf8,
        ..LoadOptions::default()
    };
    let err = load_table(Cursor::new(bytes), &strict).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn custom_merge_rule_replaces_the_default() {
    let mut merge = ColumnMergeRule::empty();
    merge.insert("Architect", MbtiType::INTJ);
    let options = LoadOptions {
        merge,
        ..LoadOptions::default()
    };

    let csv = "Country,Architect,INTJ\nFreedonia,4,9\n";
    let table = load_table(Cursor::new(csv.as_bytes()), &options).unwrap();

    // Only the mapped header contributes; the bare code is now unmapped.
    let rec = table.get("Freedonia").unwrap();
    assert_eq!(rec.share(MbtiType::INTJ), Some(4.0));
}

#[test]
fn empty_input_and_missing_country_column_error() {
    let err = load_table(Cursor::new(&b""[..]), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::EmptyInput));

    let err = load_table(
        Cursor::new(&b"Nation,INTJ\nFreedonia,5\n"[..]),
        &LoadOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, LoadError::MissingCountryColumn(_)));
}
