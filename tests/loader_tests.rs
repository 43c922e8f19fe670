//! Loader boundary tests: CSV and workbook fixtures become the table shape
//! the core expects.

mod common;
use common::{temp_path, write_primary_csv, write_secondary_csv};

use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;
use schedrec::errors::AppError;
use schedrec::loader::load_table;
use schedrec::models::record::CellValue;
use schedrec::models::table::TableRole;
use std::path::Path;

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, day).expect("valid date")
}

#[test]
fn csv_booking_export_loads_typed_cells() {
    let path = temp_path("csv_booking", "csv");
    write_primary_csv(
        &path,
        &[("2026-01-05", "Gala", "Hall"), ("2026-01-06", "Workshop", "Room1")],
    );

    let table = load_table(Path::new(&path), "Sheet", TableRole::Primary).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.role, TableRole::Primary);

    let first = &table.records[0];
    assert_eq!(first.row, 1);
    assert_eq!(first.date(), Some(d(5)));
    assert_eq!(first.name(), "Gala");
    assert_eq!(first.location(), "Hall");

    assert_eq!(table.date_window().unwrap(), (d(5), d(6)));
}

#[test]
fn csv_plain_date_column_resolves_through_fallback() {
    let path = temp_path("csv_plain_date", "csv");
    write_secondary_csv(&path, &[("2026-01-07", "Recital", "Stage")]);

    let table = load_table(Path::new(&path), "Events", TableRole::Secondary).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.records[0].date(), Some(d(7)));
}

#[test]
fn csv_numbers_and_blanks_are_typed() {
    let path = temp_path("csv_typed", "csv");
    std::fs::write(
        &path,
        "Date,Booking Event Name,Room Description,Attendees\n\
         2026-01-05,Gala,Hall,120\n\
         2026-01-06,Workshop,,\n",
    )
    .unwrap();

    let table = load_table(Path::new(&path), "Events", TableRole::Secondary).unwrap();

    assert_eq!(
        table.records[0].get("Attendees"),
        Some(&CellValue::Number(120.0))
    );
    assert_eq!(
        table.records[1].get("Room Description"),
        Some(&CellValue::Empty)
    );
    assert_eq!(table.records[1].location(), "");
}

#[test]
fn xlsx_named_sheet_loads() {
    let path = temp_path("xlsx_load", "xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Sheet").unwrap();
    sheet.write_string(0, 0, "Booking Date").unwrap();
    sheet.write_string(0, 1, "Booking Event Name").unwrap();
    sheet.write_string(0, 2, "Room Description").unwrap();
    sheet.write_string(1, 0, "2026-01-05").unwrap();
    sheet.write_string(1, 1, "Gala").unwrap();
    sheet.write_string(1, 2, "Hall").unwrap();
    sheet.write_string(2, 0, "2026-01-06").unwrap();
    sheet.write_string(2, 1, "Workshop").unwrap();
    sheet.write_string(2, 2, "Room1").unwrap();
    workbook.save(&path).unwrap();

    let table = load_table(Path::new(&path), "Sheet", TableRole::Primary).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.records[0].date(), Some(d(5)));
    assert_eq!(table.records[1].name(), "Workshop");
}

#[test]
fn xlsx_wrong_sheet_name_is_a_source_error() {
    let path = temp_path("xlsx_wrong_sheet", "xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("SomethingElse").unwrap();
    sheet.write_string(0, 0, "Booking Date").unwrap();
    workbook.save(&path).unwrap();

    match load_table(Path::new(&path), "Events", TableRole::Secondary) {
        Err(AppError::SourceRead { role, .. }) => assert_eq!(role, "secondary"),
        other => panic!("expected SourceRead, got {:?}", other),
    }
}

#[test]
fn missing_file_identifies_which_table_failed() {
    let err = load_table(
        Path::new("/nonexistent/schedrec-fixture.xlsx"),
        "Sheet",
        TableRole::Primary,
    )
    .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("primary"), "message was: {msg}");
    assert!(msg.contains("correct path"), "message was: {msg}");
}
