use callsheet_types::{CallSheet, SheetDefaults};

mod basic;

fn sample_sheet() -> CallSheet {
    CallSheet::new(&SheetDefaults::default(), "2024-03-01")
}
