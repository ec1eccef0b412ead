use crate::{CallSheet, HeaderAction};

pub(super) fn reduce(action: &HeaderAction, sheet: &mut CallSheet) -> bool {
    match action {
        HeaderAction::Set(field, value) => sheet.set_header_field(*field, value),
        HeaderAction::SetLogo(data_uri) => {
            sheet.production_logo = data_uri.clone();
            true
        }
        HeaderAction::ClearLogo => {
            if sheet.production_logo.is_empty() {
                return false;
            }
            sheet.production_logo.clear();
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HeaderField, SheetDefaults};

    fn sheet() -> CallSheet {
        CallSheet::new(&SheetDefaults::default(), "2024-01-01")
    }

    #[test]
    fn set_title() {
        let mut s = sheet();
        assert!(reduce(&HeaderAction::Set(HeaderField::Title, "Night Shoot".into()), &mut s));
        assert_eq!(s.title, "Night Shoot");
    }

    #[test]
    fn logo_set_and_clear() {
        let mut s = sheet();
        assert!(!reduce(&HeaderAction::ClearLogo, &mut s));
        assert!(reduce(&HeaderAction::SetLogo("data:image/png;base64,AA==".into()), &mut s));
        assert!(s.production_logo.starts_with("data:image/png"));
        assert!(reduce(&HeaderAction::ClearLogo, &mut s));
        assert!(s.production_logo.is_empty());
    }
}
