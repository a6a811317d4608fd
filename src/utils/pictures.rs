use serde_json::Value;

use crate::{
    error::EpicError,
    models::pictures::{
        EpicImage,
        ImageType,
    },
};

/// Splits an EPIC timestamp such as `2015-10-31 00:36:33` into its year, month
/// and day parts. The split is purely textual, nothing is checked against a
/// calendar.
pub fn split_epic_date(full: &str) -> Result<(&str, &str, &str), EpicError> {
    let mut parts = full.split('-');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day_part)) => {
            let day = day_part
                .split(' ')
                .next()
                .unwrap_or(day_part);
            Ok((year, month, day))
        },
        _ => {
            Err(EpicError::Unexpected(format!(
                "unexpected date '{}' in EPIC image record",
                full
            )))
        },
    }
}

/// Unpacks the records from an EPIC response body.
///
/// Any empty or zero-like body (`null`, `[]`, `{}`, `""`, `false`, `0`) means
/// the api had nothing for the request.
pub fn image_records(body: Value) -> Result<Vec<Value>, EpicError> {
    let empty = match &body {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    };

    match body {
        _ if empty => Err(EpicError::NoImagesFound),
        Value::Array(records) => Ok(records),
        other => {
            Err(EpicError::Unexpected(format!(
                "unexpected EPIC response: {}",
                other
            )))
        },
    }
}

pub fn archive_url(
    archive_base: &str,
    image_type: ImageType,
    image: &EpicImage,
) -> Result<String, EpicError> {
    let (year, month, day) = split_epic_date(&image.date)?;

    Ok(format!(
        "{}{}/{}/{}/{}/png/{}.png",
        archive_base, image_type, year, month, day, image.image
    ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::utils::constants::EPIC_ARCHIVE_BASE;

    #[test]
    fn empty_bodies_have_no_records() {
        for body in [
            json!(null),
            json!([]),
            json!({}),
            json!(""),
            json!(false),
            json!(0),
            json!(0.0),
        ] {
            assert_eq!(
                image_records(body.clone()),
                Err(EpicError::NoImagesFound),
                "body: {}",
                body
            );
        }
    }

    #[test]
    fn records_come_from_arrays_only() {
        let records = image_records(json!([{"image": "a"}, {"image": "b"}])).unwrap();
        assert_eq!(records.len(), 2);

        for body in [json!({"image": "a"}), json!("maintenance"), json!(1), json!(true)] {
            assert!(matches!(
                image_records(body),
                Err(EpicError::Unexpected(_))
            ));
        }
    }

    #[test]
    fn date_with_time() {
        assert_eq!(
            split_epic_date("2019-05-30 00:31:00").unwrap(),
            ("2019", "05", "30")
        );
    }

    #[test]
    fn date_without_time() {
        assert_eq!(split_epic_date("2015-10-31").unwrap(), ("2015", "10", "31"));
    }

    #[test]
    fn date_is_not_validated() {
        assert_eq!(split_epic_date("2015-99-77").unwrap(), ("2015", "99", "77"));
    }

    #[test]
    fn short_date_is_an_error() {
        assert!(matches!(
            split_epic_date("20151031"),
            Err(EpicError::Unexpected(_))
        ));
        assert!(split_epic_date("2015-10").is_err());
    }

    #[test]
    fn builds_archive_url() {
        let image = EpicImage {
            image: "epic_1b_20190530003633".into(),
            date: "2019-05-30 00:31:00".into(),
            caption: None,
        };

        assert_eq!(
            archive_url(EPIC_ARCHIVE_BASE, ImageType::Enhanced, &image).unwrap(),
            "https://epic.gsfc.nasa.gov/archive/enhanced/2019/05/30/png/epic_1b_20190530003633.png"
        );
    }
}
