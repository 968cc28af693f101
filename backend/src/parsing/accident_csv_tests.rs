#[cfg(test)]
mod tests {
    use crate::error::DatasetError;
    use crate::parsing::accident_csv::{dataframe_to_records, parse_accident_csv_bytes};
    use chrono::NaiveDate;

    const HEADER: &str = "OBJECTID,ACCIDENT_DATE,ACCIDENT_TIME,ACCIDENT_TYPE,DAY_OF_WEEK,LIGHT_CONDITION,ALCOHOL_RELATED,TOTAL_PERSONS";

    fn csv(rows: &[&str]) -> Vec<u8> {
        let mut content = String::from(HEADER);
        for row in rows {
            content.push('\n');
            content.push_str(row);
        }
        content.push('\n');
        content.into_bytes()
    }

    fn parse(rows: &[&str]) -> Result<crate::parsing::ParsedAccidents, DatasetError> {
        let df = parse_accident_csv_bytes(csv(rows))?;
        dataframe_to_records(&df)
    }

    /// Test parsing the two-row example dataset
    #[test]
    fn test_parse_basic_rows() {
        let parsed = parse(&[
            "1,2014-05-01,08.00.00,COLLISION,Thursday,DAY,NO,2",
            "2,2014-05-02,20.00.00,COLLISION,Friday,DARK,YES,3",
        ])
        .unwrap();

        assert_eq!(parsed.records.len(), 2);
        let first = &parsed.records[0];
        assert_eq!(first.accident_id(), "1");
        assert_eq!(
            first.accident_date(),
            NaiveDate::from_ymd_opt(2014, 5, 1).unwrap()
        );
        assert_eq!(first.hour(), 8);
        assert_eq!(first.day_of_week(), 3);
        assert_eq!(first.total_persons(), 2);
        assert_eq!(parsed.records[1].hour(), 20);
        assert_eq!(parsed.records[1].day_of_week(), 4);
    }

    /// Test that categorical domains keep first-seen order
    #[test]
    fn test_domains_discovered_in_order() {
        let parsed = parse(&[
            "1,2014-05-01,08.00.00,Struck pedestrian,Thursday,Dusk/Dawn,No,1",
            "2,2014-05-01,09.00.00,Collision with vehicle,Thursday,Day,No,2",
            "3,2014-05-01,10.00.00,Struck pedestrian,Thursday,Day,Yes,1",
        ])
        .unwrap();

        assert_eq!(
            parsed.accident_types.to_strings(),
            vec!["Struck pedestrian", "Collision with vehicle"]
        );
        assert_eq!(parsed.light_conditions.to_strings(), vec!["Dusk/Dawn", "Day"]);
        assert_eq!(parsed.alcohol_values.to_strings(), vec!["No", "Yes"]);
    }

    /// Test that quoted categorical values with commas survive
    #[test]
    fn test_quoted_values() {
        let parsed = parse(&[
            "1,2014-05-01,08.00.00,\"Collision, fixed object\",Thursday,Day,No,1",
        ])
        .unwrap();
        assert_eq!(
            parsed.records[0].accident_type().as_str(),
            "Collision, fixed object"
        );
    }

    /// Test that numeric-looking ids stay strings
    #[test]
    fn test_object_id_kept_verbatim() {
        let parsed = parse(&["000123,2014-05-01,08.00.00,X,Thursday,Day,No,1"]).unwrap();
        assert_eq!(parsed.records[0].accident_id(), "000123");
    }

    /// Test the load fails on an unparseable time and reports the row
    #[test]
    fn test_invalid_time_fails_load() {
        let err = parse(&[
            "1,2014-05-01,08.00.00,X,Thursday,Day,No,1",
            "2,2014-05-01,8:00,X,Thursday,Day,No,1",
        ])
        .unwrap_err();

        match err {
            DatasetError::InvalidTime { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "8:00");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    /// Test the load fails on an unparseable date
    #[test]
    fn test_invalid_date_fails_load() {
        let err = parse(&["1,2014-02-30,08.00.00,X,Thursday,Day,No,1"]).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidDate { row: 1, .. }));
    }

    /// Test a two-digit year fails the load instead of landing in year 1
    #[test]
    fn test_two_digit_year_fails_load() {
        let err = parse(&[
            "1,2014-05-01,08.00.00,X,Thursday,Day,No,1",
            "2,01/07/13,08.00.00,X,Monday,Day,No,1",
        ])
        .unwrap_err();
        match err {
            DatasetError::InvalidDate { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "01/07/13");
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    /// Test negative or fractional person counts are rejected
    #[test]
    fn test_invalid_persons_fails_load() {
        let err = parse(&["1,2014-05-01,08.00.00,X,Thursday,Day,No,-1"]).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidPersons { row: 1, .. }));

        let err = parse(&["1,2014-05-01,08.00.00,X,Thursday,Day,No,1.5"]).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidPersons { .. }));
    }

    /// Test an empty required cell is a load failure
    #[test]
    fn test_missing_cell_fails_load() {
        let err = parse(&["1,2014-05-01,08.00.00,,Thursday,Day,No,1"]).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingValue {
                column: "ACCIDENT_TYPE",
                row: 1
            }
        ));
    }

    /// Test a header without a required column is rejected
    #[test]
    fn test_missing_column() {
        let bytes = b"OBJECTID,ACCIDENT_DATE\n1,2014-05-01\n".to_vec();
        let err = parse_accident_csv_bytes(bytes).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn(_)));
    }

    /// Test a header-only file is rejected as empty
    #[test]
    fn test_header_only_is_empty() {
        let err = parse_accident_csv_bytes(csv(&[])).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    /// Test extra columns are kept in the frame
    #[test]
    fn test_extra_columns_preserved() {
        let df = parse_accident_csv_bytes(csv(&["1,2014-05-01,08.00.00,X,Thursday,Day,No,1"]))
            .unwrap();
        assert!(df
            .get_column_names()
            .iter()
            .any(|c| c.as_str() == "DAY_OF_WEEK"));
        assert_eq!(df.width(), 8);
    }
}
