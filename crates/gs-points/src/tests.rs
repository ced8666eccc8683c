//! Unit tests for the point-feed loader.

#[cfg(test)]
mod feed_tests {
    use std::io::Cursor;

    use crate::{load_points_reader, positions, PointsError};

    const FEED: &str = r#"[
        { "id": 8231, "title": "Clock Tower", "latlng": [35.011, 135.768] },
        { "id": 8240, "title": "Fountain",    "latlng": [35.012, 135.770] }
    ]"#;

    #[test]
    fn parses_minimal_feed() {
        let records = load_points_reader(Cursor::new(FEED)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 8231);
        assert_eq!(records[0].title, "Clock Tower");
        assert_eq!(records[1].latlng, [35.012, 135.770]);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let feed = r#"[
            { "id": 1, "title": "A", "latlng": [35.0, 135.0],
              "image": "http://example/a.jpg", "country": "JP",
              "created_at": "2014/12/01 09:30" }
        ]"#;
        let records = load_points_reader(Cursor::new(feed)).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn empty_feed_is_not_an_error_here() {
        // The scanner rejects empty point sets; the loader just reports
        // what the feed said.
        let records = load_points_reader(Cursor::new("[]")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = load_points_reader(Cursor::new("[{ broken"));
        assert!(matches!(result, Err(PointsError::Parse(_))));
    }

    #[test]
    fn missing_latlng_is_a_parse_error() {
        let result = load_points_reader(Cursor::new(r#"[{ "id": 1, "title": "A" }]"#));
        assert!(matches!(result, Err(PointsError::Parse(_))));
    }

    #[test]
    fn positions_preserve_feed_order_and_normalize() {
        let feed = r#"[
            { "id": 1, "title": "A", "latlng": [35.0, 135.0] },
            { "id": 2, "title": "B", "latlng": [36.0, 190.0] }
        ]"#;
        let records = load_points_reader(Cursor::new(feed)).unwrap();
        let points = positions(&records);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].lat, 35.0);
        // Out-of-range longitude wraps into [-180, 180).
        assert_eq!(points[1].lon, -170.0);
    }
}
