use cpi_rs::models::ApiResponse;

#[test]
fn parse_sample_json() {
    let sample = r#"
    {
      "status": "REQUEST_SUCCEEDED",
      "responseTime": 150,
      "message": [],
      "Results": {
        "series": [
          {
            "seriesID": "CUUR0000SA0",
            "data": [
              {"year": "2020", "period": "M02", "periodName": "February", "value": "260.5", "footnotes": [{}]},
              {"year": "2020", "period": "M01", "periodName": "January", "value": "258.7", "footnotes": [{}]}
            ]
          }
        ]
      }
    }
    "#;

    let payload: ApiResponse = serde_json::from_str(sample).unwrap();
    assert_eq!(payload.status, "REQUEST_SUCCEEDED");
    assert!(payload.message.is_empty());
    assert_eq!(payload.results.series.len(), 1);

    let record = &payload.results.series[0];
    assert_eq!(record.series_id.as_deref(), Some("CUUR0000SA0"));
    let data = record.data.as_ref().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0].year.as_deref(), Some("2020"));
    assert_eq!(data[0].period_name.as_deref(), Some("February"));
    assert_eq!(data[0].value.as_deref(), Some("260.5"));
}

#[test]
fn message_accepts_array_or_single_string() {
    // message as array of strings (live API shape)
    let p: ApiResponse = serde_json::from_str(
        r#"{"status":"REQUEST_SUCCEEDED","message":["Series does not exist for Series BADID"],"Results":{"series":[]}}"#,
    )
    .unwrap();
    assert_eq!(p.message.len(), 1);
    assert!(p.message[0].contains("BADID"));

    // message as a single string (older captures)
    let p: ApiResponse = serde_json::from_str(
        r#"{"status":"REQUEST_NOT_PROCESSED","message":"try again later","Results":{"series":[]}}"#,
    )
    .unwrap();
    assert_eq!(p.message, vec!["try again later".to_string()]);
}

#[test]
fn absent_fields_default_instead_of_failing() {
    // An error body frequently omits Results entirely.
    let p: ApiResponse =
        serde_json::from_str(r#"{"status":"REQUEST_NOT_PROCESSED","message":[]}"#).unwrap();
    assert!(p.results.series.is_empty());

    // Even an empty object decodes; gaps surface during normalization.
    let p: ApiResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(p.status, "");
    assert!(p.message.is_empty());
    assert!(p.results.series.is_empty());
}

#[test]
fn garbage_body_is_not_valid_json() {
    let r: Result<ApiResponse, _> = serde_json::from_str("<html>502 Bad Gateway</html>");
    assert!(r.is_err());
}
