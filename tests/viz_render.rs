use cpi_rs::models::NormalizedSeries;
use cpi_rs::viz;
use std::fs;
use tempfile::tempdir;

fn sample_series() -> NormalizedSeries {
    NormalizedSeries {
        series_id: vec!["CUUR0000SA0".into()],
        periods: vec![
            "2020 January".into(),
            "2020 February".into(),
            "2020 March".into(),
        ],
        values: vec![257.9, 258.7, 258.1],
    }
}

#[test]
fn svg_render_produces_a_nonempty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cpi.svg");
    viz::plot_series(&sample_series(), &path, 800, 480).unwrap();
    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "svg has content");
}

#[test]
fn png_render_produces_a_nonempty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cpi.png");
    viz::plot_series(&sample_series(), &path, 800, 480).unwrap();
    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "png has content");
}

#[test]
fn empty_series_is_an_error() {
    let series = NormalizedSeries {
        series_id: vec![],
        periods: vec![],
        values: vec![],
    };
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.svg");
    assert!(viz::plot_series(&series, &path, 800, 480).is_err());
    assert!(!path.exists());
}

#[test]
fn misaligned_series_is_an_error() {
    let mut series = sample_series();
    series.periods.pop();
    let dir = tempdir().unwrap();
    let path = dir.path().join("misaligned.svg");
    assert!(viz::plot_series(&series, &path, 800, 480).is_err());
}

#[test]
fn single_observation_still_renders() {
    let series = NormalizedSeries {
        series_id: vec!["CUUR0000SA0".into()],
        periods: vec!["2020 January".into()],
        values: vec![257.9],
    };
    let dir = tempdir().unwrap();
    let path = dir.path().join("one.svg");
    viz::plot_series(&series, &path, 800, 480).unwrap();
    assert!(fs::metadata(&path).unwrap().len() > 0);
}
