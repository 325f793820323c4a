//! 防抖搜索与定时刷新，使用暂停的 tokio 时钟

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use weather_board::refresh::{REFRESH_PERIOD, SEARCH_DEBOUNCE};
use weather_board::{
    CurrentConditions, Forecast, ForecastRefresher, Location, SearchDebouncer, WeatherError,
    WeatherSource,
};

#[derive(Default)]
struct FakeSource {
    queries: Mutex<Vec<String>>,
    forecasts: AtomicUsize,
    fail_after: Option<usize>,
}

#[async_trait]
impl WeatherSource for FakeSource {
    async fn search(&self, query: &str) -> weather_board::Result<Vec<Location>> {
        self.queries.lock().unwrap().push(query.to_string());
        if query.chars().count() < 2 {
            return Ok(Vec::new());
        }
        Ok(vec![Location::new(format!("{query}, Testland"), 1.0, 2.0)])
    }

    async fn forecast(&self, _lat: f64, _lon: f64) -> weather_board::Result<Forecast> {
        let n = self.forecasts.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_after.is_some_and(|limit| n > limit) {
            return Err(WeatherError::Status(500));
        }
        Ok(Forecast {
            current: Some(CurrentConditions {
                temperature_2m: Some(n as f64),
                ..Default::default()
            }),
            ..Default::default()
        })
    }
}

#[tokio::test(start_paused = true)]
async fn debouncer_only_searches_latest_input() {
    let source = Arc::new(FakeSource::default());
    let (debouncer, mut results) = SearchDebouncer::spawn(source.clone(), SEARCH_DEBOUNCE);

    debouncer.input("Lo");
    tokio::time::sleep(Duration::from_millis(100)).await;
    debouncer.input("Lon");
    tokio::time::sleep(Duration::from_millis(100)).await;
    debouncer.input("London");

    results.changed().await.unwrap();
    let latest = results.borrow().clone();
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].name, "London, Testland");
    assert_eq!(*source.queries.lock().unwrap(), vec!["London".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn debouncer_waits_for_quiet_period() {
    let source = Arc::new(FakeSource::default());
    let (debouncer, _results) = SearchDebouncer::spawn(source.clone(), SEARCH_DEBOUNCE);

    debouncer.input("Paris");
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(source.queries.lock().unwrap().is_empty());

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(source.queries.lock().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn refresher_fetches_immediately_then_periodically() {
    let source = Arc::new(FakeSource::default());
    let mut refresher = ForecastRefresher::new(source.clone(), REFRESH_PERIOD);
    let london = Location::london();

    refresher.track(Some(london.clone()));
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(source.forecasts.load(Ordering::SeqCst), 1);
    assert!(refresher.forecast_for(&london.id).await.is_some());

    tokio::time::sleep(REFRESH_PERIOD).await;
    assert_eq!(source.forecasts.load(Ordering::SeqCst), 2);

    refresher.track(None);
    tokio::time::sleep(REFRESH_PERIOD * 3).await;
    assert_eq!(source.forecasts.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn refresher_keeps_previous_forecast_on_failure() {
    let source = Arc::new(FakeSource {
        fail_after: Some(1),
        ..Default::default()
    });
    let mut refresher = ForecastRefresher::new(source.clone(), REFRESH_PERIOD);
    let london = Location::london();

    refresher.track(Some(london.clone()));
    tokio::time::sleep(Duration::from_secs(1) + REFRESH_PERIOD).await;
    assert_eq!(source.forecasts.load(Ordering::SeqCst), 2);

    let kept = refresher.forecast_for(&london.id).await.unwrap();
    assert_eq!(kept.current.unwrap().temperature_2m, Some(1.0));
}
