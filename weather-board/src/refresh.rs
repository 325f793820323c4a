//! 后台任务：搜索防抖与定时刷新
//!
//! 两类任务都在句柄被 drop 时终止。

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{RwLock, watch};
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval, sleep};
use tracing::{debug, warn};

use crate::client::WeatherSource;
use crate::types::{Forecast, Location};

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
pub const REFRESH_PERIOD: Duration = Duration::from_secs(3 * 60);

/// 按城市 id 保存的最新预报
pub type ForecastState = Arc<RwLock<HashMap<String, Forecast>>>;

/// 搜索框防抖：输入停止 `delay` 后才发起地理编码，只处理最后一次输入
pub struct SearchDebouncer {
    input: watch::Sender<String>,
    task: JoinHandle<()>,
}

impl SearchDebouncer {
    /// 返回句柄与结果接收端
    pub fn spawn<S>(source: Arc<S>, delay: Duration) -> (Self, watch::Receiver<Vec<Location>>)
    where
        S: WeatherSource + ?Sized + 'static,
    {
        let (input, mut input_rx) = watch::channel(String::new());
        let (results_tx, results_rx) = watch::channel(Vec::new());

        let task = tokio::spawn(async move {
            // 等待第一次输入
            while input_rx.changed().await.is_ok() {
                // 静默期内有新输入就重新计时
                loop {
                    tokio::select! {
                        _ = sleep(delay) => break,
                        changed = input_rx.changed() => {
                            if changed.is_err() {
                                return;
                            }
                        }
                    }
                }

                let query = input_rx.borrow_and_update().clone();
                match source.search(&query).await {
                    Ok(results) => {
                        debug!("Search '{}' settled with {} results", query, results.len());
                        if results_tx.send(results).is_err() {
                            return;
                        }
                    }
                    Err(e) => warn!("Location search for '{}' failed: {}", query, e),
                }
            }
        });

        (Self { input, task }, results_rx)
    }

    pub fn input(&self, query: impl Into<String>) {
        self.input.send_replace(query.into());
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// 立即获取一次预报；失败时保留旧数据
pub async fn refresh_once<S>(source: &S, state: &ForecastState, location: &Location) -> bool
where
    S: WeatherSource + ?Sized,
{
    match source.forecast(location.lat, location.lon).await {
        Ok(forecast) => {
            state.write().await.insert(location.id.clone(), forecast);
            debug!("Forecast refreshed for {}", location.name);
            true
        }
        Err(e) => {
            warn!("Forecast refresh for {} failed: {}", location.name, e);
            false
        }
    }
}

/// 当前城市的定时刷新：启动时立即拉取一次，之后每个周期一次
pub struct ForecastRefresher<S: WeatherSource + ?Sized + 'static> {
    source: Arc<S>,
    state: ForecastState,
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl<S: WeatherSource + ?Sized + 'static> ForecastRefresher<S> {
    pub fn new(source: Arc<S>, period: Duration) -> Self {
        Self {
            source,
            state: ForecastState::default(),
            period,
            task: None,
        }
    }

    pub fn state(&self) -> ForecastState {
        self.state.clone()
    }

    pub async fn forecast_for(&self, id: &str) -> Option<Forecast> {
        self.state.read().await.get(id).cloned()
    }

    /// 切换刷新的城市，旧任务被取消；None 表示停止刷新
    pub fn track(&mut self, location: Option<Location>) {
        self.stop();
        let Some(location) = location else {
            return;
        };

        let source = self.source.clone();
        let state = self.state.clone();
        let period = self.period;
        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                refresh_once(source.as_ref(), &state, &location).await;
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl<S: WeatherSource + ?Sized + 'static> Drop for ForecastRefresher<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
