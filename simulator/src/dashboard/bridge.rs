use crate::dashboard::model::ReportModel;
use crate::workflow::config::ReportConfig;
use crate::workflow::runner::Runner;
use anyhow::Result;
use coastcore::telemetry::RunMetrics;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn dashboard_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9400))
}

#[derive(Debug)]
struct ReportRejection;

impl warp::reject::Reject for ReportRejection {}

/// Bridge that hosts the report HTTP endpoint and regenerates on request.
pub struct DashboardBridge {
    state: Arc<RwLock<ReportModel>>,
    metrics: Arc<RunMetrics>,
}

impl DashboardBridge {
    pub fn new() -> Self {
        let state = Arc::new(RwLock::new(ReportModel::default()));
        let metrics = Arc::new(RunMetrics::new());
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let metrics_for_filter = metrics.clone();
        let metrics_filter = warp::any().map(move || metrics_for_filter.clone());

        let get_route = warp::path("report")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<ReportModel>>| warp::reply::json(&*state.read().unwrap()));

        let regenerate_route = warp::path("report-config")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and(metrics_filter)
            .and_then(
                |config: ReportConfig,
                 state: Arc<RwLock<ReportModel>>,
                 metrics: Arc<RunMetrics>| async move {
                    let runner = Runner::new(config.clone());
                    match runner
                        .execute()
                        .and_then(|result| ReportModel::from_result(&config, &result))
                    {
                        Ok(model) => {
                            let samples = model.water_quality.len();
                            let mut guard = state.write().unwrap();
                            *guard = model;
                            metrics.record_report(samples);
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "ok",
                                    "samples": samples,
                                    "site": config.site.name.clone(),
                                })),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            metrics.record_failure();
                            eprintln!("report-config error: {}", err);
                            Err(warp::reject::custom(ReportRejection))
                        }
                    }
                },
            );

        thread::spawn(move || {
            let routes = get_route.or(regenerate_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(dashboard_bind_address()).await;
            });
        });

        Self { state, metrics }
    }

    pub fn publish(&self, model: &ReportModel) -> Result<()> {
        let mut guard = self.state.write().unwrap();
        *guard = model.clone();
        self.metrics.record_report(guard.water_quality.len());
        println!(
            "[DASHBOARD] water-quality samples: {}, depths: {}",
            guard.water_quality.len(),
            guard.depth_labels.len()
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[DASHBOARD] {}", message);
    }

    pub fn metrics(&self) -> Arc<RunMetrics> {
        self.metrics.clone()
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> ReportModel {
        self.state.read().unwrap().clone()
    }
}
