use {
    crate::bid::service::Service as BidService,
    axum_prometheus::metrics_exporter_prometheus::PrometheusHandle,
};

pub struct Store {
    pub bid_service:      BidService,
    pub metrics_recorder: PrometheusHandle,
}
