use routeboard::{
    schedule::{Metric, Summary},
    shared::time::format_minutes,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricDto {
    pub total: f64,
    pub average: Option<f64>,
    pub counted: usize,
}

impl MetricDto {
    pub fn from(metric: &Metric) -> Self {
        Self {
            total: metric.sum,
            average: metric.average(),
            counted: metric.count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryDto {
    pub rows: usize,
    pub drivers: usize,
    pub tasks: MetricDto,
    pub order_value: MetricDto,
    pub punctuality: MetricDto,
    pub duration: MetricDto,
    pub total_duration: String,
    pub average_duration: String,
}

impl SummaryDto {
    pub fn from(summary: &Summary) -> Self {
        let total_duration = (summary.duration.count > 0).then_some(summary.duration.sum as i32);
        let average_duration = summary.duration.average().map(|avg| avg.round() as i32);
        Self {
            rows: summary.rows,
            drivers: summary.drivers,
            tasks: MetricDto::from(&summary.tasks),
            order_value: MetricDto::from(&summary.order_value),
            punctuality: MetricDto::from(&summary.punctuality),
            duration: MetricDto::from(&summary.duration),
            total_duration: format_minutes(total_duration),
            average_duration: format_minutes(average_duration),
        }
    }
}
