//! Simulation output and serialization

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::aggregate::simulation::RunSummary;
use crate::aggregate::stats::{mean, pearson};
use crate::core::config::SimulationConfig;
use crate::core::error::Result;

/// Complete simulation output
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub config: SimulationConfig,
    pub seed: u64,
    pub table: ResultTable,
    pub statistics: SimulationStats,
}

/// One row of the result table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "E")]
    pub expected: f64,
    #[serde(rename = "E_state")]
    pub expected_state: f64,
    /// Half the summed county unevenness (dissimilarity scale)
    pub unevenness: f64,
    pub j: usize,
    pub logan_parman: Option<f64>,
    /// `E_state - E`
    pub difference: f64,
}

impl From<&RunSummary> for ResultRow {
    fn from(run: &RunSummary) -> Self {
        Self {
            expected: run.expected,
            expected_state: run.expected_state,
            unevenness: run.unevenness * 0.5,
            j: run.counties,
            logan_parman: run.logan_parman,
            difference: run.expected_state - run.expected,
        }
    }
}

impl ResultRow {
    /// Rows with an index strictly inside (0, 1) are the ones worth plotting
    pub fn is_plottable(&self) -> bool {
        matches!(self.logan_parman, Some(lp) if lp > 0.0 && lp < 1.0)
    }
}

/// Ordered result table, one row per iteration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultTable {
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn from_runs(runs: &[RunSummary]) -> Self {
        Self { rows: runs.iter().map(ResultRow::from).collect() }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResultRow> {
        self.rows.iter()
    }

    pub fn plottable(&self) -> impl Iterator<Item = &ResultRow> {
        self.rows.iter().filter(|r| r.is_plottable())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub iterations: usize,
    pub simulation_time_ms: u64,
    pub mean_expected: Option<f64>,
    pub mean_expected_state: Option<f64>,
    pub mean_unevenness: Option<f64>,
    pub mean_counties: Option<f64>,
    pub mean_logan_parman: Option<f64>,
    pub mean_difference: Option<f64>,
    pub plottable_rows: usize,
    /// Correlation of unevenness with the index over plottable rows
    pub unevenness_index_correlation: Option<f64>,
    /// Correlation of the index with `E_state` over plottable rows
    pub index_state_correlation: Option<f64>,
}

impl SimulationStats {
    pub fn from_table(table: &ResultTable, elapsed: Duration) -> Self {
        let column = |f: fn(&ResultRow) -> f64| -> Vec<f64> { table.iter().map(f).collect() };
        let indices: Vec<f64> = table.iter().filter_map(|r| r.logan_parman).collect();

        let plottable: Vec<&ResultRow> = table.plottable().collect();
        let plot_unevenness: Vec<f64> = plottable.iter().map(|r| r.unevenness).collect();
        let plot_state: Vec<f64> = plottable.iter().map(|r| r.expected_state).collect();
        let plot_index: Vec<f64> = plottable.iter().filter_map(|r| r.logan_parman).collect();

        Self {
            iterations: table.len(),
            simulation_time_ms: elapsed.as_millis() as u64,
            mean_expected: mean(&column(|r| r.expected)),
            mean_expected_state: mean(&column(|r| r.expected_state)),
            mean_unevenness: mean(&column(|r| r.unevenness)),
            mean_counties: mean(&column(|r| r.j as f64)),
            mean_logan_parman: mean(&indices),
            mean_difference: mean(&column(|r| r.difference)),
            plottable_rows: plottable.len(),
            unevenness_index_correlation: pearson(&plot_unevenness, &plot_index),
            index_state_correlation: pearson(&plot_index, &plot_state),
        }
    }
}

impl SimulationOutput {
    pub fn new(
        config: SimulationConfig,
        seed: u64,
        runs: &[RunSummary],
        elapsed: Duration,
    ) -> Self {
        let table = ResultTable::from_runs(runs);
        let statistics = SimulationStats::from_table(&table, elapsed);
        Self { config, seed, table, statistics }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self)?)
    }

    pub fn summary(&self) -> String {
        let stats = &self.statistics;
        format!(
            "Simulated {} {} states of {} in {}ms (seed {})\n\
             mean E {}, mean E_state {}, mean difference {}\n\
             mean unevenness {}, mean counties {}, mean Logan-Parman {}\n\
             {} plottable rows; corr(unevenness, index) {}, corr(index, E_state) {}",
            stats.iterations,
            self.config.policy,
            self.config.population,
            stats.simulation_time_ms,
            self.seed,
            fmt_opt(stats.mean_expected),
            fmt_opt(stats.mean_expected_state),
            fmt_opt(stats.mean_difference),
            fmt_opt(stats.mean_unevenness),
            fmt_opt(stats.mean_counties),
            fmt_opt(stats.mean_logan_parman),
            stats.plottable_rows,
            fmt_opt(stats.unevenness_index_correlation),
            fmt_opt(stats.index_state_correlation),
        )
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.4}", v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(expected: f64, expected_state: f64, unevenness: f64, lp: Option<f64>) -> RunSummary {
        RunSummary {
            expected,
            expected_state,
            unevenness,
            counties: 20,
            logan_parman: lp,
        }
    }

    #[test]
    fn test_row_transform() {
        let row = ResultRow::from(&run(900.0, 1000.0, 0.4, Some(0.5)));
        assert_eq!(row.unevenness, 0.2);
        assert_eq!(row.difference, 100.0);
        assert_eq!(row.j, 20);
    }

    #[test]
    fn test_plottable_filter_is_strict() {
        let runs = vec![
            run(0.0, 0.0, 0.0, Some(0.0)),
            run(0.0, 0.0, 0.0, Some(0.5)),
            run(0.0, 0.0, 0.0, Some(1.0)),
            run(0.0, 0.0, 0.0, Some(-0.3)),
            run(0.0, 0.0, 0.0, None),
        ];
        let table = ResultTable::from_runs(&runs);
        assert_eq!(table.len(), 5);
        assert_eq!(table.plottable().count(), 1);
    }

    #[test]
    fn test_stats_skip_missing_index() {
        let runs = vec![run(1.0, 3.0, 0.2, Some(0.2)), run(3.0, 5.0, 0.6, None)];
        let table = ResultTable::from_runs(&runs);
        let stats = SimulationStats::from_table(&table, Duration::from_millis(12));
        assert_eq!(stats.iterations, 2);
        assert_eq!(stats.simulation_time_ms, 12);
        assert_eq!(stats.mean_expected, Some(2.0));
        assert_eq!(stats.mean_difference, Some(2.0));
        assert_eq!(stats.mean_logan_parman, Some(0.2));
        assert_eq!(stats.plottable_rows, 1);
        assert_eq!(stats.unevenness_index_correlation, None);
    }

    #[test]
    fn test_json_uses_table_column_names() {
        let runs = vec![run(1.0, 2.0, 0.2, None)];
        let output = SimulationOutput::new(SimulationConfig::default(), 7, &runs, Duration::ZERO);
        let json = output.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let row = &value["table"][0];
        for key in ["E", "E_state", "unevenness", "j", "logan_parman", "difference"] {
            assert!(row.get(key).is_some(), "missing column {}", key);
        }
        assert!(row["logan_parman"].is_null());
        assert_eq!(value["seed"], 7);
    }

    #[test]
    fn test_summary_mentions_policy_and_seed() {
        let output = SimulationOutput::new(SimulationConfig::default(), 42, &[], Duration::ZERO);
        let summary = output.summary();
        assert!(summary.contains("centered"));
        assert!(summary.contains("seed 42"));
        assert!(summary.contains("n/a"));
    }
}
