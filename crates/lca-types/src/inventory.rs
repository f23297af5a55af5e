//! Life cycle inventory table
//!
//! The table has a fixed shape: one row per [`LifeCycleStage`] and one
//! numeric column per [`Metric`]. Shape is enforced by the type, so a table
//! can never be missing a stage or a metric.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Header of the label column
pub const STAGE_COLUMN: &str = "Life Cycle Stage";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeCycleStage {
    Materials,
    Manufacturing,
    UsePhase,
    EndOfLife,
}

impl LifeCycleStage {
    /// All stages in table order
    pub const ALL: [LifeCycleStage; 4] = [
        LifeCycleStage::Materials,
        LifeCycleStage::Manufacturing,
        LifeCycleStage::UsePhase,
        LifeCycleStage::EndOfLife,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LifeCycleStage::Materials => "Materials",
            LifeCycleStage::Manufacturing => "Manufacturing",
            LifeCycleStage::UsePhase => "Use Phase",
            LifeCycleStage::EndOfLife => "End-of-Life",
        }
    }

    fn index(&self) -> usize {
        match self {
            LifeCycleStage::Materials => 0,
            LifeCycleStage::Manufacturing => 1,
            LifeCycleStage::UsePhase => 2,
            LifeCycleStage::EndOfLife => 3,
        }
    }
}

impl fmt::Display for LifeCycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Numeric inventory metric (one table column each)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    EnergyUse,
    GhgEmissions,
    WaterUse,
}

impl Metric {
    /// All metrics in column order
    pub const ALL: [Metric; 3] = [Metric::EnergyUse, Metric::GhgEmissions, Metric::WaterUse];

    /// Column header, including the unit
    pub fn label(&self) -> &'static str {
        match self {
            Metric::EnergyUse => "Energy Use (MJ)",
            Metric::GhgEmissions => "GHG Emissions (kg CO2-eq)",
            Metric::WaterUse => "Water Use (L)",
        }
    }

    /// Label with spaces replaced by underscores, e.g. `Water_Use_(L)`
    pub fn file_stem(&self) -> String {
        self.label().replace(' ', "_")
    }

    /// File name of the chart rendered for this metric
    pub fn chart_file_name(&self) -> String {
        format!("{}.png", self.file_stem())
    }

    /// Inclusive range a stage's value is sampled from
    pub fn range_for(&self, stage: LifeCycleStage) -> RangeInclusive<f64> {
        use LifeCycleStage::*;

        match (self, stage) {
            (Metric::EnergyUse, Materials) => 80.0..=120.0,
            (Metric::EnergyUse, Manufacturing) => 50.0..=100.0,
            (Metric::EnergyUse, UsePhase) => 10.0..=20.0,
            (Metric::EnergyUse, EndOfLife) => 15.0..=30.0,
            (Metric::GhgEmissions, Materials) => 5.0..=10.0,
            (Metric::GhgEmissions, Manufacturing) => 8.0..=12.0,
            (Metric::GhgEmissions, UsePhase) => 1.0..=3.0,
            (Metric::GhgEmissions, EndOfLife) => 2.0..=4.0,
            (Metric::WaterUse, Materials) => 20.0..=40.0,
            (Metric::WaterUse, Manufacturing) => 10.0..=30.0,
            (Metric::WaterUse, UsePhase) => 1.0..=5.0,
            (Metric::WaterUse, EndOfLife) => 5.0..=15.0,
        }
    }

    fn index(&self) -> usize {
        match self {
            Metric::EnergyUse => 0,
            Metric::GhgEmissions => 1,
            Metric::WaterUse => 2,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inventory values indexed by stage (rows) and metric (columns)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryTable {
    values: [[f64; 3]; 4],
}

impl InventoryTable {
    /// Build a table by evaluating `cell` once per (stage, metric) pair,
    /// row by row in table order.
    pub fn from_fn(mut cell: impl FnMut(LifeCycleStage, Metric) -> f64) -> Self {
        let mut values = [[0.0; 3]; 4];
        for stage in LifeCycleStage::ALL {
            for metric in Metric::ALL {
                values[stage.index()][metric.index()] = cell(stage, metric);
            }
        }
        Self { values }
    }

    pub fn value(&self, stage: LifeCycleStage, metric: Metric) -> f64 {
        self.values[stage.index()][metric.index()]
    }

    /// Values of one metric column, in stage order
    pub fn column(&self, metric: Metric) -> Vec<f64> {
        LifeCycleStage::ALL
            .iter()
            .map(|stage| self.value(*stage, metric))
            .collect()
    }

    /// Rows in stage order, values in metric order
    pub fn rows(&self) -> impl Iterator<Item = (LifeCycleStage, [f64; 3])> + '_ {
        LifeCycleStage::ALL
            .into_iter()
            .map(|stage| (stage, self.values[stage.index()]))
    }

    /// Header row: the label column followed by every metric label
    pub fn header() -> Vec<&'static str> {
        std::iter::once(STAGE_COLUMN)
            .chain(Metric::ALL.iter().map(|m| m.label()))
            .collect()
    }

    pub fn row_count(&self) -> usize {
        self.values.len()
    }

    pub fn metric_count(&self) -> usize {
        Metric::ALL.len()
    }
}
