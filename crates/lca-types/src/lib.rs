pub mod inventory;
pub mod narrative;

pub use inventory::{InventoryTable, LifeCycleStage, Metric, STAGE_COLUMN};
pub use narrative::{NarrativeSection, NarrativeSections};
