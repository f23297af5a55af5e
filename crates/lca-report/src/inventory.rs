//! Randomized life cycle inventory

use lca_types::InventoryTable;
use rand::Rng;

/// Generate a fresh inventory table from the thread RNG
pub fn generate_inventory() -> InventoryTable {
    generate_inventory_with(&mut rand::thread_rng())
}

/// Generate an inventory table, sampling every cell uniformly from its
/// metric's range for that stage
pub fn generate_inventory_with<R: Rng>(rng: &mut R) -> InventoryTable {
    InventoryTable::from_fn(|stage, metric| rng.gen_range(metric.range_for(stage)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lca_types::{LifeCycleStage, Metric};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    proptest! {
        #[test]
        fn every_value_within_its_range(seed in any::<u64>()) {
            let table = generate_inventory_with(&mut StdRng::seed_from_u64(seed));

            prop_assert_eq!(table.row_count(), 4);
            prop_assert_eq!(table.metric_count(), 3);
            for (stage, values) in table.rows() {
                for (metric, value) in Metric::ALL.iter().zip(values) {
                    let range = metric.range_for(stage);
                    prop_assert!(
                        range.contains(&value),
                        "{} / {} = {} outside {:?}", stage, metric, value, range
                    );
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_table() {
        let a = generate_inventory_with(&mut StdRng::seed_from_u64(7));
        let b = generate_inventory_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_thread_rng_table_in_range() {
        let table = generate_inventory();
        let energy = table.value(LifeCycleStage::Materials, Metric::EnergyUse);
        assert!((80.0..=120.0).contains(&energy));
    }
}
