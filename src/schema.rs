use schemars::{schema::RootSchema, schema_for};

use crate::{BettingState, SideBetState, SplitHandsState, TableConfig};

/// JSON schemas for every snapshot the UI reads and for the table config,
/// keyed by the name the front end generates its types under.
pub fn schemas() -> Vec<(&'static str, RootSchema)> {
    vec![
        ("BettingState", schema_for!(BettingState)),
        ("SideBetState", schema_for!(SideBetState)),
        ("SplitHandsState", schema_for!(SplitHandsState)),
        ("TableConfig", schema_for!(TableConfig)),
    ]
}
