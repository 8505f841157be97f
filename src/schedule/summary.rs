use std::collections::{BTreeSet, HashSet};

use serde::{Serialize, ser::SerializeStruct};

use crate::{
    calendar,
    shared::parse_number,
    store::{Side, Trip},
};

/// Running sum of one column. Rows where the column did not parse are left
/// out of both the sum and the count.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Metric {
    pub sum: f64,
    pub count: usize,
}

impl Metric {
    pub fn push(&mut self, value: Option<f64>) {
        if let Some(value) = value {
            self.sum += value;
            self.count += 1;
        }
    }

    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

impl Serialize for Metric {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Metric", 3)?;
        state.serialize_field("sum", &self.sum)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("average", &self.average())?;
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub rows: usize,
    pub drivers: usize,
    pub tasks: Metric,
    pub order_value: Metric,
    pub punctuality: Metric,
    /// Minutes.
    pub duration: Metric,
}

/// Totals and averages over the selected rows.
///
/// Only produced when more than one row is selected. Repeated indices count
/// once and indices past the end of `trips` are skipped.
pub fn summarize<I>(trips: &[Trip], indices: I, side: Side) -> Option<Summary>
where
    I: IntoIterator<Item = usize>,
{
    let mut rows = 0;
    let mut drivers = HashSet::new();
    let mut tasks = Metric::default();
    let mut order_value = Metric::default();
    let mut punctuality = Metric::default();
    let mut duration = Metric::default();

    let indices: BTreeSet<usize> = indices.into_iter().collect();
    for trip in indices.into_iter().filter_map(|index| trips.get(index)) {
        rows += 1;
        if let Some(driver) = trip.driver_name() {
            drivers.insert(driver);
        }
        let task_count = calendar::tasks(trip.calendar_name.as_deref());
        tasks.push(parse_number(Some(&task_count)));
        order_value.push(trip.order_value());
        punctuality.push(trip.punctuality_minutes().map(f64::from));
        duration.push(trip.duration_minutes(side).map(f64::from));
    }

    if rows <= 1 {
        return None;
    }
    Some(Summary {
        rows,
        drivers: drivers.len(),
        tasks,
        order_value,
        punctuality,
        duration,
    })
}
