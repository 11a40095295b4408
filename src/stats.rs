use double_vector::DoubleVector;

/// Sorts ascending in place, stopping early after a pass with no swaps.
pub fn bubble_sort(values: &mut DoubleVector) {
    let n = values.len();
    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if values[j] > values[j + 1] {
                values.as_mut_slice().swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Arithmetic mean. An empty vector yields `NaN`.
pub fn average(values: &DoubleVector) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// What the report prints about a sorted vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub average: f64,
    pub maximum: Option<f64>,
    pub minimum: Option<f64>,
}

impl Summary {
    /// Reads the extremes from the ends, so `values` must already be sorted.
    pub fn of_sorted(values: &DoubleVector) -> Self {
        Self {
            average: average(values),
            maximum: values.back().copied(),
            minimum: values.front().copied(),
        }
    }
}
