use ndarray::Array1;

/// A series rescaled so that its elements sum to one.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSeries(Array1<f64>);

impl NormalizedSeries {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + Clone + '_ {
        self.0.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }
}

/// Divides every element by the sum of the series.
///
/// A zero sum is not guarded against: the result is non-finite.
pub fn normalize(series: &[f64]) -> NormalizedSeries {
    let values = Array1::from_iter(series.iter().copied());
    let sum = values.sum();

    NormalizedSeries(values.mapv_into(|v| v / sum))
}
