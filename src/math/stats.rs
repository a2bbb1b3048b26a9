//! Channel statistics over pixel samples

use num_traits::AsPrimitive;

use crate::math::matrix::Matrix3;

/// Per-channel arithmetic means of a sample set
///
/// Returns all zeros for an empty sample set so callers can treat a
/// missing boundary as a flat gradient.
pub fn channel_means<T>(samples: &[[T; 3]]) -> [f64; 3]
where
    T: AsPrimitive<f64>,
{
    let mut sums = [0.0_f64; 3];
    for sample in samples {
        for (sum, value) in sums.iter_mut().zip(sample.iter()) {
            *sum += value.as_();
        }
    }

    if samples.is_empty() {
        return sums;
    }

    let scale = (samples.len() as f64).recip();
    for sum in &mut sums {
        *sum *= scale;
    }
    sums
}

/// Unbiased 3x3 sample covariance of residual vectors
///
/// Residuals are centred on their own mean and the outer-product sum is
/// scaled by `n - 1`. Fewer than two samples leave no degrees of freedom,
/// so the zero matrix is returned and inversion fails downstream.
pub fn sample_covariance(residuals: &[[f64; 3]]) -> Matrix3 {
    let count = residuals.len();
    if count < 2 {
        return Matrix3::zero();
    }

    let means = channel_means(residuals);
    let mut sums = [[0.0_f64; 3]; 3];
    for sample in residuals {
        let centred = [
            sample[0] - means[0],
            sample[1] - means[1],
            sample[2] - means[2],
        ];
        for (sum_row, &row_value) in sums.iter_mut().zip(centred.iter()) {
            for (entry, &col_value) in sum_row.iter_mut().zip(centred.iter()) {
                *entry += row_value * col_value;
            }
        }
    }

    let scale = ((count - 1) as f64).recip();
    for row in &mut sums {
        for entry in row {
            *entry *= scale;
        }
    }
    Matrix3::new(sums)
}
