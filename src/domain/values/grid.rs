//! Evenly spaced lattice construction for the white-space grid search.
//!
//! `linspace` follows numpy semantics: `n` points covering `[min, max]`
//! inclusive of both endpoints, spacing `(max - min) / (n - 1)`. A single
//! point degenerates to `[min]`; zero points is an empty lattice.

/// `n` evenly spaced values over `[min, max]`, endpoints included.
pub fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (n - 1) as f64;
            (0..n).map(|i| min + step * i as f64).collect()
        }
    }
}
