use crate::error::{LinalgError, Result};
use crate::math::scalar::{fma, to_f64};
use crate::math::{Scalar, Vector};

/// Cosine of the angle between `u` and `v`.
pub fn angle_cos<T: Scalar>(u: &Vector<T>, v: &Vector<T>) -> Result<f64> {
    let dot = to_f64(u.dot(v)?);
    let norms = u.norm() * v.norm();
    if norms == 0.0 {
        return Err(LinalgError::ZeroVector { op: "angle_cos" });
    }
    Ok(dot / norms)
}

/// Cross product of two 3-dimensional vectors.
pub fn cross_product<T: Scalar>(u: &Vector<T>, v: &Vector<T>) -> Result<Vector<T>> {
    if u.len() != 3 || v.len() != 3 {
        return Err(LinalgError::dimension_mismatch(
            "cross_product",
            (3, 3),
            (u.len(), v.len()),
        ));
    }
    let (ux, uy, uz) = (u[0], u[1], u[2]);
    let (vx, vy, vz) = (v[0], v[1], v[2]);
    Ok(Vector::from_vec(vec![
        fma(uy, vz, -(uz * vy)),
        fma(uz, vx, -(ux * vz)),
        fma(ux, vy, -(uy * vx)),
    ]))
}

impl<T: Scalar> Vector<T> {
    pub fn cross(&self, other: &Vector<T>) -> Result<Vector<T>> {
        cross_product(self, other)
    }
}
