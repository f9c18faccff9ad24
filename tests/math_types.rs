//! Integration tests for the Vector and Matrix containers.

use approx::assert_relative_eq;
use dense_linalg::{LinalgError, Matrix, Vector};

fn mat<T>(rows: Vec<Vec<T>>) -> Matrix<T> {
    Matrix::from_rows(rows).unwrap()
}

// ---------------------------------------------------------------------------
// Vector basics
// ---------------------------------------------------------------------------

#[test]
fn vector_from_vec_and_len() {
    let a = Vector::from_vec(vec![1.0f32, 2.0, 3.0]);
    assert_eq!(a.len(), 3);
    assert!(!a.is_empty());
    assert_eq!(a.shape(), (3,));
}

#[test]
fn vector_zeros_and_from_elem() {
    let z: Vector<i64> = Vector::zeros(4);
    assert!(z.iter().all(|&v| v == 0));
    let e = Vector::from_elem(3, 7i32);
    assert_eq!(e.to_vec(), vec![7, 7, 7]);
}

#[test]
fn vector_add_sub_scl_in_place() {
    let mut v = Vector::from_vec(vec![1, 2, 3]);
    v.scl(2);
    assert_eq!(v.to_vec(), vec![2, 4, 6]);

    let mut v = Vector::from_vec(vec![1, 2, 3]);
    v.sub(&Vector::from_vec(vec![1, 2, 3])).unwrap();
    assert_eq!(v.to_vec(), vec![0, 0, 0]);

    let mut v = Vector::from_vec(vec![1, 2, 3]);
    v.add(&Vector::from_vec(vec![1, 2, 3])).unwrap();
    assert_eq!(v.to_vec(), vec![2, 4, 6]);
}

#[test]
fn vector_add_length_mismatch_leaves_receiver_untouched() {
    let mut v = Vector::from_vec(vec![1, 2, 3]);
    let err = v.add(&Vector::from_vec(vec![1, 2])).unwrap_err();
    assert!(matches!(err, LinalgError::DimensionMismatch { op: "add", .. }));
    assert_eq!(v.to_vec(), vec![1, 2, 3]);
}

#[test]
fn vector_reshape_to_matrix() {
    let v = Vector::from_vec(vec![1, 2, 3, 4, 5, 6]);
    let m = v.to_matrix(2, 3).unwrap();
    assert_eq!(m.to_rows(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    assert_eq!(m.to_vector(), v);
    assert!(v.to_matrix(4, 2).is_err());
}

// ---------------------------------------------------------------------------
// Dot product and norms
// ---------------------------------------------------------------------------

#[test]
fn dot_products() {
    let dot = |a: Vec<i32>, b: Vec<i32>| Vector::from_vec(a).dot(&Vector::from_vec(b));
    assert_eq!(dot(vec![1, 2, 3], vec![4, 5, 6]).unwrap(), 32);
    assert_eq!(dot(vec![2, 2], vec![2, 2]).unwrap(), 8);
    assert_eq!(dot(vec![1, 1], vec![-1, -1]).unwrap(), -2);
    assert_eq!(dot(vec![1, 0], vec![0, 1]).unwrap(), 0);
    assert!(matches!(
        dot(vec![1, 2, 3], vec![4, 5, 6, 7]),
        Err(LinalgError::DimensionMismatch { op: "dot", .. })
    ));
}

#[test]
fn norms_of_zero_vector() {
    let u = Vector::from_vec(vec![0, 0, 0]);
    assert_eq!(u.norm_1(), 0.0);
    assert_eq!(u.norm(), 0.0);
    assert_eq!(u.norm_inf(), 0.0);
}

#[test]
fn norms_of_small_vectors() {
    let u = Vector::from_vec(vec![1, 2, 3]);
    assert_eq!(u.norm_1(), 6.0);
    assert_relative_eq!(u.norm(), 3.7416573867739413, epsilon = 1e-15);
    assert_eq!(u.norm_inf(), 3.0);

    let u = Vector::from_vec(vec![-1, -2]);
    assert_eq!(u.norm_1(), 3.0);
    assert_relative_eq!(u.norm(), 5f64.sqrt(), epsilon = 1e-15);
    assert_eq!(u.norm_inf(), 2.0);

    let u = Vector::from_vec(vec![1, 0, -8]);
    assert_eq!(u.norm_1(), 9.0);
    assert_relative_eq!(u.norm(), 65f64.sqrt(), epsilon = 1e-15);
    assert_eq!(u.norm_inf(), 8.0);
}

#[test]
fn norms_invariant_under_sign_flip() {
    let v = Vector::from_vec(vec![1.5, -2.0, 3.25, 0.0]);
    let neg = -&v;
    assert_eq!(v.norm_1(), neg.norm_1());
    assert_eq!(v.norm(), neg.norm());
    assert_eq!(v.norm_inf(), neg.norm_inf());
}

// ---------------------------------------------------------------------------
// Matrix basics
// ---------------------------------------------------------------------------

#[test]
fn matrix_from_shape_vec() {
    let a = Matrix::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(a.nrows(), 2);
    assert_eq!(a.ncols(), 3);
    assert_eq!(a.shape(), (2, 3));
    assert!(!a.is_square());
}

#[test]
fn matrix_shape_mismatch_errors() {
    let result = Matrix::<f32>::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0]);
    assert!(matches!(result, Err(LinalgError::DimensionMismatch { .. })));
}

#[test]
fn matrix_indexing_and_checked_access() {
    let mut a = mat(vec![vec![1, 2], vec![3, 4]]);
    assert_eq!(a[(0, 1)], 2);
    assert_eq!(a.get(1, 0).unwrap(), 3);
    a.set(1, 1, 9).unwrap();
    assert_eq!(a[(1, 1)], 9);
    assert_eq!(
        a.get(2, 0),
        Err(LinalgError::IndexOutOfBounds {
            index: vec![2, 0],
            shape: vec![2, 2],
        })
    );
    assert!(a.set(0, 2, 1).is_err());
}

#[test]
#[should_panic(expected = "matrix index out of bounds")]
fn matrix_index_operator_panics_out_of_range() {
    let a = mat(vec![vec![1, 2], vec![3, 4]]);
    let _value = a[(0, 2)];
}

#[test]
fn matrix_row_slice_and_column() {
    let a = Matrix::from_shape_vec((3, 2), vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(a.row_slice(1), &[3, 4]);
    assert_eq!(a.column(1).to_vec(), vec![2, 4, 6]);
}

#[test]
fn matrix_add_sub_scl_in_place() {
    let mut m1 = mat(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    m1.scl(2.0);
    assert_eq!(m1.to_rows(), vec![vec![2.0, 4.0], vec![6.0, 8.0]]);

    let mut m1 = mat(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    m1.sub(&mat(vec![vec![5.0, 8.0], vec![6.0, 8.0]])).unwrap();
    assert_eq!(m1.to_rows(), vec![vec![-4.0, -6.0], vec![-3.0, -4.0]]);

    let mut m1 = mat(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    m1.add(&mat(vec![vec![5.0, 8.0], vec![6.0, 8.0]])).unwrap();
    assert_eq!(m1.to_rows(), vec![vec![6.0, 10.0], vec![9.0, 12.0]]);
}

#[test]
fn matrix_add_shape_mismatch() {
    let mut a = mat(vec![vec![1, 2], vec![3, 4]]);
    let b = mat(vec![vec![1, 2, 3]]);
    assert!(matches!(
        a.add(&b),
        Err(LinalgError::DimensionMismatch { op: "add", .. })
    ));
}

#[test]
fn matrix_mapv() {
    let a = mat(vec![vec![1.0f32, 2.0], vec![3.0, 4.0]]);
    let neg = a.mapv(|x| -x);
    assert_eq!(neg[(0, 0)], -1.0);
    assert_eq!(neg[(1, 1)], -4.0);
}

// ---------------------------------------------------------------------------
// Trace, transpose, linear maps
// ---------------------------------------------------------------------------

#[test]
fn trace_values() {
    assert_eq!(mat(vec![vec![1, 2], vec![3, 4]]).trace().unwrap(), 5);
    assert_eq!(
        mat(vec![vec![3.0, -5.0], vec![6.0, 8.0]]).trace().unwrap(),
        11.0
    );
    assert_eq!(
        mat(vec![
            vec![-2.0, -8.0, 4.0],
            vec![1.0, -23.0, 4.0],
            vec![0.0, 6.0, 4.0],
        ])
        .trace()
        .unwrap(),
        -21.0
    );
}

#[test]
fn trace_requires_square() {
    let a = mat(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    assert!(matches!(
        a.trace(),
        Err(LinalgError::DimensionMismatch { op: "trace", .. })
    ));
}

#[test]
fn transpose_swaps_dimensions() {
    let a = mat(vec![vec![1, 2], vec![3, 4]]);
    assert_eq!(a.transpose(), mat(vec![vec![1, 3], vec![2, 4]]));
    let a = mat(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    assert_eq!(
        a.transpose(),
        mat(vec![vec![1, 4], vec![2, 5], vec![3, 6]])
    );
}

#[test]
fn mul_vec_applies_linear_map() {
    let v = Vector::from_vec(vec![4.0, 2.0]);
    let cases = vec![
        (vec![vec![1.0, 0.0], vec![0.0, 1.0]], vec![4.0, 2.0]),
        (vec![vec![2.0, 0.0], vec![0.0, 2.0]], vec![8.0, 4.0]),
        (vec![vec![2.0, -2.0], vec![-2.0, 2.0]], vec![4.0, -4.0]),
    ];
    for (rows, expected) in cases {
        assert_eq!(mat(rows).mul_vec(&v).unwrap().to_vec(), expected);
    }
    let m = mat(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    assert_eq!(
        m.mul_vec(&Vector::from_vec(vec![5.0, 6.0])).unwrap().to_vec(),
        vec![17.0, 39.0]
    );
    assert!(m.mul_vec(&Vector::from_vec(vec![1.0])).is_err());
}

#[test]
fn mul_mat_products() {
    let a = mat(vec![vec![1, 2], vec![3, 4]]);
    let b = mat(vec![vec![5, 6], vec![7, 8]]);
    assert_eq!(a.mul_mat(&b).unwrap(), mat(vec![vec![19, 22], vec![43, 50]]));

    let a = mat(vec![vec![3.0, -5.0], vec![6.0, 8.0]]);
    let b = mat(vec![vec![2.0, 1.0], vec![4.0, 2.0]]);
    assert_eq!(
        a.mul_mat(&b).unwrap(),
        mat(vec![vec![-14.0, -7.0], vec![44.0, 22.0]])
    );
}

#[test]
fn identity_is_neutral_for_mul_mat() {
    let m = mat(vec![
        vec![2.0, -1.0, 0.5],
        vec![0.0, 3.0, 7.0],
        vec![-4.0, 1.0, 1.0],
    ]);
    assert_eq!(Matrix::identity(3).mul_mat(&m).unwrap(), m);
    assert_eq!(m.mul_mat(&Matrix::identity(3)).unwrap(), m);
}

#[test]
fn mul_mat_inner_dimension_mismatch() {
    let a = mat(vec![vec![1, 2, 3]]);
    let b = mat(vec![vec![1, 2]]);
    assert!(matches!(
        a.mul_mat(&b),
        Err(LinalgError::DimensionMismatch { op: "mul_mat", .. })
    ));
}

// ---------------------------------------------------------------------------
// Rendering & serialization
// ---------------------------------------------------------------------------

#[test]
fn display_renders_bracketed_rows() {
    let m = mat(vec![vec![1.5, 2.0], vec![3.0, -4.0]]);
    assert_eq!(m.to_string(), "[1.5, 2]\n[3, -4]");
    assert_eq!(Vector::from_vec(vec![1, 2]).to_string(), "[1, 2]");
}

#[test]
fn matrix_serializes_to_json() {
    let m = mat(vec![vec![1, 2], vec![3, 4]]);
    let json = serde_json::to_string(&m).unwrap();
    assert!(json.contains("\"rows\":2"));
    let back: Matrix<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}

#[test]
fn matrix_deserialize_rejects_bad_shape() {
    let json = r#"{"data":[1,2,3],"rows":2,"cols":2}"#;
    let result: Result<Matrix<i32>, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn vector_serializes_as_plain_array() {
    let v = Vector::from_vec(vec![1.0, 2.5]);
    assert_eq!(serde_json::to_string(&v).unwrap(), "[1.0,2.5]");
}
