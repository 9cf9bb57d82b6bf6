// tests/properties.rs
//! Property tests for the algebraic identities of the matrix API.

use cofactor::{identity, Matrix};
use proptest::prelude::*;

fn any_matrix() -> impl Strategy<Value = Matrix<f64>> {
    (1_usize..6, 1_usize..6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(-1000.0_f64..1000.0, rows * cols)
            .prop_map(move |values| Matrix::new(rows, cols, values).unwrap())
    })
}

fn integer_square(order: usize) -> impl Strategy<Value = Matrix<f64>> {
    prop::collection::vec(-9_i32..10, order * order).prop_map(move |values| {
        Matrix::new(order, order, values.into_iter().map(f64::from).collect()).unwrap()
    })
}

proptest! {
    #[test]
    fn prop_transpose_is_an_involution(m in any_matrix()) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn prop_transpose_is_rotate_then_mirror(m in any_matrix()) {
        prop_assert_eq!(m.transpose(), m.rotate().mirror());
    }

    #[test]
    fn prop_transpose_swaps_indices(m in any_matrix()) {
        let t = m.transpose();
        for y in 0..m.rows() {
            for x in 0..m.cols() {
                prop_assert_eq!(t.get(x, y), m.get(y, x));
            }
        }
    }

    #[test]
    fn prop_multiply_shape(
        (a, b) in (1_usize..5, 1_usize..5, 1_usize..5).prop_flat_map(|(rows, inner, cols)| {
            (
                prop::collection::vec(-10.0_f64..10.0, rows * inner)
                    .prop_map(move |v| Matrix::new(rows, inner, v).unwrap()),
                prop::collection::vec(-10.0_f64..10.0, inner * cols)
                    .prop_map(move |v| Matrix::new(inner, cols, v).unwrap()),
            )
        })
    ) {
        let product = a.multiply(&b).unwrap();
        prop_assert_eq!(product.rows(), a.rows());
        prop_assert_eq!(product.cols(), b.cols());
    }

    #[test]
    fn prop_two_by_two_determinant(a in -100.0_f64..100.0, b in -100.0_f64..100.0,
                                   c in -100.0_f64..100.0, d in -100.0_f64..100.0) {
        let m = Matrix::from_rows(&[[a, b], [c, d]]);
        prop_assert_eq!(m.determinant().unwrap(), a * d - b * c);
    }

    #[test]
    fn prop_inverse_times_matrix_is_identity(order in 2_usize..5, seed in integer_square(4)) {
        // Reuse the top-left block of a 4x4 integer matrix for smaller orders.
        let values: Vec<f64> = (0..order)
            .flat_map(|y| (0..order).map(move |x| (y, x)))
            .map(|(y, x)| seed.get(y, x))
            .collect();
        let m = Matrix::new(order, order, values).unwrap();
        let determinant = m.determinant().unwrap();
        prop_assume!(determinant != 0.0);

        let product = m.inverse().unwrap().multiply(&m).unwrap();
        prop_assert!(product.approx_eq(&identity(order), 1e-9), "{}", product);
    }

    #[test]
    fn prop_adjugate_is_determinant_times_inverse(m in integer_square(3)) {
        let determinant = m.determinant().unwrap();
        prop_assume!(determinant != 0.0);

        let scaled = m.inverse().unwrap().scale(determinant);
        prop_assert!(scaled.approx_eq(&m.adjugate().unwrap(), 1e-9));
    }
}
