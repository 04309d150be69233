use rand::{rngs::StdRng, Rng, SeedableRng};

use ratla_linalg::{
    determinant::{determinant, inverse},
    ops::{multiply, scalar_multiply, transpose},
    solve::{cramer, solve_by_inverse},
    vector::{angle_between, cross_product, dot_product},
    LinalgError, Matrix,
};
use ratla_rational::RationalValue;

const TRIALS: usize = 50;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_matrix(rng: &mut StdRng, n: usize) -> Matrix {
    let rows: Vec<Vec<i64>> = (0..n)
        .map(|_| (0..n).map(|_| rng.random_range(-9..=9)).collect())
        .collect();
    Matrix::from_integers(&rows).unwrap()
}

fn random_fraction(rng: &mut StdRng) -> RationalValue {
    let numerator = rng.random_range(-20..=20);
    let denominator = rng.random_range(1..=12);
    RationalValue::from_integers(numerator, denominator).unwrap()
}

#[test]
fn test_reciprocal_is_an_involution() -> Result<(), LinalgError> {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..TRIALS {
        let a = random_fraction(&mut rng);
        if a.is_zero() {
            continue;
        }
        assert_eq!(a.reciprocal()?.reciprocal()?, a);
        assert_eq!(a.checked_div(&a)?, RationalValue::one());
    }
    Ok(())
}

#[test]
fn test_fraction_text_round_trip() -> Result<(), LinalgError> {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..TRIALS {
        let a = random_fraction(&mut rng);
        let parsed: RationalValue = a.to_string().parse()?;
        assert_eq!(parsed, a);
    }
    Ok(())
}

#[test]
fn test_determinant_of_transpose() -> Result<(), LinalgError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..TRIALS {
        let n = rng.random_range(1..=4);
        let m = random_matrix(&mut rng, n);
        assert_eq!(determinant(&transpose(&m))?, determinant(&m)?);
    }
    Ok(())
}

#[test]
fn test_inverse_times_matrix_is_identity() -> Result<(), LinalgError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(4);
    let mut checked = 0;
    for _ in 0..TRIALS {
        let n = rng.random_range(1..=4);
        let m = random_matrix(&mut rng, n);
        match inverse(&m) {
            Ok(inv) => {
                assert_eq!(multiply(&m, &inv)?, Matrix::identity(n)?);
                checked += 1;
            }
            Err(LinalgError::SingularMatrix) => assert!(determinant(&m)?.is_zero()),
            Err(e) => return Err(e),
        }
    }
    assert!(checked > 0);
    Ok(())
}

#[test]
fn test_determinant_scales_with_power_of_scalar() -> Result<(), LinalgError> {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..TRIALS {
        let n = rng.random_range(1..=4);
        let m = random_matrix(&mut rng, n);
        let s = random_fraction(&mut rng);

        let lhs = determinant(&scalar_multiply(&m, &s)?)?;
        let rhs = s.powi(n as i32)?.checked_mul(&determinant(&m)?)?;
        assert_eq!(lhs, rhs);
    }
    Ok(())
}

#[test]
fn test_solvers_agree() -> Result<(), LinalgError> {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..TRIALS {
        let n = rng.random_range(1..=3);
        let a = random_matrix(&mut rng, n);
        if determinant(&a)?.is_zero() {
            continue;
        }
        let column: Vec<RationalValue> = (0..n).map(|_| random_fraction(&mut rng)).collect();
        let b = Matrix::column_vector(column)?;

        let x = cramer(&a, &b)?;
        assert_eq!(x, solve_by_inverse(&a, &b)?);
        assert_eq!(multiply(&a, &x)?, b);
    }
    Ok(())
}

#[test]
fn test_scenarios() -> Result<(), LinalgError> {
    init_logger();

    let m = Matrix::from_integers(&[[4, 3], [6, 3]])?;
    assert_eq!(determinant(&m)?, RationalValue::from(-6));

    let i = Matrix::from_integers(&[[1, 0], [0, 1]])?;
    assert_eq!(inverse(&i)?, i);

    let m = Matrix::from_integers(&[[2, 0], [0, 2]])?;
    let b = Matrix::from_integers(&[[4], [6]])?;
    assert_eq!(cramer(&m, &b)?, Matrix::from_integers(&[[2], [3]])?);

    let v1 = Matrix::from_integers(&[[1], [0], [0]])?;
    let v2 = Matrix::from_integers(&[[0], [1], [0]])?;
    assert_eq!(cross_product(&v1, &v2)?, Matrix::from_integers(&[[0], [0], [1]])?);
    assert!(dot_product(&v1, &v2)?.is_zero());
    approx::assert_relative_eq!(angle_between(&v1, &v2)?.to_f64(), 90.0, epsilon = 1e-9);

    assert_eq!(
        determinant(&Matrix::from_integers(&[[5]])?)?,
        RationalValue::from(5)
    );

    let singular = Matrix::from_integers(&[[1, 1], [1, 1]])?;
    assert_eq!(inverse(&singular), Err(LinalgError::SingularMatrix));
    Ok(())
}
