//! IF97 기준점 회귀 테스트. IAPWS-IF97 공식 문서의 검증 예제 값을 활용한다.
use steam_eos::{BoundedEos, EosError, If97, Limits, PropertyOracle, Specie};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1e-12);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.9e} got {actual:.9e} (diff {diff:.3e}, tol {rel_tol})"
    );
}

fn water_eos() -> BoundedEos {
    BoundedEos::new(
        Specie::water(),
        Limits::new("temperature", 273.15, 1073.15).unwrap(),
        Limits::new("pressure", 1.0e5, 2.2e7).unwrap(),
    )
}

#[test]
fn region1_reference_point() {
    // IF97: p = 3 MPa, T = 300 K
    let if97 = If97::in_region(1).unwrap();
    let rho = if97.density(3.0e6, 300.0).unwrap();
    assert_close("rho", rho, 1.0 / 0.001_002_151_68, 1e-6);
    assert_close("cp", if97.cp(3.0e6, 300.0).unwrap(), 4_173.012_18, 1e-6);
}

#[test]
fn region2_reference_point() {
    // IF97: p = 0.0035 MPa, T = 300 K
    let if97 = If97::in_region(2).unwrap();
    let rho = if97.density(3.5e3, 300.0).unwrap();
    assert_close("rho", rho, 1.0 / 39.491_386_6, 1e-6);
    assert_close("cp", if97.cp(3.5e3, 300.0).unwrap(), 1_913.001_62, 1e-6);
}

#[test]
fn region5_reference_point() {
    // IF97: p = 0.5 MPa, T = 1500 K
    let if97 = If97::in_region(5).unwrap();
    let rho = if97.density(5.0e5, 1500.0).unwrap();
    assert_close("rho", rho, 1.0 / 1.384_550_90, 1e-6);
    assert_close("cp", if97.cp(5.0e5, 1500.0).unwrap(), 2_616.094_45, 1e-6);
}

#[test]
fn region_dispatch_matches_forced_region() {
    let auto = If97::auto();
    let forced = If97::in_region(1).unwrap();
    assert_close(
        "rho region1",
        auto.density(3.0e6, 300.0).unwrap(),
        forced.density(3.0e6, 300.0).unwrap(),
        1e-9,
    );
}

#[test]
fn unsupported_region_rejected() {
    assert_eq!(If97::in_region(4), Err(EosError::InvalidRegion(4)));
}

#[test]
fn low_pressure_steam_behaves_like_ideal_gas() {
    // p = 0.1 MPa, T = 700 K: Z ≈ 1, cp - cv ≈ R, (∂ρ/∂p)_T ≈ 1/(RT)
    let eos = water_eos();
    let r = eos.r_specific();
    assert_close("Z", eos.compressibility_factor(1.0e5, 700.0).unwrap(), 1.0, 5e-3);
    let psi = eos.compressibility_coefficient(1.0e5, 700.0).unwrap();
    assert_close("psi", psi, 1.0 / (r * 700.0), 2e-2);
    let d = eos.heat_capacity_difference(1.0e5, 700.0).unwrap();
    assert_close("cp-cv", d, r, 2e-2);
}

#[test]
fn pressure_below_min_uses_min() {
    let eos = water_eos();
    assert_eq!(
        eos.density(3.5e3, 700.0).unwrap(),
        If97::auto().density(1.0e5, 700.0).unwrap()
    );
}

#[test]
fn pressure_above_max_uses_max() {
    // pMax = 22 MPa. 30 MPa 요청은 22 MPa에서 계산되어야 한다.
    let eos = water_eos();
    let if97 = If97::auto();
    let rho = eos.density(3.0e7, 300.0).unwrap();
    assert_eq!(rho, if97.density(2.2e7, 300.0).unwrap());
    assert_ne!(rho, if97.density(3.0e7, 300.0).unwrap());
}

#[test]
fn compressed_liquid_properties_are_physical() {
    let eos = water_eos();
    let props = eos.properties(1.0e7, 350.0).unwrap();
    assert!(props.density > 950.0 && props.density < 1000.0, "{props:?}");
    assert!(props.compressibility_coefficient > 0.0);
    // 액체는 이상기체보다 훨씬 압축되기 어렵다.
    assert!(props.compressibility_factor < 0.1);
    assert!(props.heat_capacity_difference > 0.0);
    assert!(props.heat_capacity_difference < 500.0);
}

#[test]
fn pressure_bounded_variant_uses_if97_default_temperature_range() {
    let eos: BoundedEos = BoundedEos::pressure_bounded(
        Specie::water(),
        Limits::new("pressure", 1.0e5, 2.2e7).unwrap(),
    );
    let pt = eos.evaluation_point(1.0e6, 5000.0).unwrap();
    assert_eq!(pt.t, 1073.15);
    assert!(eos.density(1.0e6, 5000.0).unwrap().is_finite());
}
