use em_complex::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), EmComplexError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut bench = Workbench::with_defaults()?;
    let out = bench.outputs();

    let (v, i) = out.phasors.arrows();
    println!(
        "phasors: V = ({:.3}, {:.3}), I = ({:.3}, {:.3}), extent ±{:.2}",
        v.dx,
        v.dy,
        i.dx,
        i.dy,
        out.phasors.display_bound
    );

    let (lo, hi) = out.harmonic.value_range();
    println!("ln(r) on {:?} grid: [{lo:.3}, {hi:.3}]", out.harmonic.z().shape());

    println!("w = z^2: {} points", out.conformal.len());
    println!("{}", out.rotating.to_latex());
    println!(
        "1/(x^2+1) on [-5, 5]: trapezoid {:.6} vs residue value {:.6}",
        out.residue.trapezoid(),
        LORENTZIAN_RESIDUE_INTEGRAL
    );

    // Sweep the Park angle through a quarter turn.
    for k in 0..=4 {
        let theta = k as Scalar * std::f64::consts::FRAC_PI_8;
        bench.apply(InputChange::Theta(theta))?;
        println!("theta = {theta:.3}: {}", bench.outputs().rotating);
    }
    Ok(())
}
