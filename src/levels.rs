#![allow(dead_code, non_snake_case, non_upper_case_globals)]

use std::path::PathBuf;
use ndarray as nd;
use rayon::prelude::*;
use snv_sim::{
    mkdir,
    write_npz,
    config::SweepConfig,
    dynamics::HBuilderDjt,
    systems::snv117,
};

fn stack_levels(levels: &[nd::Array1<f64>]) -> nd::Array2<f64> {
    let views: Vec<nd::ArrayView1<f64>>
        = levels.iter().map(|e| e.view()).collect();
    nd::stack(nd::Axis(1), &views)
        .expect("error stacking level arrays")
}

fn main() -> anyhow::Result<()> {
    let config = SweepConfig::load_or_default("config.toml")?;
    let outdir = PathBuf::from("output/snv117");
    mkdir!(outdir);

    let B: nd::Array1<f64>
        = nd::Array1::linspace(0.0, config.b_max, config.steps);
    let [nx, _, nz] = config.direction();
    let basis = snv117::basis();

    println!("ground manifold");
    let E_gnd: Vec<nd::Array1<f64>>
        = B.to_vec().into_par_iter()
        .map(|b| {
            HBuilderDjt::new(&basis, snv117::ground(), [nx * b, 0.0, nz * b])
                .levels()
        })
        .collect();

    println!("excited manifold");
    let E_exc: Vec<nd::Array1<f64>>
        = B.to_vec().into_par_iter()
        .map(|b| {
            HBuilderDjt::new(&basis, snv117::excited(), [nx * b, 0.0, nz * b])
                .levels()
        })
        .collect();

    let e_gnd = stack_levels(&E_gnd);
    let e_exc = stack_levels(&E_exc);
    write_npz!(
        outdir.join("levels.npz"),
        arrays: {
            "B" => &B,
            "e_gnd" => &e_gnd,
            "e_exc" => &e_exc,
        }
    );

    println!("done");
    Ok(())
}
