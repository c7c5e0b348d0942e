#![allow(dead_code, non_snake_case, non_upper_case_globals)]

use std::path::PathBuf;
use ndarray as nd;
use rayon::prelude::*;
use snv_sim::{
    mkdir,
    write_npz,
    config::SweepConfig,
    dynamics::{ transition_spectrum, HBuilderDjt },
    systems::snv117,
};

fn stack_columns(columns: &[nd::Array1<f64>]) -> nd::Array2<f64> {
    let views: Vec<nd::ArrayView1<f64>>
        = columns.iter().map(|col| col.view()).collect();
    nd::stack(nd::Axis(1), &views)
        .expect("error stacking spectrum arrays")
}

fn main() -> anyhow::Result<()> {
    let config = SweepConfig::load_or_default("config.toml")?;
    let outdir = PathBuf::from("output/snv117");
    mkdir!(outdir);

    let B: nd::Array1<f64>
        = nd::Array1::linspace(0.0, config.b_max, config.steps);
    let [nx, _, nz] = config.direction();
    let basis = snv117::basis();

    println!("optical transitions");
    let results: Vec<(nd::Array1<f64>, nd::Array1<f64>)>
        = B.to_vec().into_par_iter()
        .map(|b| {
            let field = [nx * b, 0.0, nz * b];
            let gnd = HBuilderDjt::new(&basis, snv117::ground(), field);
            let exc = HBuilderDjt::new(&basis, snv117::excited(), field);
            let spectrum = transition_spectrum(&exc, &gnd);
            (
                spectrum.freq.iter().copied().collect(),
                spectrum.strength.iter().copied().collect(),
            )
        })
        .collect();

    let freqs: Vec<nd::Array1<f64>>
        = results.iter().map(|(freq, _)| freq.clone()).collect();
    let strengths: Vec<nd::Array1<f64>>
        = results.iter().map(|(_, strength)| strength.clone()).collect();
    let freq = stack_columns(&freqs);
    let strength = stack_columns(&strengths);
    write_npz!(
        outdir.join("spectrum.npz"),
        arrays: {
            "B" => &B,
            "freq" => &freq,
            "strength" => &strength,
        }
    );

    println!("done");
    Ok(())
}
