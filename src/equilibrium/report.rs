//!
//! Reporting of a solver run
//!
//! Consumers of `Equilibrium`: a plain text summary, a JSON document and a
//! convergence chart.
//!
use super::cost::CostModel;
use super::error::{Error, Result};
use super::flow_rate::FlowRateLike;
use super::solver::Equilibrium;
use itertools::Itertools; // for join
use plotters::prelude::*;
use std::io::Write;
use std::path::Path;

///
/// Write the text report:
///
/// ```text
/// Equilibrium Flow Distribution:
/// Flow on AB : 10
/// Travel time on AB : 3
/// ...
/// not converged after 100 iterations
/// link travel times:
/// AB: [3, 3, ...]
/// ```
///
/// Travel times are evaluated at the final flow.
///
pub fn write_report<W: Write, F: FlowRateLike>(
    w: &mut W,
    model: &CostModel,
    eq: &Equilibrium<F>,
) -> Result<()> {
    writeln!(w, "Equilibrium Flow Distribution:")?;
    for (link, flow) in eq.flow.iter() {
        writeln!(w, "Flow on {} : {}", link, flow)?;
        writeln!(w, "Travel time on {} : {}", link, model.travel_time(link, flow)?)?;
    }
    writeln!(w, "{}", eq.termination)?;
    writeln!(w, "link travel times:")?;
    for (link, times) in eq.history.iter() {
        writeln!(w, "{}: [{}]", link, times.iter().join(", "))?;
    }
    Ok(())
}

pub fn report_string<F: FlowRateLike>(model: &CostModel, eq: &Equilibrium<F>) -> Result<String> {
    let mut buf = Vec::new();
    write_report(&mut buf, model, eq)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// `{"flow": .., "history": .., "trace": [..], "termination": ..}`
pub fn to_json<F: FlowRateLike + serde::Serialize>(eq: &Equilibrium<F>) -> Result<String> {
    Ok(serde_json::to_string_pretty(eq)?)
}

/// number of dash/gap pairs of a flow line
const DASHES: usize = 40;

fn plot_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Plot(e.to_string())
}

/// horizontal dashed line at `y` over `[x_from, x_to]`, as segments
fn dashes(x_from: f64, x_to: f64, y: f64) -> impl Iterator<Item = Vec<(f64, f64)>> {
    let step = (x_to - x_from) / (2 * DASHES) as f64;
    (0..DASHES).map(move |k| {
        let x = x_from + (2 * k) as f64 * step;
        vec![(x, y), (x + step, y)]
    })
}

///
/// Draw the convergence chart into a PNG at `path`: one line per link with its
/// travel time over the iterations, and a dashed black line at the final flow
/// of that link.
///
pub fn plot_history<P: AsRef<Path>, F: FlowRateLike>(
    path: P,
    eq: &Equilibrium<F>,
) -> Result<()> {
    let x_max = eq.history.iterations().saturating_sub(1).max(1) as f64;
    let (lo, hi) = eq
        .history
        .iter()
        .flat_map(|(_, times)| times.iter().copied())
        .chain(eq.flow.iter().map(|(_, f)| f.to_f64()))
        .fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

    let root = BitMapBackend::new(path.as_ref(), (1280, 720)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Convergence of Travel Times and Equilibrium Flow",
            ("sans-serif", 24),
        )
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0.0..x_max, (lo - 1.0)..(hi + 1.0))
        .map_err(plot_err)?;
    chart
        .configure_mesh()
        .x_desc("Iterations")
        .y_desc("Travel Time/Flow")
        .draw()
        .map_err(plot_err)?;

    for (i, (link, times)) in eq.history.iter().enumerate() {
        let style = Palette99::pick(i).stroke_width(2);
        chart
            .draw_series(LineSeries::new(
                times.iter().enumerate().map(|(x, &t)| (x as f64, t)),
                style,
            ))
            .map_err(plot_err)?
            .label(link.to_string())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        if let Some(f) = eq.flow.get(link) {
            chart
                .draw_series(
                    dashes(0.0, x_max, f.to_f64()).map(|seg| PathElement::new(seg, BLACK)),
                )
                .map_err(plot_err)?;
        }
    }
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(plot_err)?;
    root.present().map_err(plot_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::mocks::{mock_parallel_links, mock_single_link};
    use super::super::solver::{EquilibriumSolver, SolverConfig};
    use super::*;

    #[test]
    fn text_report() {
        let m = mock_parallel_links();
        let config = SolverConfig::<f64>::new(3, 0.01).unwrap();
        let eq = EquilibriumSolver::new(config).solve(&m).unwrap();
        let s = report_string(&m, &eq).unwrap();
        assert_eq!(
            s,
            "Equilibrium Flow Distribution:\n\
             Flow on A : 10\n\
             Travel time on A : 10\n\
             Flow on B : 0\n\
             Travel time on B : 5\n\
             not converged after 3 iterations\n\
             link travel times:\n\
             A: [10, 10, 0]\n\
             B: [15, 5, 15]\n"
        );
    }

    #[test]
    fn dashes_cover_every_other_step() {
        let segs: Vec<_> = dashes(0.0, 8.0, 3.0).collect();
        assert_eq!(segs.len(), DASHES);
        assert_eq!(segs[0], vec![(0.0, 3.0), (0.1, 3.0)]);
        assert!(segs.iter().all(|s| s[0].1 == 3.0 && s[1].1 == 3.0));
        assert!(segs.last().unwrap()[1].0 <= 8.0);
    }

    #[test]
    fn history_chart_is_written() {
        let m = mock_parallel_links();
        let config = SolverConfig::<f64>::new(6, 0.01).unwrap();
        let eq = EquilibriumSolver::new(config).solve(&m).unwrap();
        let path = std::env::temp_dir().join("wardrop_parallel_links_history.png");
        let _ = std::fs::remove_file(&path);
        plot_history(&path, &eq).unwrap();
        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn json_report() {
        let m = mock_single_link();
        let eq = EquilibriumSolver::new(SolverConfig::<usize>::default())
            .solve(&m)
            .unwrap();
        let v: serde_json::Value = serde_json::from_str(&to_json(&eq).unwrap()).unwrap();
        assert_eq!(v["flow"]["X"], 10);
        assert_eq!(v["history"]["X"][0], 1.0);
        assert_eq!(v["trace"].as_array().unwrap().len(), 1);
        assert_eq!(v["termination"]["converged"]["iteration"], 1);
    }
}
