//! Frame emission in the gnuplot animation protocol

use std::fmt::Display;
use std::io::Write;

use crate::grid::Grid2;
use crate::types::RealScalar;

/// Write the one-time animation header.
pub fn write_gnuplot_preamble<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "set contour")?;
    writeln!(out, "set terminal gif animate")?;
    writeln!(out, "set out 'anim.gif'")?;
    Ok(())
}

/// Write one grid snapshot as coordinate triples.
///
/// Each cell becomes the line `row*delta col*delta value` in row-major
/// order, with a blank record after every row so that line-based surface
/// plotters can split the mesh. A pure projection of the grid state; the
/// grid is never modified.
pub fn write_frame_data<W: Write, T: RealScalar + Display>(
    out: &mut W,
    grid: &Grid2<T>,
    delta: T,
) -> std::io::Result<()> {
    for i in 0..grid.rows() {
        let x = T::from(i).unwrap() * delta;
        for (j, value) in grid.row(i).iter().enumerate() {
            let y = T::from(j).unwrap() * delta;
            writeln!(out, "{} {} {}", x, y, value)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write one animation frame.
///
/// The frame is the `splot` directive, the inline frame data, and the
/// inline-data terminator `e`.
pub fn write_gnuplot_frame<W: Write, T: RealScalar + Display>(
    out: &mut W,
    grid: &Grid2<T>,
    delta: T,
) -> std::io::Result<()> {
    writeln!(out, "splot '-' w pm3d")?;
    write_frame_data(out, grid, delta)?;
    writeln!(out, "e")?;
    Ok(())
}
