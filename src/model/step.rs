//! Explicit Euler update of the Gray-Scott system with a 5-point Laplacian.
//!
//! Each step reads only the pre-step buffers and writes only the next
//! buffers, so no cell ever sees a neighbour that was already updated in the
//! same step. The outer ring is copied through unchanged.

use super::{Field, Parameters};
use crate::error::{Error, Result};

/// Intermediate terms of the last interior cell processed by a step, i.e.
/// cell `(width - 2, height - 2)`. All zero when the grid has no interior.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Diagnostics {
    pub laplace_u: f64,
    pub laplace_v: f64,
    pub du: f64,
    pub dv: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub u: Field,
    pub v: Field,
    pub diagnostics: Diagnostics,
}

fn check_shape(reference: &Field, other: &Field) -> Result<()> {
    if reference.same_shape(other) {
        Ok(())
    } else {
        Err(Error::shape_mismatch(reference.shape(), other.shape()))
    }
}

/// Advances `(u, v)` by one step into freshly allocated fields.
pub fn step(u: &Field, v: &Field, params: &Parameters) -> Result<StepResult> {
    check_shape(u, v)?;
    let mut next_u = u.clone_same_shape();
    let mut next_v = v.clone_same_shape();
    let diagnostics = step_into(u, v, &mut next_u, &mut next_v, params)?;
    Ok(StepResult {
        u: next_u,
        v: next_v,
        diagnostics,
    })
}

/// Advances `(u, v)` by one step, writing the result into `next_u`/`next_v`.
///
/// The next buffers are overwritten entirely: boundary cells are copied from
/// the inputs and interior cells receive the updated concentrations.
pub fn step_into(
    u: &Field,
    v: &Field,
    next_u: &mut Field,
    next_v: &mut Field,
    params: &Parameters,
) -> Result<Diagnostics> {
    check_shape(u, v)?;
    check_shape(u, next_u)?;
    check_shape(u, next_v)?;

    next_u.copy_from(u);
    next_v.copy_from(v);

    let Parameters { du, dv, f, k, dt } = *params;
    let domain = u.domain();
    let nx = domain.nx;
    let (us, vs) = (u.as_slice(), v.as_slice());
    let nu = next_u.as_mut_slice();
    let nv = next_v.as_mut_slice();

    // Row-major sweep; the final cell visited is (nx - 2, ny - 2).
    let mut diagnostics = Diagnostics::default();
    for y in domain.interior_y() {
        for x in domain.interior_x() {
            let i = y * nx + x;
            let a = us[i];
            let b = vs[i];

            let laplace_u = us[i + 1] + us[i - 1] + us[i + nx] + us[i - nx] - 4.0 * a;
            let laplace_v = vs[i + 1] + vs[i - 1] + vs[i + nx] + vs[i - nx] - 4.0 * b;

            let du_dt = du * laplace_u - a * b * b + f * (1.0 - a);
            let dv_dt = dv * laplace_v + a * b * b - (f + k) * b;

            nu[i] = a + dt * du_dt;
            nv[i] = b + dt * dv_dt;

            diagnostics = Diagnostics {
                laplace_u,
                laplace_v,
                du: du_dt,
                dv: dv_dt,
            };
        }
    }

    Ok(diagnostics)
}
